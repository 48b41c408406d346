//! Straight-line depreciation schedule engine.
//!
//! A pure pass over the years from acquisition to the reporting year,
//! applying capital additions and corrections before each year's charge.
//! Each invocation is independent; the engine holds no state across calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asset parameters fixed for one computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetParameters {
    /// Acquisition book value.
    pub initial_cost: Decimal,
    /// Year the asset entered service.
    pub acquisition_year: i32,
    /// Original depreciation period in years. Also the ceiling for any
    /// life extension granted by a capitalization.
    pub useful_life: u32,
    /// Last year included in the schedule.
    pub reporting_year: i32,
}

/// A capital addition recognized in `year`. Increases book value and may
/// extend remaining life, capped at the original useful life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalizationEvent {
    pub year: i32,
    pub amount: Decimal,
    #[serde(default)]
    pub life_extension: u32,
}

/// A downward book-value adjustment recognized in `year`. Never changes
/// remaining life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionEvent {
    pub year: i32,
    pub amount: Decimal,
}

/// One year of the computed schedule. Monetary fields are rounded to two
/// decimal places at emission; the running accumulator stays unrounded
/// internally so rounding error does not compound across years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub year: i32,
    pub depreciation_charge: Decimal,
    pub accumulated_depreciation: Decimal,
    pub ending_book_value: Decimal,
    /// Life remaining once this year is counted as consumed, i.e. the
    /// current iteration's remaining life minus one. Reproduced as the
    /// source displays it.
    pub remaining_life_after_year: u32,
}

/// Compute the annual straight-line schedule from acquisition through the
/// reporting year.
///
/// All capitalizations and corrections keyed at a year are applied before
/// that year's charge is computed, capitalizations first. Events dated
/// before the acquisition year are never visited; events dated after the
/// reporting year are ignored. Returns an empty schedule when the
/// acquisition year exceeds the reporting year or the useful life is zero.
pub fn compute_schedule(
    params: &AssetParameters,
    capitalizations: &[CapitalizationEvent],
    corrections: &[CorrectionEvent],
) -> Vec<ScheduleRow> {
    // Per-year index built fresh each invocation, insertion order kept.
    let mut caps_by_year: HashMap<i32, Vec<&CapitalizationEvent>> = HashMap::new();
    for cap in capitalizations {
        caps_by_year.entry(cap.year).or_default().push(cap);
    }
    let mut corrections_by_year: HashMap<i32, Vec<&CorrectionEvent>> = HashMap::new();
    for correction in corrections {
        corrections_by_year.entry(correction.year).or_default().push(correction);
    }

    let original_life = params.useful_life;
    let mut book_value = params.initial_cost;
    let mut remaining_life = params.useful_life;
    let mut accumulated = Decimal::ZERO;
    let mut year = params.acquisition_year;
    let mut schedule = Vec::new();

    while remaining_life > 0 && year <= params.reporting_year {
        if let Some(caps) = caps_by_year.get(&year) {
            for cap in caps {
                if cap.year > params.reporting_year {
                    continue;
                }
                book_value += cap.amount;
                // Re-capped per event against the original life, so repeated
                // additions never extend past the original span.
                remaining_life = (remaining_life + cap.life_extension).min(original_life);
                log::debug!(
                    "Capitalization {}: +{}, life extension {} -> remaining life {}",
                    year,
                    cap.amount,
                    cap.life_extension,
                    remaining_life
                );
            }
        }
        if let Some(adjustments) = corrections_by_year.get(&year) {
            for correction in adjustments {
                if correction.year > params.reporting_year {
                    continue;
                }
                book_value -= correction.amount;
                log::debug!("Correction {}: -{}", year, correction.amount);
            }
        }

        let annual = if remaining_life > 0 {
            book_value / Decimal::from(remaining_life)
        } else {
            Decimal::ZERO
        };
        accumulated += annual;

        schedule.push(ScheduleRow {
            year,
            depreciation_charge: annual.round_dp(2),
            accumulated_depreciation: accumulated.round_dp(2),
            ending_book_value: (book_value - annual).round_dp(2),
            remaining_life_after_year: remaining_life - 1,
        });

        book_value -= annual;
        remaining_life -= 1;
        year += 1;
    }

    schedule
}
