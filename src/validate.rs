//! Input validation for the schedule engine.
//!
//! The engine itself never raises; every rule here is checked before it is
//! invoked. Violations are collected and reported together rather than
//! failing on the first one.

use crate::input::ScheduleInput;
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

/// Earliest calendar year accepted for any parameter or event.
pub const MIN_YEAR: i32 = 1900;

/// A single rule violation, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Validate a full input document, returning every violation found.
/// An empty vector means the input is safe to hand to the engine.
pub fn validate_input(input: &ScheduleInput) -> Vec<ValidationError> {
    validate_input_as_of(input, chrono::Utc::now().year())
}

/// Validation against an explicit "current year" upper bound.
pub fn validate_input_as_of(input: &ScheduleInput, current_year: i32) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let asset = &input.asset;

    if asset.initial_cost <= Decimal::ZERO {
        errors.push(ValidationError::new("initial_cost", "must be positive"));
    }
    if asset.useful_life < 1 {
        errors.push(ValidationError::new("useful_life", "must be at least 1 year"));
    }
    if asset.acquisition_year > asset.reporting_year {
        errors.push(ValidationError::new(
            "acquisition_year",
            "must not exceed the reporting year",
        ));
    }
    check_year_range("acquisition_year", asset.acquisition_year, current_year, &mut errors);
    check_year_range("reporting_year", asset.reporting_year, current_year, &mut errors);

    for (i, cap) in input.capitalizations.iter().enumerate() {
        let field = format!("capitalizations[{}]", i);
        check_event_year(&field, cap.year, asset.acquisition_year, current_year, &mut errors);
        if cap.amount < Decimal::ZERO {
            errors.push(ValidationError::new(&field, "amount must not be negative"));
        }
    }
    for (i, correction) in input.corrections.iter().enumerate() {
        let field = format!("corrections[{}]", i);
        check_event_year(
            &field,
            correction.year,
            asset.acquisition_year,
            current_year,
            &mut errors,
        );
        if correction.amount < Decimal::ZERO {
            errors.push(ValidationError::new(&field, "amount must not be negative"));
        }
    }

    if !errors.is_empty() {
        log::debug!("input rejected with {} validation error(s)", errors.len());
    }
    errors
}

fn check_year_range(field: &str, year: i32, current_year: i32, errors: &mut Vec<ValidationError>) {
    if year < MIN_YEAR || year > current_year {
        errors.push(ValidationError::new(
            field,
            format!("year must be between {} and {}", MIN_YEAR, current_year),
        ));
    }
}

fn check_event_year(
    field: &str,
    year: i32,
    acquisition_year: i32,
    current_year: i32,
    errors: &mut Vec<ValidationError>,
) {
    check_year_range(field, year, current_year, errors);
    if year < acquisition_year {
        errors.push(ValidationError::new(
            field,
            "year must not precede the acquisition year",
        ));
    }
}
