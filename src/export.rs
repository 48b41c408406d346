//! CSV export of a computed schedule.
//!
//! Column order is fixed and values are emitted exactly as returned by the
//! engine, never re-derived.

use crate::schedule::ScheduleRow;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Write schedule rows to CSV.
pub fn write_csv<'a, R, W>(rows: R, writer: W) -> anyhow::Result<()>
where
    R: IntoIterator<Item = &'a ScheduleRow>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        let record: ScheduleCsvRecord = row.into();
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
struct ScheduleCsvRecord {
    year: i32,
    depreciation_charge: String,
    accumulated_depreciation: String,
    ending_book_value: String,
    remaining_useful_life: u32,
}

impl From<&ScheduleRow> for ScheduleCsvRecord {
    fn from(row: &ScheduleRow) -> Self {
        ScheduleCsvRecord {
            year: row.year,
            depreciation_charge: format!("{:.2}", row.depreciation_charge),
            accumulated_depreciation: format!("{:.2}", row.accumulated_depreciation),
            ending_book_value: format!("{:.2}", row.ending_book_value),
            remaining_useful_life: row.remaining_life_after_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{compute_schedule, AssetParameters};
    use rust_decimal_macros::dec;

    #[test]
    fn fixed_column_order_and_engine_values() {
        let schedule = compute_schedule(
            &AssetParameters {
                initial_cost: dec!(1200000),
                acquisition_year: 2020,
                useful_life: 5,
                reporting_year: 2021,
            },
            &[],
            &[],
        );

        let mut output = Vec::new();
        write_csv(&schedule, &mut output).unwrap();
        let csv_str = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv_str.lines().collect();

        assert_eq!(
            lines[0],
            "year,depreciation_charge,accumulated_depreciation,ending_book_value,remaining_useful_life"
        );
        assert_eq!(lines[1], "2020,240000.00,240000.00,960000.00,4");
        assert_eq!(lines[2], "2021,240000.00,480000.00,720000.00,3");
    }
}
