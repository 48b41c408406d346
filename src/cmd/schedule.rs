//! Schedule command - compute and display the depreciation schedule

use crate::export;
use crate::format::format_amount;
use crate::input::read_input;
use crate::schedule::{compute_schedule, ScheduleRow};
use crate::validate::validate_input;
use clap::Args;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ScheduleCommand {
    /// JSON file containing asset parameters and events (or "-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl ScheduleCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = read_input(&self.input)?;

        let errors = validate_input(&input);
        if !errors.is_empty() {
            for error in &errors {
                eprintln!("invalid input - {}", error);
            }
            anyhow::bail!("{} validation error(s), schedule not computed", errors.len());
        }

        let schedule = compute_schedule(&input.asset, &input.capitalizations, &input.corrections);
        log::info!(
            "computed {} schedule row(s) for acquisition year {}",
            schedule.len(),
            input.asset.acquisition_year
        );

        if self.csv {
            export::write_csv(&schedule, io::stdout())
        } else {
            self.print_table(&schedule);
            Ok(())
        }
    }

    fn print_table(&self, schedule: &[ScheduleRow]) {
        if schedule.is_empty() {
            println!("No depreciation years in range");
            return;
        }

        let rows: Vec<YearRow> = schedule.iter().map(YearRow::from).collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);

        let last = schedule.last().expect("schedule is non-empty");
        println!(
            "Total depreciation: {} | Ending book value: {}",
            format_amount(last.accumulated_depreciation),
            format_amount(last.ending_book_value)
        );
    }
}

/// Row for the schedule table output
#[derive(Debug, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: i32,

    #[tabled(rename = "Depreciation")]
    depreciation: String,

    #[tabled(rename = "Accumulated")]
    accumulated: String,

    #[tabled(rename = "Book Value")]
    book_value: String,

    #[tabled(rename = "Remaining Life")]
    remaining_life: u32,
}

impl From<&ScheduleRow> for YearRow {
    fn from(row: &ScheduleRow) -> Self {
        YearRow {
            year: row.year,
            depreciation: format_amount(row.depreciation_charge),
            accumulated: format_amount(row.accumulated_depreciation),
            book_value: format_amount(row.ending_book_value),
            remaining_life: row.remaining_life_after_year,
        }
    }
}
