//! Validate command - surface input issues without computing a schedule

use crate::input::read_input;
use crate::validate::{validate_input, ValidationError};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// JSON file containing asset parameters and events (or "-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    error_count: usize,
    errors: Vec<ValidationError>,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = read_input(&self.input)?;
        let errors = validate_input(&input);

        if self.json {
            let output = ValidationOutput {
                error_count: errors.len(),
                errors: errors.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            self.print_text(&errors);
        }

        // Exit with code 1 if issues found
        if !errors.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn print_text(&self, errors: &[ValidationError]) {
        println!();
        println!("VALIDATION RESULTS");
        println!();

        if errors.is_empty() {
            println!("\u{2713} No issues found.");
        } else {
            println!("\u{26A0} {} issue(s) found:", errors.len());
            println!();
            for (i, error) in errors.iter().enumerate() {
                println!("  {}. {}", i + 1, error);
            }
            println!();
        }
    }
}
