//! Input document for a schedule computation (JSON).

use crate::schedule::{AssetParameters, CapitalizationEvent, CorrectionEvent};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Root of the schedule input JSON: the asset parameters plus any
/// capitalization and correction events collected by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub asset: AssetParameters,
    #[serde(default)]
    pub capitalizations: Vec<CapitalizationEvent>,
    #[serde(default)]
    pub corrections: Vec<CorrectionEvent>,
}

/// Read a schedule input document from a file, or stdin with "-".
pub fn read_input(path: &Path) -> anyhow::Result<ScheduleInput> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn read_from_stdin() -> anyhow::Result<ScheduleInput> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    Ok(serde_json::from_slice(&buffer)?)
}
