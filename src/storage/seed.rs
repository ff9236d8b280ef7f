use crate::core::{MedicationRecord, Result};
use std::fs;
use std::path::Path;

/// Read a JSON array of medication records.
///
/// The file is only read; nothing is ever written back.
pub fn read_seed_file(path: impl AsRef<Path>) -> Result<Vec<MedicationRecord>> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_seed(&contents)
}

pub fn parse_seed(json: &str) -> Result<Vec<MedicationRecord>> {
    let records: Vec<MedicationRecord> = serde_json::from_str(json)?;
    Ok(records)
}
