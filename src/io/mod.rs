//! Dataset loading and small file helpers.
//!
//! The dashboard consumes a static JSON array of user records. Loading is the
//! only place where the dataset invariants (unique ids, closed status set)
//! are checked; everything downstream assumes them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::errors::{DashError, Result};
use crate::model::UserRecord;

/// Read and validate a dataset file.
pub fn load_dataset(path: &Path) -> Result<Vec<UserRecord>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| DashError::file_system("Failed to read dataset", path, e))?;
    let records = parse_dataset(&contents, path)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Decode dataset contents. `origin` is only used for error reporting.
pub fn parse_dataset(contents: &str, origin: &Path) -> Result<Vec<UserRecord>> {
    let records: Vec<UserRecord> =
        serde_json::from_str(contents).map_err(|source| DashError::Dataset {
            path: origin.to_path_buf(),
            source,
        })?;
    validate_unique_ids(&records)?;
    Ok(records)
}

/// Reject datasets where two records share an id.
pub fn validate_unique_ids(records: &[UserRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    match records.iter().find(|record| !seen.insert(&record.id)) {
        Some(duplicate) => Err(DashError::DuplicateId(duplicate.id.to_string())),
        None => Ok(()),
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| DashError::file_system("Failed to write file", path, e))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
