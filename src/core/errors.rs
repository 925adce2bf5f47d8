//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for userdash operations
#[derive(Debug, Error)]
pub enum DashError {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Dataset could not be decoded into user records
    #[error("Invalid dataset {path}: {source}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two records in the dataset share an id
    #[error("Duplicate user id '{0}' in dataset")]
    DuplicateId(String),

    /// Status outside of ACTIVE | INVITED | BLOCKED
    #[error("Unknown status '{0}' (expected ACTIVE, INVITED or BLOCKED)")]
    InvalidStatus(String),

    /// Date argument that is not a calendar date
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Page selection outside of the available pages
    #[error("Page {page} is out of range (1..={total})")]
    InvalidPage { page: usize, total: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Terminal setup, drawing or event errors
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl DashError {
    /// Create a file system error for a path.
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using DashError
pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_message() {
        let err = DashError::InvalidPage { page: 7, total: 3 };
        assert_eq!(err.to_string(), "Page 7 is out of range (1..=3)");
    }

    #[test]
    fn test_file_system_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DashError::file_system("Failed to read dataset", "/tmp/users.json", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(matches!(err, DashError::FileSystem { path: Some(_), .. }));
    }
}
