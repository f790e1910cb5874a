//! Snapshot store error types
//!
//! Load failures are fatal at startup: a snapshot that exists but cannot be
//! parsed is corruption, and starting empty over it would destroy the data
//! on the next save. Write failures are per-request errors.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Snapshot store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file exists but could not be read
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Backing file contents are not valid JSON
    #[error("Snapshot {path} is not valid JSON: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backing file parsed, but the top level is not an object
    #[error("Snapshot {path} does not contain a JSON object")]
    NotAnObject { path: String },

    /// Snapshot could not be written
    #[error("Failed to write snapshot {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn corrupt(path: &Path, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn not_an_object(path: &Path) -> Self {
        Self::NotAnObject {
            path: path.display().to_string(),
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether this error makes startup impossible
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Corrupt { .. } | Self::NotAnObject { .. })
    }
}
