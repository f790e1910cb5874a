//! CLI error types
//!
//! Every CLI error is fatal: the process prints it and exits non-zero.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Config error: {0}")]
    Config(String),

    /// Snapshot could not be loaded at boot
    #[error("Boot failed: {0}")]
    Boot(#[from] StoreError),

    /// I/O failure outside the store
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file already exists at the init target
    #[error("Config file already exists: {0}")]
    AlreadyInitialized(String),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
