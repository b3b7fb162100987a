//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::io;

use thiserror::Error;

use crate::observability::ObservabilityError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable, or invalid
    #[error("PRAYERS_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// I/O error (stdout)
    #[error("PRAYERS_CLI_IO_ERROR: {0}")]
    Io(String),

    /// Startup failed before the server was serving
    #[error("PRAYERS_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "PRAYERS_CLI_CONFIG_ERROR",
            CliError::Io(_) => "PRAYERS_CLI_IO_ERROR",
            CliError::BootFailed(_) => "PRAYERS_CLI_BOOT_FAILED",
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::BootFailed(format!("failed to open table: {}", e))
    }
}

impl From<ObservabilityError> for CliError {
    fn from(e: ObservabilityError) -> Self {
        CliError::BootFailed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
