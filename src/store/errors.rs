//! # Store Errors

use thiserror::Error;

/// Result type for table operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Table access errors
///
/// None of these are mapped to client responses. They propagate out of the
/// handlers as unhandled failures.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Table unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Corrupt table file {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Encoding(e.to_string())
    }
}
