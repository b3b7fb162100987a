//! Observability subsystem
//!
//! Structured logging through `tracing`, plus the typed `Event` names that
//! every lifecycle and prayer log line carries.
//!
//! # Usage
//!
//! ```ignore
//! use prayers::observability::{init_tracing, Event, LogConfig};
//!
//! init_tracing(&LogConfig::default())?;
//! tracing::info!(event = %Event::Serving, addr = %addr, "listening");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_tracing, LogConfig};

use thiserror::Error;

/// Observability errors
#[derive(Debug, Clone, Error)]
pub enum ObservabilityError {
    /// Level string did not parse
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// A global subscriber was already set
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
