//! Logging setup
//!
//! One `tracing` subscriber per process, writing to stdout. `RUST_LOG`
//! takes precedence over the configured level when it is set.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use super::ObservabilityError;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level: trace, debug, info, warn or error (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit one JSON object per line instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Parses the configured level
    pub fn level(&self) -> Result<Level, ObservabilityError> {
        Level::from_str(&self.level)
            .map_err(|_| ObservabilityError::InvalidLevel(self.level.clone()))
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the configured level is unknown or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), ObservabilityError> {
    let level = config.level()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };

    result.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}
