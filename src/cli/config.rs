//! Service configuration file
//!
//! JSON document with three optional sections:
//!
//! ```json
//! {
//!   "http":  { "host": "0.0.0.0", "port": 3000, "cors_origins": [] },
//!   "store": { "backend": "file", "table_name": "Prayers", "data_dir": "./data" },
//!   "log":   { "level": "info", "json": false }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;
use crate::store::StoreConfig;

use super::errors::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> CliResult<()> {
        self.http.validate().map_err(CliError::Config)?;
        self.store.validate().map_err(CliError::Config)?;
        self.log
            .level()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(())
    }

    /// Apply command-line overrides, then re-validate
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> CliResult<Self> {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self.validate()?;
        Ok(self)
    }
}
