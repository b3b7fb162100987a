//! Store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Table name used when none is configured
pub const DEFAULT_TABLE_NAME: &str = "Prayers";

/// Which table implementation backs the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map, lost on exit
    Memory,
    /// One JSON document per table under `data_dir`
    File,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend (default: memory)
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    /// Table name (default: "Prayers")
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Directory for file-backed tables (default: "./data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_backend() -> StoreBackend {
    StoreBackend::Memory
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            table_name: default_table_name(),
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// Checks the settings that cannot be defaulted away
    pub fn validate(&self) -> Result<(), String> {
        if self.table_name.trim().is_empty() {
            return Err("table_name must not be empty".to_string());
        }
        if self
            .table_name
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'))
        {
            return Err(format!(
                "table_name '{}' may only contain letters, digits, '_', '-' and '.'",
                self.table_name
            ));
        }
        Ok(())
    }
}
