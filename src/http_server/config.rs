//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin (default: [])
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Checks that the config can be bound
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        Ok(())
    }
}
