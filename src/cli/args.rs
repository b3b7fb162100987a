//! CLI argument definitions using clap
//!
//! Commands:
//! - prayers serve [--config <path>] [--host <host>] [--port <port>]
//! - prayers check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prayers - CRUD service for tracking prayers
#[derive(Parser, Debug)]
#[command(name = "prayers")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate configuration, then print it
    CheckConfig {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
