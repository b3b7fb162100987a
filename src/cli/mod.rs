//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - check-config: Validate and print the effective configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliResult};
