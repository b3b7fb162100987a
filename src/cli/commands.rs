//! CLI command implementations

use std::io::Write;
use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::{init_tracing, Event};
use crate::rest_api::PrayerHandler;
use crate::store::open_store;

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Load config, open the table, and serve HTTP until shutdown.
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = ServiceConfig::load_or_default(config_path)?.with_overrides(host, port)?;

    init_tracing(&config.log)?;
    tracing::info!(
        event = %Event::ConfigLoaded,
        addr = %config.http.socket_addr(),
        table = %config.store.table_name,
        "configuration loaded"
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = open_store(&config.store).await?;
        let server = HttpServer::new(config.http.clone(), PrayerHandler::new(store));

        server
            .start()
            .await
            .map_err(|e| CliError::BootFailed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate the config and print the effective result as JSON.
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = ServiceConfig::load_or_default(config_path)?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::Io(format!("JSON error: {}", e)))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}
