//! CLI command implementations
//!
//! `serve` resolves configuration once, constructs the store handle once,
//! and hands it to the HTTP server. Nothing is global.

use std::path::Path;

use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, Event};
use crate::service::RecordService;

use super::args::Command;
use super::errors::CliResult;

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    // A missing .env file is normal
    dotenvy::dotenv().ok();

    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Resolve configuration and serve HTTP until shutdown
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    init_logging(config.log_format);
    log_event(Event::ConfigLoaded, &config.table_name);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let store = config.build_store();
        log_event(Event::StoreReady, store.table());

        let service = RecordService::new(store);
        HttpServer::new(config.http.clone(), service).start().await
    })?;

    Ok(())
}

/// Print the resolved configuration as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = AppConfig::load(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
