//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging on stderr and serves the Ship It
//! Squirrel tools over stdio until the client disconnects.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use shipitsquirrel_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Missing credentials abort before anything touches stdout
    let config = Config::from_env()?;

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config)?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Stdout carries the protocol, so all log output goes to stderr.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
