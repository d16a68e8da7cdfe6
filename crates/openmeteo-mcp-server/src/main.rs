//! Open-Meteo MCP Server - Entry Point
//!
//! Runs the MCP server over stdio (default) or streamable HTTP.

use anyhow::{Context, Result};
use argh::FromArgs;
use openmeteo_mcp_server::{lookup, server, Config};

/// Open-Meteo MCP Server - current weather for AI assistants
#[derive(FromArgs)]
struct Args {
    /// path to a YAML configuration file (optional, uses Open-Meteo defaults)
    #[argh(option, short = 'c')]
    config: Option<String>,

    /// serve streamable HTTP on 127.0.0.1:<port>/mcp instead of stdio
    #[argh(switch)]
    http: bool,

    /// port for the HTTP transport (default: 8089)
    #[argh(option, short = 'p', default = "server::MCP_PORT")]
    port: u16,

    /// look up one location, print the result as JSON and exit
    #[argh(option, short = 'q')]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = argh::from_env();

    // Initialize logging to stderr (stdout is used for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from '{}'", path))?,
        None => Config::default(),
    }
    .with_env_overrides()
    .context("Invalid configuration override")?;

    log::info!("Geocoding endpoint: {}", config.geocoding_url);
    log::info!("Forecast endpoint: {}", config.forecast_url);

    if let Some(location) = args.query {
        let outcome = lookup(&config, &location).await;
        println!("{}", outcome.to_json());
        return Ok(());
    }

    if args.http {
        let shutdown_tx = tokio::sync::watch::Sender::new(());
        ctrlc::set_handler({
            let shutdown_tx = shutdown_tx.clone();
            move || {
                log::info!("Received Ctrl+C, shutting down gracefully...");
                shutdown_tx.send(()).ok();
            }
        })?;

        server::run_mcp_server(config, args.port, shutdown_tx.subscribe())
            .await
            .map_err(|e| anyhow::anyhow!("MCP HTTP server failed: {}", e))?;
    } else {
        server::run_stdio(config).await?;
    }

    Ok(())
}
