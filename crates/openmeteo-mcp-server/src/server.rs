//! MCP (Model Context Protocol) adapter for the weather lookup.
//!
//! Exposes `get_current_weather` as an MCP tool over stdio or streamable
//! HTTP. Both result shapes come back as ordinary tool results; callers tell
//! them apart by the presence of the `error` field.

use std::sync::Arc;

use log::info;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ServerHandler, ServiceExt};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::Config;
use crate::orchestrator;

/// Default port for the streamable HTTP transport.
pub const MCP_PORT: u16 = 8089;

/// Open-Meteo MCP server. Holds configuration only; every tool call builds
/// and drops its own HTTP client.
#[derive(Clone)]
pub struct WeatherMcpServer {
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

// ── Tool parameter types ──────────────────────────────────────────

#[derive(Deserialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    /// Place name to look up (e.g., "Houston", "Paris", "Tokyo")
    pub location: String,
}

// ── Tool implementations ──────────────────────────────────────────

#[tool_router]
impl WeatherMcpServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Gets the current weather for a specified location. It first finds the latitude and longitude for the location, then fetches the current weather conditions. Temperatures are in Fahrenheit and wind speed in mph. Returns an object with an 'error' field if the lookup fails.")]
    async fn get_current_weather(
        &self,
        Parameters(req): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        info!("Tool called: get_current_weather location='{}'", req.location);
        let outcome = orchestrator::lookup(&self.config, &req.location).await;
        Ok(CallToolResult::success(vec![Content::text(outcome.to_json())]))
    }
}

#[tool_handler]
impl ServerHandler for WeatherMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Open-Meteo weather server.\n\
                 get_current_weather(location) — current temperature (°F), wind speed (mph) and \
                 conditions for a place name. Only the best geocoding match is used."
                    .into(),
            ),
        }
    }
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn run_stdio(config: Config) -> anyhow::Result<()> {
    info!("MCP server ready, listening on stdio...");
    let service = WeatherMcpServer::new(config)
        .serve(rmcp::transport::stdio())
        .await?;
    let reason = service.waiting().await?;
    info!("MCP stdio session ended: {:?}", reason);
    Ok(())
}

/// Start the MCP HTTP server on the given port.
///
/// Mounts the StreamableHttpService at `/mcp` and blocks until shutdown.
pub async fn run_mcp_server(
    config: Config,
    port: u16,
    mut shutdown_rx: tokio::sync::watch::Receiver<()>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    };

    let mcp_service = StreamableHttpService::new(
        move || Ok(WeatherMcpServer::new(config.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", mcp_service);

    let bind_addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("MCP server listening on http://{}/mcp", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.ok();
        })
        .await?;

    info!("MCP server stopped.");
    Ok(())
}
