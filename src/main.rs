//! Apollo MCP Server - Main entry point
//!
//! This is the main executable for the Apollo MCP Server, which provides a Model Context
//! Protocol (MCP) interface to Apollo.io prospect data.

use anyhow::Result;
use apollo_mcp_server::client::{AsyncApolloClient, AsyncApolloClientImpl};
use apollo_mcp_server::{ApolloClient, ApolloMcpServer, Config, Metrics, ToolDispatcher};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if !config.has_api_key() {
        warn!("APOLLO_API_KEY is not set; every tool call will return an error");
    }

    info!(
        "Starting Apollo MCP Server with API URL: {} (timeout: {}s)",
        config.apollo_api_url, config.request_timeout
    );

    let metrics = Metrics::new();

    let sync_client = ApolloClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncApolloClientImpl::new(sync_client)) as Arc<dyn AsyncApolloClient>;

    let dispatcher =
        ToolDispatcher::new(client, config.apollo_api_key.clone()).with_metrics(metrics.clone());
    let server = ApolloMcpServer::new(Arc::new(dispatcher));

    info!("Starting MCP server with stdio transport");
    apollo_mcp_server::server::run_server(server).await?;

    let summary = metrics.summary();
    info!(
        "Apollo MCP Server shutdown complete: {} tool calls ({} failed), {} HTTP requests ({} errors, avg {:.1} ms)",
        summary.tool_calls_total,
        summary.tool_failures_total,
        summary.http_requests_total,
        summary.http_errors_total,
        summary.http_duration_avg_ms
    );
    Ok(())
}
