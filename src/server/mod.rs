//! MCP server implementation for Apollo.io.
//!
//! This module provides the MCP protocol server that exposes the Apollo
//! tools to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ApolloMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the Apollo MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// peer disconnects.
pub async fn run_server(server: ApolloMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
