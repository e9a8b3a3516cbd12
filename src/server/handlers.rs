//! MCP request handlers for the Apollo server.
//!
//! Tool listing and tool calls are implemented directly on `ServerHandler`
//! so that unknown tool names reach the dispatcher and come back as text.

use crate::tools::{list_tools, ToolDescriptor, ToolDispatcher};
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

/// The Apollo MCP server that exposes prospect enrichment and search tools.
#[derive(Clone)]
pub struct ApolloMcpServer {
    dispatcher: Arc<ToolDispatcher>,
}

impl ApolloMcpServer {
    /// Create a new Apollo MCP server.
    pub fn new(dispatcher: Arc<ToolDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// The catalog as rmcp tool definitions.
    pub fn tools() -> Vec<Tool> {
        list_tools().iter().map(to_rmcp_tool).collect()
    }

    /// Handle one tool call; never fails.
    pub async fn handle_call(&self, request: CallToolRequestParam) -> CallToolResult {
        let arguments = request.arguments.unwrap_or_default();

        tracing::debug!(
            "MCP Handler: call_tool name={}, argument_keys={:?}",
            request.name,
            arguments.keys().collect::<Vec<_>>()
        );

        let text = self.dispatcher.call_tool(&request.name, &arguments).await;
        CallToolResult::success(vec![Content::text(text)])
    }
}

fn to_rmcp_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool::new(
        descriptor.name.as_str(),
        descriptor.description,
        Arc::new(descriptor.input_schema()),
    )
}

impl ServerHandler for ApolloMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "apollo-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for Apollo.io - provides person and organization enrichment, people search, and contact reveal.".into()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(Self::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.handle_call(request).await)
    }
}
