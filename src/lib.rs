//! Apollo MCP Server - a Model Context Protocol server for Apollo.io.
//!
//! Exposes four Apollo lookups as MCP tools: person enrichment, organization
//! enrichment, people search and contact reveal. Each tool call issues exactly
//! one HTTP request and returns a single text payload.
//!
//! # Architecture
//!
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **client**: HTTP client for the Apollo API
//! - **metrics**: Request and tool-call counters
//! - **tools**: Tool catalog, typed invocations, reshaping and dispatch
//! - **server**: MCP protocol server

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod tools;

pub use client::{ApiResponse, ApolloClient, ApolloRequest, HttpMethod};
pub use config::Config;
pub use error::{ApolloApiError, ConfigError, ToolError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use server::ApolloMcpServer;
pub use tools::{list_tools, ToolCall, ToolDescriptor, ToolDispatcher, ToolName};
