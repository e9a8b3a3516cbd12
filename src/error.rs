//! Error types for the Apollo MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these cross the MCP boundary directly: the dispatcher renders them as text.

use thiserror::Error;

/// Errors that can occur when talking to the Apollo API.
///
/// Non-2xx statuses are not represented here; they come back as an
/// [`ApiResponse`](crate::client::ApiResponse) so the remote `message` can be reported.
#[derive(Error, Debug)]
pub enum ApolloApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while executing a single tool call.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Arguments do not fit the tool's input schema
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// The outbound call failed before a response could be read
    #[error(transparent)]
    Api(#[from] ApolloApiError),

    /// A reshaped result could not be serialized
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ApolloApiError
pub type ApolloApiResult<T> = Result<T, ApolloApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ToolError
pub type ToolResult<T> = Result<T, ToolError>;
