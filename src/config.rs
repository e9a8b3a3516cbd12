//! Configuration management for the Apollo MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL of the Apollo REST API.
pub const DEFAULT_APOLLO_API_URL: &str = "https://api.apollo.io/v1";

/// Default HTTP timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Apollo MCP Server.
///
/// Read once at startup and never mutated afterwards. Tests build values
/// directly instead of going through the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Apollo API base URL
    pub apollo_api_url: String,

    /// Apollo API key. `None` when unset or empty; every tool call then
    /// short-circuits with a fixed error text.
    pub apollo_api_key: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `APOLLO_API_KEY`: API key sent as `X-Api-Key`
    /// - `APOLLO_API_BASE_URL`: Base URL for the Apollo API (default: `https://api.apollo.io/v1`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let apollo_api_key = env::var("APOLLO_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let apollo_api_url =
            env::var("APOLLO_API_BASE_URL").unwrap_or_else(|_| DEFAULT_APOLLO_API_URL.to_string());

        if !apollo_api_url.starts_with("http://") && !apollo_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "APOLLO_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be a positive number, got: 0".to_string(),
            });
        }

        Ok(Config {
            apollo_api_url,
            apollo_api_key,
            request_timeout,
        })
    }

    /// Whether an API key is available for outbound calls.
    pub fn has_api_key(&self) -> bool {
        self.apollo_api_key.is_some()
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            apollo_api_url: DEFAULT_APOLLO_API_URL.to_string(),
            apollo_api_key: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
