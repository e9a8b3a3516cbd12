//! HTTP client for interacting with the Apollo.io REST API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client only moves bytes: it does not decide
//! whether a response means success, so non-2xx statuses come back as ordinary
//! [`ApiResponse`] values carrying the remote JSON body.

mod async_wrapper;
pub use async_wrapper::{AsyncApolloClient, AsyncApolloClientImpl};

use crate::config::Config;
use crate::error::{ApolloApiError, ApolloApiResult};
use crate::metrics::{HttpTimer, Metrics};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A single outbound request, built per tool call and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ApolloRequest {
    pub method: HttpMethod,

    /// Path relative to the API base URL (e.g. `people/match`)
    pub path: String,

    pub headers: Vec<(String, String)>,

    /// JSON body, sent only for POST requests
    pub body: Option<Value>,
}

impl ApolloRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Add a header, keeping insertion order.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code plus parsed JSON body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP client for the Apollo API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ApolloClient {
    /// Base URL for the Apollo API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ApolloClient {
    /// Create a new ApolloClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(
            config.apollo_api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create an ApolloClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector with this client.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a request and parse the response body as JSON.
    ///
    /// Any status code yields `Ok` as long as the body is valid JSON.
    pub fn execute(&self, request: &ApolloRequest) -> ApolloApiResult<ApiResponse> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(&request.path);

        tracing::debug!("{} {}", request.method.as_str(), url);

        let mut call = self.agent.request(request.method.as_str(), &url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let result = match &request.body {
            Some(body) => call.send_json(body),
            None => call.call(),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                let error = Self::map_transport_error(transport);
                tracing::error!("{} {} - Error: {:?}", request.method.as_str(), url, error);
                timer.complete_with_error();
                return Err(error);
            }
        };

        let status = response.status();
        tracing::debug!("{} {} - status: {}", request.method.as_str(), url, status);

        let parsed = response
            .into_string()
            .map_err(|e| ApolloApiError::HttpError(e.to_string()))
            .and_then(|text| serde_json::from_str::<Value>(&text).map_err(ApolloApiError::from));

        match parsed {
            Ok(body) => {
                timer.complete();
                Ok(ApiResponse::new(status, body))
            }
            Err(e) => {
                tracing::error!("{} {} - unreadable body: {}", request.method.as_str(), url, e);
                timer.complete_with_error();
                Err(e)
            }
        }
    }

    /// Map a ureq transport error to an ApolloApiError.
    fn map_transport_error(transport: ureq::Transport) -> ApolloApiError {
        let message = transport.to_string();
        match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => {
                ApolloApiError::HttpError("Connection failed".to_string())
            }
            ureq::ErrorKind::Io if message.contains("timed out") => ApolloApiError::Timeout,
            _ => ApolloApiError::HttpError(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn test_client(server: &mockito::Server) -> ApolloClient {
        ApolloClient::with_base_url(server.url(), Duration::from_secs(5))
    }

    #[test]
    fn test_build_url_joins_slashes() {
        let client = ApolloClient::with_base_url(
            "https://api.apollo.io/v1/".to_string(),
            Duration::from_secs(1),
        );
        assert_eq!(
            client.build_url("/people/match"),
            "https://api.apollo.io/v1/people/match"
        );
        assert_eq!(
            client.build_url("people/abc"),
            "https://api.apollo.io/v1/people/abc"
        );
    }

    #[test]
    fn test_request_header_lookup_is_case_insensitive() {
        let request = ApolloRequest::get("people/1").with_header("X-Api-Key", "secret");
        assert_eq!(request.header("x-api-key"), Some("secret"));
        assert_eq!(request.header("Cache-Control"), None);
    }

    #[test]
    fn test_execute_post_sends_headers_and_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/people/match")
            .match_header("x-api-key", "secret")
            .match_body(Matcher::Json(json!({"first_name": "Jane"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"person": {"name": "Jane Doe"}}"#)
            .create();

        let client = test_client(&server);
        let request = ApolloRequest::post("people/match", json!({"first_name": "Jane"}))
            .with_header("X-Api-Key", "secret");

        let response = client.execute(&request).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["person"]["name"], "Jane Doe");
        assert_eq!(client.metrics().http_requests_total(), 1);
        assert_eq!(client.metrics().http_errors_total(), 0);
        mock.assert();
    }

    #[test]
    fn test_execute_returns_error_status_as_response() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/people/missing")
            .with_status(404)
            .with_body(r#"{"message": "not found"}"#)
            .create();

        let client = test_client(&server);
        let response = client.execute(&ApolloRequest::get("people/missing")).unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_ok());
        assert_eq!(response.body["message"], "not found");
        mock.assert();
    }

    #[test]
    fn test_execute_rejects_non_json_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/people/1")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create();

        let client = test_client(&server);
        let result = client.execute(&ApolloRequest::get("people/1"));
        assert!(matches!(result, Err(ApolloApiError::JsonError(_))));
        assert_eq!(client.metrics().http_errors_total(), 1);
    }

    #[test]
    fn test_execute_connection_failure() {
        // Nothing listens on port 1
        let client =
            ApolloClient::with_base_url("http://127.0.0.1:1".to_string(), Duration::from_secs(2));
        let result = client.execute(&ApolloRequest::get("people/1"));
        assert!(matches!(result, Err(ApolloApiError::HttpError(_))));
    }
}
