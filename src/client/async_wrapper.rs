//! Async wrapper around synchronous ApolloClient.
//!
//! This module provides an async interface to the synchronous ApolloClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::{ApiResponse, ApolloClient, ApolloRequest};
use crate::error::{ApolloApiError, ApolloApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async transport for Apollo API requests.
///
/// The dispatcher depends on this trait only, so tests can substitute a
/// recording mock for the real HTTP client.
#[async_trait]
pub trait AsyncApolloClient: Send + Sync {
    /// Send one request and return its status and JSON body.
    async fn execute(&self, request: ApolloRequest) -> ApolloApiResult<ApiResponse>;
}

/// Async wrapper around synchronous ApolloClient.
#[derive(Clone)]
pub struct AsyncApolloClientImpl {
    client: Arc<ApolloClient>,
}

impl AsyncApolloClientImpl {
    pub fn new(client: ApolloClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncApolloClient for AsyncApolloClientImpl {
    async fn execute(&self, request: ApolloRequest) -> ApolloApiResult<ApiResponse> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.execute(&request))
            .await
            .map_err(|e| ApolloApiError::Other(format!("Task join error: {}", e)))?
    }
}
