use apollo_mcp_server::client::{ApiResponse, ApolloRequest, AsyncApolloClient};
use apollo_mcp_server::error::{ApolloApiError, ApolloApiResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted outcome for one request.
#[allow(dead_code)]
enum Scripted {
    Respond(u16, Value),
    Fail(String),
}

/// Mock Apollo transport for testing.
///
/// Replies with scripted responses (the last one repeats once the queue is
/// down to a single entry) and records every request for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockApolloClient {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<ApolloRequest>>>,
}

#[allow(dead_code)]
impl MockApolloClient {
    /// Create a mock with no scripted responses; any request fails.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always answers with `status` and `body`.
    pub fn responding(status: u16, body: Value) -> Self {
        let mock = Self::new();
        mock.push_response(status, body);
        mock
    }

    /// Queue a response.
    pub fn push_response(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::Respond(status, body));
    }

    /// Queue a transport failure.
    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// All requests received, oldest first.
    pub fn requests(&self) -> Vec<ApolloRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ApolloRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AsyncApolloClient for MockApolloClient {
    async fn execute(&self, request: ApolloRequest) -> ApolloApiResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        let scripted = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().map(|s| match s {
                Scripted::Respond(status, body) => Scripted::Respond(*status, body.clone()),
                Scripted::Fail(message) => Scripted::Fail(message.clone()),
            })
        };

        match scripted {
            Some(Scripted::Respond(status, body)) => Ok(ApiResponse::new(status, body)),
            Some(Scripted::Fail(message)) => Err(ApolloApiError::HttpError(message)),
            None => Err(ApolloApiError::Other("no scripted response".to_string())),
        }
    }
}
