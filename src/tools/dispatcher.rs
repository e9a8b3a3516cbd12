//! Tool dispatcher: turns a tool name plus arguments into exactly one Apollo
//! call and a single text payload.
//!
//! Nothing here returns an error to the caller. Failures are reported as text,
//! with internal errors carried as [`ToolError`] until the outermost boundary.

use crate::client::{ApiResponse, AsyncApolloClient};
use crate::error::{ApolloApiError, ToolResult};
use crate::metrics::Metrics;
use crate::tools::call::ToolCall;
use crate::tools::catalog::ToolName;
use crate::tools::reshape::{
    error_message, non_empty_object, to_pretty_ascii_string, ContactInfo, OrganizationEnrichment,
    PeopleSearchResults, PersonEnrichment,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Returned for every call when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str = "Error: APOLLO_API_KEY environment variable not set";

/// Prefix for failures that happen before a response can be interpreted.
pub const API_FAILURE_PREFIX: &str = "Error calling Apollo API: ";

/// Text payload produced by a tool call, tagged with whether it is an error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn failure(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// Dispatches tool calls to the Apollo API.
pub struct ToolDispatcher {
    client: Arc<dyn AsyncApolloClient>,
    api_key: Option<String>,
    metrics: Metrics,
}

impl ToolDispatcher {
    /// Create a dispatcher. A `None` or empty key disables all outbound calls.
    pub fn new(client: Arc<dyn AsyncApolloClient>, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector with this dispatcher.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Run a tool and return its text payload.
    pub async fn call_tool(&self, name: &str, arguments: &Map<String, Value>) -> String {
        self.call_tool_detailed(name, arguments).await.text
    }

    /// Run a tool, keeping track of whether the payload is an error text.
    pub async fn call_tool_detailed(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> ToolOutput {
        let output = self.dispatch(name, arguments).await;
        self.metrics.record_tool_call(!output.is_error);
        if output.is_error {
            warn!(tool = %name, "Tool call failed: {}", output.text);
        }
        output
    }

    async fn dispatch(&self, name: &str, arguments: &Map<String, Value>) -> ToolOutput {
        let Some(api_key) = self.api_key.as_deref() else {
            return ToolOutput::failure(MISSING_API_KEY_MESSAGE.to_string());
        };

        let Some(tool) = ToolName::from_name(name) else {
            return ToolOutput::failure(format!("Unknown tool: {}", name));
        };

        info!(tool = %tool, "Calling Apollo tool");

        match self.execute(tool, arguments, api_key).await {
            Ok(output) => output,
            Err(e) => ToolOutput::failure(format!("{}{}", API_FAILURE_PREFIX, e)),
        }
    }

    async fn execute(
        &self,
        tool: ToolName,
        arguments: &Map<String, Value>,
        api_key: &str,
    ) -> ToolResult<ToolOutput> {
        let call = ToolCall::parse(tool, arguments)?;
        let request = call
            .request()?
            .with_header("Content-Type", "application/json")
            .with_header("Cache-Control", "no-cache")
            .with_header("X-Api-Key", api_key);

        debug!(
            tool = %call.tool_name(),
            "Sending {} {}",
            request.method.as_str(),
            request.path
        );

        let response = self.client.execute(request).await?;
        interpret(&call, &response)
    }
}

fn render<T: Serialize>(value: &T) -> ToolResult<ToolOutput> {
    Ok(ToolOutput::success(to_pretty_ascii_string(value)?))
}

fn rejected(prefix: &str, response: &ApiResponse) -> ToolResult<ToolOutput> {
    Ok(ToolOutput::failure(format!(
        "{}{}",
        prefix,
        error_message(&response.body)
    )))
}

/// Map a response onto the tool's reshaped result or failure text.
fn interpret(call: &ToolCall, response: &ApiResponse) -> ToolResult<ToolOutput> {
    let body = &response.body;
    if !body.is_object() {
        return Err(ApolloApiError::Other(format!(
            "unexpected response body (status {}): expected a JSON object",
            response.status
        ))
        .into());
    }

    match call {
        ToolCall::EnrichPerson(_) => match non_empty_object(body, "person") {
            Some(person) if response.is_ok() => render(&PersonEnrichment::from_person(person)),
            _ => rejected("Person not found or error: ", response),
        },
        ToolCall::EnrichOrganization(_) => match non_empty_object(body, "organization") {
            Some(org) if response.is_ok() => {
                render(&OrganizationEnrichment::from_organization(org))
            }
            _ => rejected("Organization not found or error: ", response),
        },
        // Only the status matters here; a 200 without `people` is an empty page.
        ToolCall::SearchPeople(_) if response.is_ok() => {
            render(&PeopleSearchResults::from_body(body))
        }
        ToolCall::SearchPeople(_) => rejected("Search error: ", response),
        ToolCall::GetContactInfo(_) => match non_empty_object(body, "person") {
            Some(person) if response.is_ok() => render(&ContactInfo::from_person(person)),
            _ => rejected("Could not retrieve contact info: ", response),
        },
    }
}
