//! Typed tool invocations.
//!
//! Raw MCP arguments are validated into one parameter struct per tool and
//! wrapped in [`ToolCall`], which also knows how to build the outbound request.

use crate::client::ApolloRequest;
use crate::error::{ToolError, ToolResult};
use crate::tools::catalog::ToolName;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Results per page requested from people search.
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// Parameters for `enrich_person`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrichPersonParams {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    #[serde(default)]
    pub domain: Option<String>,
}

/// Parameters for `enrich_organization`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnrichOrganizationParams {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Parameters for `search_people`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchPeopleParams {
    #[serde(default)]
    pub person_titles: Option<Vec<String>>,
    #[serde(default)]
    pub person_locations: Option<Vec<String>>,
    #[serde(default)]
    pub organization_num_employees_ranges: Option<Vec<String>>,
    #[serde(default)]
    pub q_keywords: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
}

/// Parameters for `get_contact_info`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetContactInfoParams {
    pub person_id: String,
}

/// A validated invocation of one of the catalog tools.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    EnrichPerson(EnrichPersonParams),
    EnrichOrganization(EnrichOrganizationParams),
    SearchPeople(SearchPeopleParams),
    GetContactInfo(GetContactInfoParams),
}

#[derive(Serialize)]
struct PeopleMatchBody<'a> {
    first_name: &'a str,
    last_name: &'a str,
    organization_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<&'a str>,
}

#[derive(Serialize)]
struct OrganizationEnrichBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct PeopleSearchBody<'a> {
    page: i64,
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    person_titles: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    person_locations: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_num_employees_ranges: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    q_keywords: Option<&'a str>,
}

/// A string argument counts as supplied only when non-empty.
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A list argument counts as supplied only when it has entries.
fn supplied_list(value: &Option<Vec<String>>) -> Option<&[String]> {
    value.as_deref().filter(|items| !items.is_empty())
}

fn parse_params<T: DeserializeOwned>(
    tool: ToolName,
    arguments: &Map<String, Value>,
) -> ToolResult<T> {
    serde_json::from_value(Value::Object(arguments.clone())).map_err(|e| {
        ToolError::InvalidArguments {
            tool: tool.to_string(),
            reason: e.to_string(),
        }
    })
}

impl ToolCall {
    /// Validate raw arguments against the tool's input contract.
    pub fn parse(tool: ToolName, arguments: &Map<String, Value>) -> ToolResult<Self> {
        let call = match tool {
            ToolName::EnrichPerson => ToolCall::EnrichPerson(parse_params(tool, arguments)?),
            ToolName::EnrichOrganization => {
                ToolCall::EnrichOrganization(parse_params(tool, arguments)?)
            }
            ToolName::SearchPeople => ToolCall::SearchPeople(parse_params(tool, arguments)?),
            ToolName::GetContactInfo => ToolCall::GetContactInfo(parse_params(tool, arguments)?),
        };
        Ok(call)
    }

    pub fn tool_name(&self) -> ToolName {
        match self {
            ToolCall::EnrichPerson(_) => ToolName::EnrichPerson,
            ToolCall::EnrichOrganization(_) => ToolName::EnrichOrganization,
            ToolCall::SearchPeople(_) => ToolName::SearchPeople,
            ToolCall::GetContactInfo(_) => ToolName::GetContactInfo,
        }
    }

    /// Build the outbound request (without authentication headers).
    pub fn request(&self) -> ToolResult<ApolloRequest> {
        let request = match self {
            ToolCall::EnrichPerson(params) => {
                let body = PeopleMatchBody {
                    first_name: &params.first_name,
                    last_name: &params.last_name,
                    organization_name: &params.company_name,
                    domain: supplied(&params.domain),
                };
                ApolloRequest::post("people/match", serde_json::to_value(body)?)
            }
            ToolCall::EnrichOrganization(params) => {
                // domain wins over company_name; neither means an empty body
                let body = match (supplied(&params.domain), supplied(&params.company_name)) {
                    (Some(domain), _) => OrganizationEnrichBody {
                        domain: Some(domain),
                        name: None,
                    },
                    (None, name) => OrganizationEnrichBody { domain: None, name },
                };
                ApolloRequest::post("organizations/enrich", serde_json::to_value(body)?)
            }
            ToolCall::SearchPeople(params) => {
                let body = PeopleSearchBody {
                    page: params.page.unwrap_or(1),
                    per_page: SEARCH_PAGE_SIZE,
                    person_titles: supplied_list(&params.person_titles),
                    person_locations: supplied_list(&params.person_locations),
                    organization_num_employees_ranges: supplied_list(
                        &params.organization_num_employees_ranges,
                    ),
                    q_keywords: supplied(&params.q_keywords),
                };
                ApolloRequest::post("mixed_people/search", serde_json::to_value(body)?)
            }
            ToolCall::GetContactInfo(params) => {
                ApolloRequest::get(format!("people/{}", params.person_id))
            }
        };
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpMethod;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_enrich_person_body_omits_missing_domain() {
        let call = ToolCall::parse(
            ToolName::EnrichPerson,
            &args(json!({"first_name": "Jane", "last_name": "Doe", "company_name": "Acme"})),
        )
        .unwrap();

        let request = call.request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "people/match");
        assert_eq!(
            request.body,
            Some(json!({"first_name": "Jane", "last_name": "Doe", "organization_name": "Acme"}))
        );
    }

    #[test]
    fn test_enrich_person_body_includes_domain() {
        let call = ToolCall::parse(
            ToolName::EnrichPerson,
            &args(json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "company_name": "Acme",
                "domain": "acme.com"
            })),
        )
        .unwrap();

        let body = call.request().unwrap().body.unwrap();
        assert_eq!(body["domain"], "acme.com");
    }

    #[test]
    fn test_enrich_person_requires_names() {
        let err = ToolCall::parse(
            ToolName::EnrichPerson,
            &args(json!({"first_name": "Jane", "company_name": "Acme"})),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments for enrich_person:"));
        assert!(err.to_string().contains("last_name"));
    }

    #[test]
    fn test_enrich_organization_body_selection() {
        let both = ToolCall::parse(
            ToolName::EnrichOrganization,
            &args(json!({"domain": "acme.com", "company_name": "Acme"})),
        )
        .unwrap();
        assert_eq!(both.request().unwrap().body, Some(json!({"domain": "acme.com"})));

        let name_only = ToolCall::parse(
            ToolName::EnrichOrganization,
            &args(json!({"domain": "", "company_name": "Acme"})),
        )
        .unwrap();
        assert_eq!(name_only.request().unwrap().body, Some(json!({"name": "Acme"})));

        let neither = ToolCall::parse(ToolName::EnrichOrganization, &Map::new()).unwrap();
        assert_eq!(neither.request().unwrap().body, Some(json!({})));
    }

    #[test]
    fn test_search_people_defaults() {
        let call = ToolCall::parse(ToolName::SearchPeople, &Map::new()).unwrap();
        let request = call.request().unwrap();
        assert_eq!(request.path, "mixed_people/search");
        assert_eq!(request.body, Some(json!({"page": 1, "per_page": 10})));
    }

    #[test]
    fn test_search_people_skips_empty_filters() {
        let call = ToolCall::parse(
            ToolName::SearchPeople,
            &args(json!({
                "person_titles": ["VP Sales"],
                "person_locations": [],
                "q_keywords": "",
                "organization_num_employees_ranges": ["11-50"],
                "page": 3
            })),
        )
        .unwrap();

        assert_eq!(
            call.request().unwrap().body,
            Some(json!({
                "page": 3,
                "per_page": 10,
                "person_titles": ["VP Sales"],
                "organization_num_employees_ranges": ["11-50"]
            }))
        );
    }

    #[test]
    fn test_search_people_rejects_wrong_types() {
        let err = ToolCall::parse(
            ToolName::SearchPeople,
            &args(json!({"person_titles": "VP Sales"})),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[test]
    fn test_get_contact_info_interpolates_id() {
        let call = ToolCall::parse(
            ToolName::GetContactInfo,
            &args(json!({"person_id": "5f2a9c"})),
        )
        .unwrap();
        let request = call.request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "people/5f2a9c");
        assert_eq!(request.body, None);
        assert_eq!(call.tool_name(), ToolName::GetContactInfo);
    }

    #[test]
    fn test_get_contact_info_requires_person_id() {
        let err = ToolCall::parse(ToolName::GetContactInfo, &Map::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid arguments for get_contact_info: missing field `person_id`"
        );
    }
}
