//! Static catalog of the tools this server exposes.
//!
//! The catalog is pure data: four descriptors in a fixed order, each with the
//! input contract advertised to MCP clients.

use serde_json::{json, Map, Value};

/// Names of the exposed tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    EnrichPerson,
    EnrichOrganization,
    SearchPeople,
    GetContactInfo,
}

impl ToolName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::EnrichPerson => "enrich_person",
            ToolName::EnrichOrganization => "enrich_organization",
            ToolName::SearchPeople => "search_people",
            ToolName::GetContactInfo => "get_contact_info",
        }
    }

    /// Resolve a wire name; `None` for anything not in the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "enrich_person" => Some(ToolName::EnrichPerson),
            "enrich_organization" => Some(ToolName::EnrichOrganization),
            "search_people" => Some(ToolName::SearchPeople),
            "get_contact_info" => Some(ToolName::GetContactInfo),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    /// Array whose items are strings
    StringArray,
}

/// One property of a tool's input schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldType,
    pub description: &'static str,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldType, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: FieldType, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
        }
    }

    fn schema(&self) -> Value {
        match self.kind {
            FieldType::String => json!({
                "type": "string",
                "description": self.description,
            }),
            FieldType::Integer => json!({
                "type": "integer",
                "description": self.description,
            }),
            FieldType::StringArray => json!({
                "type": "array",
                "items": { "type": "string" },
                "description": self.description,
            }),
        }
    }
}

/// Descriptor of a single tool: name, description and input contract.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: ToolName,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ToolDescriptor {
    /// Render the input contract as a JSON-schema object.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|field| (field.name.to_string(), field.schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(self.required_fields()));
        schema
    }

    /// Names of required fields, in declaration order.
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
            .collect()
    }
}

const ENRICH_PERSON_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("first_name", FieldType::String, "Person's first name"),
    FieldSpec::required("last_name", FieldType::String, "Person's last name"),
    FieldSpec::required(
        "company_name",
        FieldType::String,
        "Company name where person works",
    ),
    FieldSpec::optional("domain", FieldType::String, "Company domain (optional)"),
];

const ENRICH_ORGANIZATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(
        "domain",
        FieldType::String,
        "Company domain (e.g., plauti.com)",
    ),
    FieldSpec::optional(
        "company_name",
        FieldType::String,
        "Company name (if domain not available)",
    ),
];

const SEARCH_PEOPLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(
        "person_titles",
        FieldType::StringArray,
        "Job titles to search for (e.g., ['VP Sales', 'Director Marketing'])",
    ),
    FieldSpec::optional(
        "person_locations",
        FieldType::StringArray,
        "Locations (e.g., ['Netherlands', 'Belgium'])",
    ),
    FieldSpec::optional(
        "organization_num_employees_ranges",
        FieldType::StringArray,
        "Company size ranges (e.g., ['11-50', '51-200'])",
    ),
    FieldSpec::optional("q_keywords", FieldType::String, "Keywords to search for"),
    FieldSpec::optional("page", FieldType::Integer, "Page number (default: 1)"),
];

const GET_CONTACT_INFO_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "person_id",
    FieldType::String,
    "Apollo person ID (from search or enrich results)",
)];

static TOOLS: [ToolDescriptor; 4] = [
    ToolDescriptor {
        name: ToolName::EnrichPerson,
        description: "Enrich a person's data using Apollo.io. Finds job title, seniority, company info, and contact details.",
        fields: ENRICH_PERSON_FIELDS,
    },
    ToolDescriptor {
        name: ToolName::EnrichOrganization,
        description: "Enrich an organization's data using Apollo.io. Gets company size, industry, funding, tech stack.",
        fields: ENRICH_ORGANIZATION_FIELDS,
    },
    ToolDescriptor {
        name: ToolName::SearchPeople,
        description: "Search for people/prospects in Apollo's database using filters like job title, location, company size.",
        fields: SEARCH_PEOPLE_FIELDS,
    },
    ToolDescriptor {
        name: ToolName::GetContactInfo,
        description: "Reveal contact information (email/phone) for a person. Uses Apollo credits.",
        fields: GET_CONTACT_INFO_FIELDS,
    },
];

/// All tools, in the order they are advertised.
pub fn list_tools() -> &'static [ToolDescriptor] {
    &TOOLS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: ToolName) -> &'static ToolDescriptor {
        list_tools()
            .iter()
            .find(|tool| tool.name == name)
            .expect("every tool name has a catalog entry")
    }

    #[test]
    fn test_catalog_order_and_names() {
        let names: Vec<&str> = list_tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "enrich_person",
                "enrich_organization",
                "search_people",
                "get_contact_info"
            ]
        );
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<Vec<&str>> = list_tools().iter().map(|t| t.required_fields()).collect();
        assert_eq!(required[0], vec!["first_name", "last_name", "company_name"]);
        assert!(required[1].is_empty());
        assert!(required[2].is_empty());
        assert_eq!(required[3], vec!["person_id"]);
    }

    #[test]
    fn test_name_round_trip() {
        for tool in list_tools() {
            assert_eq!(ToolName::from_name(tool.name.as_str()), Some(tool.name));
            assert_eq!(descriptor(tool.name).name, tool.name);
        }
        assert_eq!(ToolName::from_name("apollo_enrich_person"), None);
    }

    #[test]
    fn test_search_people_schema() {
        let schema = descriptor(ToolName::SearchPeople).input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!([]));

        let properties = schema["properties"].as_object().unwrap();
        let keys: Vec<&String> = properties.keys().collect();
        assert_eq!(
            keys,
            vec![
                "person_titles",
                "person_locations",
                "organization_num_employees_ranges",
                "q_keywords",
                "page"
            ]
        );
        assert_eq!(properties["person_titles"]["type"], "array");
        assert_eq!(properties["person_titles"]["items"]["type"], "string");
        assert_eq!(properties["page"]["type"], "integer");
        assert!(properties["q_keywords"].get("items").is_none());
    }

    #[test]
    fn test_enrich_person_schema_descriptions() {
        let schema = descriptor(ToolName::EnrichPerson).input_schema();
        assert_eq!(
            schema["properties"]["domain"]["description"],
            "Company domain (optional)"
        );
        assert_eq!(
            schema["required"],
            json!(["first_name", "last_name", "company_name"])
        );
    }
}
