//! Reshaping of Apollo responses into the smaller field sets returned to callers.
//!
//! All lookups go through [`field`], which treats a missing key and an explicit
//! `null` the same way. Output structs serialize their fields in declaration order.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use serde_json::Value;
use std::io;

/// Most entries copied from any remote list (people, technologies).
pub const MAX_LIST_ENTRIES: usize = 10;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Look up `key` on a JSON object; missing keys and `null` are both `None`.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// Like [`field`], but yields `null` for absent values.
pub fn field_or_null(value: &Value, key: &str) -> Value {
    field(value, key).cloned().unwrap_or(Value::Null)
}

/// Like [`field`], but yields an empty array for absent values.
pub fn field_or_empty_array(value: &Value, key: &str) -> Value {
    field(value, key)
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()))
}

/// Truthiness of a JSON value: null, false, zero and empty strings,
/// arrays or objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// The remote `message` field, or `"Unknown error"` when absent.
pub fn error_message(body: &Value) -> String {
    match field(body, "message") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => UNKNOWN_ERROR.to_string(),
    }
}

/// The object under `key` when present and non-empty.
pub fn non_empty_object<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    field(body, key).filter(|v| is_truthy(v))
}

/// First entries of the array under `key`; empty when absent or not an array.
fn leading_entries<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    let entries = field(value, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    &entries[..entries.len().min(MAX_LIST_ENTRIES)]
}

/// Pretty formatter (2-space indent) that writes every non-ASCII character
/// as a `\uXXXX` escape, with surrogate pairs outside the BMP.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut ascii_start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[ascii_start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            ascii_start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[ascii_start..])
    }
}

/// Serialize as indented JSON text with non-ASCII characters escaped.
pub fn to_pretty_ascii_string<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let formatter = AsciiPrettyFormatter {
        inner: PrettyFormatter::new(),
    };
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// Company block nested in an enriched person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub name: Value,
    pub domain: Value,
    pub industry: Value,
    pub size: Value,
    pub founded_year: Value,
}

/// Result of `enrich_person`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonEnrichment {
    pub name: Value,
    pub title: Value,
    pub seniority: Value,
    pub departments: Value,
    pub email: Value,
    pub linkedin_url: Value,
    pub company: CompanySummary,
}

impl PersonEnrichment {
    pub fn from_person(person: &Value) -> Self {
        let organization = field(person, "organization").unwrap_or(&Value::Null);

        Self {
            name: field_or_null(person, "name"),
            title: field_or_null(person, "title"),
            seniority: field_or_null(person, "seniority"),
            departments: field_or_empty_array(person, "departments"),
            email: field_or_null(person, "email"),
            linkedin_url: field_or_null(person, "linkedin_url"),
            company: CompanySummary {
                name: field_or_null(organization, "name"),
                domain: field_or_null(organization, "website_url"),
                industry: field_or_null(organization, "industry"),
                size: field_or_null(organization, "estimated_num_employees"),
                founded_year: field_or_null(organization, "founded_year"),
            },
        }
    }
}

/// Result of `enrich_organization`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationEnrichment {
    pub name: Value,
    pub domain: Value,
    pub industry: Value,
    pub size: Value,
    pub founded_year: Value,
    pub city: Value,
    pub country: Value,
    pub linkedin_url: Value,
    pub technologies: Vec<Value>,
    pub description: Value,
}

impl OrganizationEnrichment {
    pub fn from_organization(org: &Value) -> Self {
        Self {
            name: field_or_null(org, "name"),
            domain: field_or_null(org, "website_url"),
            industry: field_or_null(org, "industry"),
            size: field_or_null(org, "estimated_num_employees"),
            founded_year: field_or_null(org, "founded_year"),
            city: field_or_null(org, "city"),
            country: field_or_null(org, "country"),
            linkedin_url: field_or_null(org, "linkedin_url"),
            technologies: leading_entries(org, "current_technologies")
                .iter()
                .map(|tech| field_or_null(tech, "name"))
                .collect(),
            description: field_or_null(org, "short_description"),
        }
    }
}

/// One row of a people search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSummary {
    pub id: Value,
    pub name: Value,
    pub title: Value,
    pub company: Value,
    pub location: Value,
    pub linkedin: Value,
}

impl PersonSummary {
    pub fn from_person(person: &Value) -> Self {
        Self {
            id: field_or_null(person, "id"),
            name: field_or_null(person, "name"),
            title: field_or_null(person, "title"),
            company: field_or_null(person, "organization_name"),
            location: field_or_null(person, "city"),
            linkedin: field_or_null(person, "linkedin_url"),
        }
    }
}

/// Result of `search_people`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeopleSearchResults {
    pub total_results: Value,
    pub page: Value,
    pub people: Vec<PersonSummary>,
}

impl PeopleSearchResults {
    pub fn from_body(body: &Value) -> Self {
        Self {
            total_results: field(body, "total_entries")
                .cloned()
                .unwrap_or_else(|| Value::from(0)),
            page: field(body, "page").cloned().unwrap_or_else(|| Value::from(1)),
            people: leading_entries(body, "people")
                .iter()
                .map(PersonSummary::from_person)
                .collect(),
        }
    }
}

/// Result of `get_contact_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub name: Value,
    pub email: Value,
    pub phone_numbers: Value,
    pub linkedin_url: Value,
    pub title: Value,
    pub company: Value,
}

impl ContactInfo {
    pub fn from_person(person: &Value) -> Self {
        Self {
            name: field_or_null(person, "name"),
            email: field_or_null(person, "email"),
            phone_numbers: field_or_empty_array(person, "phone_numbers"),
            linkedin_url: field_or_null(person, "linkedin_url"),
            title: field_or_null(person, "title"),
            company: field_or_null(person, "organization_name"),
        }
    }
}
