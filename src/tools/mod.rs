//! MCP tools backed by the Apollo.io API.
//!
//! - **catalog**: static descriptors of the four tools
//! - **call**: typed, validated invocations and outbound request building
//! - **reshape**: mapping of Apollo responses to compact result shapes
//! - **dispatcher**: one call per invocation, everything reported as text

pub mod call;
pub mod catalog;
pub mod dispatcher;
pub mod reshape;

pub use call::{
    EnrichOrganizationParams, EnrichPersonParams, GetContactInfoParams, SearchPeopleParams,
    ToolCall,
};
pub use catalog::{list_tools, FieldSpec, FieldType, ToolDescriptor, ToolName};
pub use dispatcher::{ToolDispatcher, ToolOutput, MISSING_API_KEY_MESSAGE};
