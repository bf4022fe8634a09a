//! # Tool Registry
//!
//! Descriptors for the three onboarding tools, plus by-name dispatch so an
//! agent runtime can invoke them with JSON arguments.

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::ServiceClient;
use super::directory::{lookup_directory, LookupDirectoryArgs};
use super::meeting::{schedule_meeting, ScheduleMeetingArgs};
use super::profile::{create_profile, CreateProfileArgs};

pub const CREATE_PROFILE: &str = "create_profile";
pub const SCHEDULE_MEETING: &str = "schedule_meeting_tool";
pub const LOOKUP_DIRECTORY: &str = "get_directory_tool";

/// Whether a tool changes state on the backing service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolPermission {
    ReadOnly,
    ReadWrite,
}

/// What an agent runtime needs to advertise a tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub permission: ToolPermission,
    /// JSON Schema of the arguments
    pub parameters: Value,
}

fn definition<T: JsonSchema>(
    name: &'static str,
    description: &'static str,
    permission: ToolPermission,
) -> ToolDefinition {
    ToolDefinition {
        name,
        description,
        permission,
        parameters: serde_json::to_value(schema_for!(T)).unwrap_or_default(),
    }
}

/// All tools, in a stable order
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        definition::<CreateProfileArgs>(
            CREATE_PROFILE,
            "Create a new profile",
            ToolPermission::ReadWrite,
        ),
        definition::<ScheduleMeetingArgs>(
            SCHEDULE_MEETING,
            "Schedule a meeting with specified participants",
            ToolPermission::ReadWrite,
        ),
        definition::<LookupDirectoryArgs>(
            LOOKUP_DIRECTORY,
            "Get directory information for an employee",
            ToolPermission::ReadOnly,
        ),
    ]
}

/// A tool invocation with typed arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tool", content = "arguments")]
pub enum ToolCall {
    #[serde(rename = "create_profile")]
    CreateProfile(CreateProfileArgs),
    #[serde(rename = "schedule_meeting_tool")]
    ScheduleMeeting(ScheduleMeetingArgs),
    #[serde(rename = "get_directory_tool")]
    LookupDirectory(LookupDirectoryArgs),
}

impl ToolCall {
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::CreateProfile(_) => CREATE_PROFILE,
            ToolCall::ScheduleMeeting(_) => SCHEDULE_MEETING,
            ToolCall::LookupDirectory(_) => LOOKUP_DIRECTORY,
        }
    }

    /// Bind JSON arguments to the named tool
    pub fn from_json(name: &str, arguments: Value) -> Result<Self, String> {
        if !definitions().iter().any(|d| d.name == name) {
            return Err(format!("❌ Unknown tool: {}", name));
        }
        serde_json::from_value(serde_json::json!({ "tool": name, "arguments": arguments }))
            .map_err(|e| format!("❌ Invalid arguments for {}: {}", name, e))
    }
}

/// Run one tool call
pub async fn dispatch(client: &ServiceClient, call: ToolCall) -> String {
    tracing::debug!(tool = call.name(), "Dispatching tool call");
    match call {
        ToolCall::CreateProfile(args) => create_profile(client, args).await,
        ToolCall::ScheduleMeeting(args) => schedule_meeting(client, args).await,
        ToolCall::LookupDirectory(args) => lookup_directory(client, args).await,
    }
}

/// Run a tool by name with raw JSON arguments. Never fails; errors are messages.
pub async fn invoke(client: &ServiceClient, name: &str, arguments: Value) -> String {
    match ToolCall::from_json(name, arguments) {
        Ok(call) => dispatch(client, call).await,
        Err(message) => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definitions_names_and_permissions() {
        let defs = definitions();
        let summary: Vec<(&str, ToolPermission)> =
            defs.iter().map(|d| (d.name, d.permission)).collect();

        assert_eq!(
            summary,
            vec![
                (CREATE_PROFILE, ToolPermission::ReadWrite),
                (SCHEDULE_MEETING, ToolPermission::ReadWrite),
                (LOOKUP_DIRECTORY, ToolPermission::ReadOnly),
            ]
        );
    }

    #[test]
    fn test_descriptions() {
        let descriptions: Vec<&str> = definitions().iter().map(|d| d.description).collect();
        assert_eq!(
            descriptions,
            vec![
                "Create a new profile",
                "Schedule a meeting with specified participants",
                "Get directory information for an employee",
            ]
        );
    }

    #[test]
    fn test_parameter_schema_lists_fields() {
        let defs = definitions();
        let schema = defs[1].parameters.to_string();

        for field in ["subject", "participants", "start_time", "duration_minutes"] {
            assert!(schema.contains(field), "schema missing {}", field);
        }
    }

    #[test]
    fn test_permission_serialization() {
        assert_eq!(json!(ToolPermission::ReadOnly), json!("read_only"));
        assert_eq!(json!(ToolPermission::ReadWrite), json!("read_write"));
    }

    #[test]
    fn test_from_json_binds_arguments() {
        let call = ToolCall::from_json(LOOKUP_DIRECTORY, json!({"email": "alice@example.com"}))
            .unwrap();

        match call {
            ToolCall::LookupDirectory(args) => assert_eq!(args.email, "alice@example.com"),
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_unknown_tool() {
        let err = ToolCall::from_json("delete_everything", json!({})).unwrap_err();
        assert_eq!(err, "❌ Unknown tool: delete_everything");
    }

    #[test]
    fn test_from_json_rejects_bad_arguments() {
        let err = ToolCall::from_json(CREATE_PROFILE, json!({"name": "Alice"})).unwrap_err();
        assert!(err.starts_with("❌ Invalid arguments for create_profile"));
    }
}
