//! # Onboarding Tools
//!
//! Adapters an agent runtime calls to act on the HR and directory services.
//! Each adapter validates its arguments, issues exactly one HTTP request, and
//! returns a human-readable string. Nothing is raised to the caller.
//!
//! The `try_*` variants return the structured outcome instead.
//!
//! ## Modules
//!
//! - `client` - Shared HTTP client, bearer token, timeout, error classification
//! - `profile` - `create_profile`
//! - `meeting` - `schedule_meeting_tool`
//! - `directory` - `get_directory_tool`
//! - `registry` - Tool descriptors and by-name dispatch

pub mod client;
pub mod directory;
pub mod error;
pub mod meeting;
pub mod profile;
pub mod registry;

pub use client::{Service, ServiceClient};
pub use directory::{lookup_directory, try_lookup_directory, FoundEntry, LookupDirectoryArgs};
pub use error::ToolError;
pub use meeting::{schedule_meeting, try_schedule_meeting, BookedMeeting, ScheduleMeetingArgs};
pub use profile::{create_profile, try_create_profile, CreateProfileArgs, CreatedProfile};
pub use registry::{definitions, dispatch, invoke, ToolCall, ToolDefinition, ToolPermission};
