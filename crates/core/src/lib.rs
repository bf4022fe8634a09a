//! # Onboarding Core
//!
//! Business logic for the onboarding assistant demo: the in-memory HR and
//! directory stores, and the tool adapters that call them over HTTP.
//!
//! ## Architecture
//!
//! - `models` - Employee, meeting, and directory record types
//! - `state` - Process-lifetime stores behind a lock
//! - `config` - Where the adapters find the services
//! - `tools` - The three agent-facing adapters and their descriptors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use onboarding_core::tools::{create_profile, CreateProfileArgs, ServiceClient};
//!
//! let client = ServiceClient::from_env()?;
//! let message = create_profile(&client, CreateProfileArgs {
//!     name: "Alice".into(),
//!     email: "alice@example.com".into(),
//!     title: "Engineer".into(),
//! }).await;
//! ```

pub mod config;
pub mod models;
pub mod state;
pub mod tools;

pub use config::ServiceConfig;
