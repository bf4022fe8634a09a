//! # Directory Lookup Tool
//!
//! Reads department and manager for an email from the directory service.

use std::fmt;

use reqwest::{Method, StatusCode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::client::{remote_failure, Service, ServiceClient};
use super::error::ToolError;
use crate::models::DirectoryEntry;

const ACTION: &str = "looking up directory info";

/// Arguments for a directory lookup
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LookupDirectoryArgs {
    /// Email address of the employee to look up
    pub email: String,
}

/// Directory entry returned by a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundEntry(pub DirectoryEntry);

impl fmt::Display for FoundEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ Found directory entry for {}: Department: {}, Manager: {}",
            self.0.email, self.0.department, self.0.manager
        )
    }
}

/// Look up an email, keeping the structured outcome
pub async fn try_lookup_directory(
    client: &ServiceClient,
    args: LookupDirectoryArgs,
) -> Result<FoundEntry, ToolError> {
    ToolError::require(&[("email", args.email.as_str())])?;

    let path = format!("/directory/{}", urlencoding::encode(&args.email));
    let request = client.request(Service::Directory, Method::GET, &path);
    let response = client.send(Service::Directory, ACTION, request).await?;

    match response.status() {
        StatusCode::OK => {
            let entry: DirectoryEntry = client.decode(Service::Directory, ACTION, response).await?;
            Ok(FoundEntry(entry))
        }
        StatusCode::NOT_FOUND => Err(ToolError::NotFound(format!(
            "No directory entry found for email: {}",
            args.email
        ))),
        _ => Err(remote_failure("Directory lookup failed", response).await),
    }
}

/// Look up an email and describe the outcome for the agent
pub async fn lookup_directory(client: &ServiceClient, args: LookupDirectoryArgs) -> String {
    match try_lookup_directory(client, args).await {
        Ok(found) => {
            tracing::info!(email = %found.0.email, "lookup_directory succeeded");
            found.to_string()
        }
        Err(e) => {
            tracing::warn!("lookup_directory failed: {}", e);
            e.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[tokio::test]
    async fn test_blank_email_fails_before_request() {
        let client = ServiceClient::new(
            ServiceConfig::default().with_directory_base_url("http://127.0.0.1:9"),
        )
        .unwrap();

        let message = lookup_directory(
            &client,
            LookupDirectoryArgs {
                email: "  ".to_string(),
            },
        )
        .await;

        assert_eq!(message, "❌ Missing required parameter: email");
    }

    #[test]
    fn test_found_entry_message() {
        let found = FoundEntry(DirectoryEntry::new(
            "alice@example.com",
            "HR",
            "bob@example.com",
        ));

        assert_eq!(
            found.to_string(),
            "✅ Found directory entry for alice@example.com: Department: HR, Manager: bob@example.com"
        );
    }
}
