//! # Create Profile Tool
//!
//! Registers a new employee with the HR service.

use std::fmt;

use reqwest::{Method, StatusCode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::client::{remote_failure, Service, ServiceClient};
use super::error::ToolError;
use crate::models::Employee;

const ACTION: &str = "creating profile";

/// Arguments for creating an employee profile
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateProfileArgs {
    /// Full name of the new employee
    pub name: String,
    /// Work email address
    pub email: String,
    /// Job title
    pub title: String,
}

/// A profile the HR service accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProfile {
    pub employee_id: String,
    pub employee: Employee,
}

impl fmt::Display for CreatedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ Created new employee profile with email {} (employee ID: {}, name: {}, title: {})",
            self.employee.email, self.employee_id, self.employee.name, self.employee.title
        )
    }
}

#[derive(Deserialize)]
struct CreateEmployeeResponse {
    employee_id: String,
}

/// Create a profile, keeping the structured outcome
pub async fn try_create_profile(
    client: &ServiceClient,
    args: CreateProfileArgs,
) -> Result<CreatedProfile, ToolError> {
    ToolError::require(&[
        ("name", args.name.as_str()),
        ("email", args.email.as_str()),
        ("title", args.title.as_str()),
    ])?;

    let employee = Employee::new(args.name, args.email, args.title);
    let request = client
        .request(Service::Hr, Method::POST, "/employees")
        .json(&employee);
    let response = client.send(Service::Hr, ACTION, request).await?;

    if response.status() != StatusCode::OK {
        return Err(remote_failure("Failed to create profile", response).await);
    }

    let created: CreateEmployeeResponse = client.decode(Service::Hr, ACTION, response).await?;
    Ok(CreatedProfile {
        employee_id: created.employee_id,
        employee,
    })
}

/// Create a profile and describe the outcome for the agent
pub async fn create_profile(client: &ServiceClient, args: CreateProfileArgs) -> String {
    match try_create_profile(client, args).await {
        Ok(created) => {
            tracing::info!(employee_id = %created.employee_id, "create_profile succeeded");
            created.to_string()
        }
        Err(e) => {
            tracing::warn!("create_profile failed: {}", e);
            e.to_string()
        }
    }
}
