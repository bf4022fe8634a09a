//! # Schedule Meeting Tool
//!
//! Books a meeting on the HR service.

use std::fmt;

use reqwest::{Method, StatusCode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::client::{remote_failure, Service, ServiceClient};
use super::error::ToolError;
use crate::models::{NewMeeting, ScheduledMeeting, DEFAULT_MEETING_DURATION_MINUTES};

const ACTION: &str = "scheduling meeting";

/// Arguments for scheduling a meeting
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleMeetingArgs {
    /// Meeting subject/title
    pub subject: String,
    /// Participant email addresses
    pub participants: Vec<String>,
    /// Start time in ISO format (YYYY-MM-DDTHH:MM:SS)
    pub start_time: String,
    /// Duration in minutes (default: 60)
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// A meeting the HR service booked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedMeeting {
    pub meeting_id: String,
    pub meeting: NewMeeting,
}

impl fmt::Display for BookedMeeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ Successfully scheduled meeting '{}' with ID {} for {} ({} minutes, participants: {})",
            self.meeting.subject,
            self.meeting_id,
            self.meeting.start_time,
            self.meeting.duration_minutes,
            self.meeting.participants.join(", ")
        )
    }
}

fn validate(args: &ScheduleMeetingArgs) -> Result<(), ToolError> {
    ToolError::require(&[
        ("subject", args.subject.as_str()),
        ("start_time", args.start_time.as_str()),
    ])?;

    if args.participants.is_empty() {
        return Err(ToolError::Validation(
            "Missing required parameter: participants (at least one email is required)"
                .to_string(),
        ));
    }
    if args.participants.iter().any(|p| p.trim().is_empty()) {
        return Err(ToolError::Validation(
            "Participant emails must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Schedule a meeting, keeping the structured outcome
pub async fn try_schedule_meeting(
    client: &ServiceClient,
    args: ScheduleMeetingArgs,
) -> Result<BookedMeeting, ToolError> {
    validate(&args)?;

    let meeting = NewMeeting {
        subject: args.subject,
        participants: args.participants,
        start_time: args.start_time,
        duration_minutes: args
            .duration_minutes
            .unwrap_or(DEFAULT_MEETING_DURATION_MINUTES),
    };
    let request = client
        .request(Service::Hr, Method::POST, "/meetings")
        .json(&meeting);
    let response = client.send(Service::Hr, ACTION, request).await?;

    if response.status() != StatusCode::CREATED {
        return Err(remote_failure("Failed to schedule meeting", response).await);
    }

    let scheduled: ScheduledMeeting = client.decode(Service::Hr, ACTION, response).await?;
    Ok(BookedMeeting {
        meeting_id: scheduled.meeting_id,
        meeting,
    })
}

/// Schedule a meeting and describe the outcome for the agent
pub async fn schedule_meeting(client: &ServiceClient, args: ScheduleMeetingArgs) -> String {
    match try_schedule_meeting(client, args).await {
        Ok(booked) => {
            tracing::info!(meeting_id = %booked.meeting_id, "schedule_meeting succeeded");
            booked.to_string()
        }
        Err(e) => {
            tracing::warn!("schedule_meeting failed: {}", e);
            e.to_string()
        }
    }
}
