//! # Onboarding Models
//!
//! Record types shared by the stores, the HTTP services, and the tool
//! adapters. These are the wire shapes of the HR and directory services.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Meeting length used when a request omits `duration_minutes`
pub const DEFAULT_MEETING_DURATION_MINUTES: u32 = 60;

fn default_duration() -> u32 {
    DEFAULT_MEETING_DURATION_MINUTES
}

/// An employee profile held by the HR service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub email: String,
    pub title: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            title: title.into(),
        }
    }

    /// Merge a partial update. Fields left as `None` keep their value.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
    }
}

/// Partial employee update (PATCH body)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl EmployeeUpdate {
    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.title.is_none()
    }
}

/// A meeting request as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMeeting {
    pub subject: String,
    /// Participant emails, in the order given
    pub participants: Vec<String>,
    /// ISO-8601 wall-clock start, kept verbatim
    pub start_time: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
}

/// A stored meeting, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub meeting_id: String,
    pub subject: String,
    pub participants: Vec<String>,
    pub start_time: String,
    pub duration_minutes: u32,
    /// Server-local creation time
    pub created_at: DateTime<Local>,
}

impl Meeting {
    pub(crate) fn from_request(meeting_id: String, request: NewMeeting) -> Self {
        Self {
            meeting_id,
            subject: request.subject,
            participants: request.participants,
            start_time: request.start_time,
            duration_minutes: request.duration_minutes,
            created_at: Local::now(),
        }
    }
}

/// Status token returned when a meeting is booked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    #[default]
    Scheduled,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "scheduled",
        }
    }
}

/// Result of booking a meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMeeting {
    pub meeting_id: String,
    pub status: MeetingStatus,
}

/// Organizational metadata for one email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub email: String,
    pub department: String,
    /// Email of the manager; not required to have its own entry
    pub manager: String,
}

impl DirectoryEntry {
    pub fn new(
        email: impl Into<String>,
        department: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            department: department.into(),
            manager: manager.into(),
        }
    }
}
