//! # Meeting Store
//!
//! In-memory meeting records. Meetings are created once and never
//! modified; listing returns them in the order they were booked.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::error::{StoreError, StoreResult};
use crate::models::{Meeting, MeetingStatus, NewMeeting, ScheduledMeeting};

const KIND: &str = "Meeting";

#[derive(Debug, Default)]
struct Meetings {
    by_id: HashMap<String, Meeting>,
    order: Vec<String>,
}

/// Shared handle to the meeting records
#[derive(Debug, Clone, Default)]
pub struct MeetingStore {
    inner: Arc<Mutex<Meetings>>,
}

impl MeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Meetings>> {
        self.inner.lock().map_err(|_| StoreError::Poisoned(KIND))
    }

    /// Book a meeting, stamping its id and creation time
    pub fn create(&self, request: NewMeeting) -> StoreResult<ScheduledMeeting> {
        let meeting_id = Uuid::new_v4().to_string();
        let meeting = Meeting::from_request(meeting_id.clone(), request);

        let mut meetings = self.lock()?;
        meetings.order.push(meeting_id.clone());
        meetings.by_id.insert(meeting_id.clone(), meeting);
        tracing::debug!(meeting_id = %meeting_id, "Meeting scheduled");

        Ok(ScheduledMeeting {
            meeting_id,
            status: MeetingStatus::Scheduled,
        })
    }

    pub fn get(&self, id: &str) -> StoreResult<Meeting> {
        self.lock()?
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(KIND, id))
    }

    /// All meetings in booking order
    pub fn list(&self) -> StoreResult<Vec<Meeting>> {
        let meetings = self.lock()?;
        Ok(meetings
            .order
            .iter()
            .filter_map(|id| meetings.by_id.get(id).cloned())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|m| m.by_id.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_MEETING_DURATION_MINUTES;

    fn kickoff(subject: &str) -> NewMeeting {
        NewMeeting {
            subject: subject.to_string(),
            participants: vec![
                "alice@example.com".to_string(),
                "bob@example.com".to_string(),
            ],
            start_time: "2025-01-06T09:00:00".to_string(),
            duration_minutes: DEFAULT_MEETING_DURATION_MINUTES,
        }
    }

    #[test]
    fn test_create_returns_scheduled_status() {
        let store = MeetingStore::new();
        let scheduled = store.create(kickoff("Kickoff")).unwrap();

        assert_eq!(scheduled.status, MeetingStatus::Scheduled);
        assert!(!scheduled.meeting_id.is_empty());
    }

    #[test]
    fn test_get_returns_full_record() {
        let store = MeetingStore::new();
        let scheduled = store.create(kickoff("Kickoff")).unwrap();

        let meeting = store.get(&scheduled.meeting_id).unwrap();
        assert_eq!(meeting.meeting_id, scheduled.meeting_id);
        assert_eq!(meeting.subject, "Kickoff");
        assert_eq!(meeting.participants.len(), 2);
        assert_eq!(meeting.start_time, "2025-01-06T09:00:00");
        assert_eq!(meeting.duration_minutes, 60);
    }

    #[test]
    fn test_unknown_meeting_is_not_found() {
        let store = MeetingStore::new();
        assert!(store.get("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_returns_meetings_in_booking_order() {
        let store = MeetingStore::new();
        for subject in ["First", "Second", "Third"] {
            store.create(kickoff(subject)).unwrap();
        }

        let subjects: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|m| m.subject)
            .collect();
        assert_eq!(subjects, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_list_empty_store() {
        let store = MeetingStore::new();
        assert!(store.list().unwrap().is_empty());
        assert!(store.is_empty());
    }
}
