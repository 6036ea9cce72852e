use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::attendee_status::AttendeeStatus;

/// Join row of one participant registered to one event. Carries the unique
/// check-in token and the one-shot first-check-in state.
#[derive(Debug, Clone, Serialize)]
pub struct Attendee {
    pub id: i64,
    pub event_id: i64,
    pub participant_id: i64,
    pub qr_token: String,                          // ⇔ attendees.qr_token (TEXT UNIQUE)
    pub status: AttendeeStatus,                    // ⇔ attendees.status ('registered'|'checked_in')
    pub first_checked_in_at: Option<NaiveDateTime>, // set exactly once, never cleared
    pub created_at: String,                        // ⇔ attendees.created_at (TEXT, ISO8601)
}

impl Attendee {
    /// Fresh registration row, not yet checked in.
    pub fn new(id: i64, event_id: i64, participant_id: i64, qr_token: String) -> Self {
        Self {
            id,
            event_id,
            participant_id,
            qr_token,
            status: AttendeeStatus::Registered,
            first_checked_in_at: None,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
