use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::utils::time::TIMESTAMP_FMT;

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,                // ⇔ events.title (TEXT)
    pub start_at: NaiveDateTime,      // ⇔ events.start_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub late_threshold_minutes: i64,  // ⇔ events.late_threshold_minutes (INT ≥ 0)
    pub created_at: String,           // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    /// High-level constructor for events created from the CLI.
    pub fn new(id: i64, title: &str, start_at: NaiveDateTime, late_threshold_minutes: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            start_at,
            late_threshold_minutes,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn start_at_str(&self) -> String {
        self.start_at.format(TIMESTAMP_FMT).to_string()
    }
}
