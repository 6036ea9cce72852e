use chrono::NaiveDateTime;
use serde::Serialize;

use super::scan_status::ScanStatus;
use crate::utils::time::TIMESTAMP_FMT;

/// One row of the append-only scan history. Created once per resolved scan,
/// never mutated or deleted; repeated scans of the same attendee are valid.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceLog {
    pub id: i64,
    pub attendee_id: i64,
    pub checked_at: NaiveDateTime,       // ⇔ attendance_log.checked_at (TEXT)
    pub status: ScanStatus,              // classification at scan time
    pub device_label: Option<String>,    // free text from the scanning device
    pub handled_by: Option<String>,      // staff operator, unset when unattended
}

impl AttendanceLog {
    pub fn checked_at_str(&self) -> String {
        self.checked_at.format(TIMESTAMP_FMT).to_string()
    }
}
