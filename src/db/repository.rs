//! Repository seam between the check-in engine and the SQLite store.
//!
//! The engine never touches a connection directly; it works against
//! `AttendeeRepository` so tests can substitute an in-memory fake and so
//! the first-check-in transition stays a single conditional statement.

use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::AppResult;
use crate::models::scan_status::ScanStatus;
use crate::utils::time::{TIMESTAMP_FMT, parse_timestamp};

/// Everything the check-in engine needs to know about a resolved token:
/// the attendee row joined with its event window and participant identity.
#[derive(Debug, Clone)]
pub struct AttendeeContext {
    pub attendee_id: i64,
    pub event_title: String,
    pub event_start_at: NaiveDateTime,
    pub late_threshold_minutes: i64,
    pub participant_name: String,
    pub participant_code: Option<String>,
    pub first_checked_in_at: Option<NaiveDateTime>,
}

/// Scan record to append; the log is a full history, one row per scan.
#[derive(Debug, Clone)]
pub struct NewScanLog<'a> {
    pub attendee_id: i64,
    pub checked_at: NaiveDateTime,
    pub status: ScanStatus,
    pub device_label: Option<&'a str>,
    pub handled_by: Option<&'a str>,
}

pub trait AttendeeRepository {
    /// Resolve a trimmed token to its attendee context. `None` means the
    /// token is unknown; that case is ordinary input, not a fault.
    fn find_by_token(&self, token: &str) -> AppResult<Option<AttendeeContext>>;

    /// Append one row to the scan history. Runs on every resolved scan.
    fn append_scan_log(&self, entry: &NewScanLog) -> AppResult<i64>;

    /// Compare-and-set first check-in: sets `first_checked_in_at` and flips
    /// status to checked_in only when the field is still unset. Returns
    /// whether this call performed the transition. Must be atomic with
    /// respect to concurrent calls for the same attendee.
    fn mark_checked_in(&self, attendee_id: i64, at: NaiveDateTime) -> AppResult<bool>;
}

pub struct SqliteAttendeeRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteAttendeeRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl AttendeeRepository for SqliteAttendeeRepository<'_> {
    fn find_by_token(&self, token: &str) -> AppResult<Option<AttendeeContext>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT a.id, e.title, e.start_at, e.late_threshold_minutes,
                    p.name, p.student_id, a.first_checked_in_at
             FROM attendees a
             JOIN events e ON e.id = a.event_id
             JOIN participants p ON p.id = a.participant_id
             WHERE a.qr_token = ?1",
        )?;

        let row = stmt
            .query_row([token], |row| {
                let start_str: String = row.get(2)?;
                let first_str: Option<String> = row.get(6)?;
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    start_str,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, Option<String>>(5)?,
                    first_str,
                ))
            })
            .optional()?;

        let Some((attendee_id, title, start_str, threshold, name, code, first_str)) = row else {
            return Ok(None);
        };

        let event_start_at = parse_timestamp(&start_str)
            .ok_or_else(|| crate::errors::AppError::InvalidTimestamp(start_str))?;
        let first_checked_in_at = match first_str {
            Some(s) => Some(
                parse_timestamp(&s)
                    .ok_or_else(|| crate::errors::AppError::InvalidTimestamp(s))?,
            ),
            None => None,
        };

        Ok(Some(AttendeeContext {
            attendee_id,
            event_title: title,
            event_start_at,
            late_threshold_minutes: threshold,
            participant_name: name,
            participant_code: code,
            first_checked_in_at,
        }))
    }

    fn append_scan_log(&self, entry: &NewScanLog) -> AppResult<i64> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO attendance_log (attendee_id, checked_at, status, device_label, handled_by)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        stmt.execute(params![
            entry.attendee_id,
            entry.checked_at.format(TIMESTAMP_FMT).to_string(),
            entry.status.to_db_str(),
            entry.device_label,
            entry.handled_by,
        ])?;

        Ok(self.conn.last_insert_rowid())
    }

    fn mark_checked_in(&self, attendee_id: i64, at: NaiveDateTime) -> AppResult<bool> {
        // Single conditional UPDATE: the `IS NULL` guard makes concurrent
        // duplicate scans race on one atomic statement; exactly one wins.
        let mut stmt = self.conn.prepare_cached(
            "UPDATE attendees
             SET first_checked_in_at = ?1, status = 'checked_in'
             WHERE id = ?2 AND first_checked_in_at IS NULL",
        )?;

        let updated = stmt.execute(params![at.format(TIMESTAMP_FMT).to_string(), attendee_id])?;
        Ok(updated > 0)
    }
}
