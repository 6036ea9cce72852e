use crate::errors::{AppError, AppResult};
use crate::models::attendance_log::AttendanceLog;
use crate::models::attendee::Attendee;
use crate::models::attendee_status::AttendeeStatus;
use crate::models::event::Event;
use crate::models::participant::Participant;
use crate::models::scan_status::ScanStatus;
use crate::utils::time::{TIMESTAMP_FMT, parse_timestamp};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn bad_text(value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(AppError::InvalidTimestamp(value.to_string())),
    )
}

pub fn map_event_row(row: &Row) -> Result<Event> {
    let start_str: String = row.get("start_at")?;
    let start_at = parse_timestamp(&start_str).ok_or_else(|| bad_text(&start_str))?;

    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        start_at,
        late_threshold_minutes: row.get("late_threshold_minutes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_participant_row(row: &Row) -> Result<Participant> {
    Ok(Participant {
        id: row.get("id")?,
        name: row.get("name")?,
        student_id: row.get("student_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_attendee_row(row: &Row) -> Result<Attendee> {
    let status_str: String = row.get("status")?;
    let status = AttendeeStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    let first_str: Option<String> = row.get("first_checked_in_at")?;
    let first_checked_in_at = match first_str {
        Some(s) => Some(parse_timestamp(&s).ok_or_else(|| bad_text(&s))?),
        None => None,
    };

    Ok(Attendee {
        id: row.get("id")?,
        event_id: row.get("event_id")?,
        participant_id: row.get("participant_id")?,
        qr_token: row.get("qr_token")?,
        status,
        first_checked_in_at,
        created_at: row.get("created_at")?,
    })
}

pub fn map_attendance_log_row(row: &Row) -> Result<AttendanceLog> {
    let checked_str: String = row.get("checked_at")?;
    let checked_at = parse_timestamp(&checked_str).ok_or_else(|| bad_text(&checked_str))?;

    let status_str: String = row.get("status")?;
    let status = ScanStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(AttendanceLog {
        id: row.get("id")?,
        attendee_id: row.get("attendee_id")?,
        checked_at,
        status,
        device_label: row.get("device_label")?,
        handled_by: row.get("handled_by")?,
    })
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    if ev.late_threshold_minutes < 0 {
        return Err(AppError::InvalidThreshold(ev.late_threshold_minutes));
    }

    conn.execute(
        "INSERT INTO events (title, start_at, late_threshold_minutes, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            ev.title,
            ev.start_at.format(TIMESTAMP_FMT).to_string(),
            ev.late_threshold_minutes,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Event> {
    let mut stmt = conn.prepare("SELECT * FROM events WHERE id = ?1")?;
    stmt.query_row([id], map_event_row)
        .optional()?
        .ok_or(AppError::UnknownEvent(id))
}

pub fn list_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare("SELECT * FROM events ORDER BY start_at ASC")?;
    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Participants
// ---------------------------------------------------------------------------

pub fn insert_participant(conn: &Connection, p: &Participant) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO participants (name, student_id, created_at)
         VALUES (?1, ?2, ?3)",
        params![p.name, p.student_id, p.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_participant(conn: &Connection, id: i64) -> AppResult<Participant> {
    let mut stmt = conn.prepare("SELECT * FROM participants WHERE id = ?1")?;
    stmt.query_row([id], map_participant_row)
        .optional()?
        .ok_or(AppError::UnknownParticipant(id))
}

pub fn list_participants(conn: &Connection) -> AppResult<Vec<Participant>> {
    let mut stmt = conn.prepare("SELECT * FROM participants ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_participant_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Attendees
// ---------------------------------------------------------------------------

pub fn insert_attendee(conn: &Connection, a: &Attendee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendees (event_id, participant_id, qr_token, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            a.event_id,
            a.participant_id,
            a.qr_token,
            a.status.to_db_str(),
            a.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_attendee_by_pair(
    conn: &Connection,
    event_id: i64,
    participant_id: i64,
) -> AppResult<Option<Attendee>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM attendees WHERE event_id = ?1 AND participant_id = ?2",
    )?;
    Ok(stmt
        .query_row(params![event_id, participant_id], map_attendee_row)
        .optional()?)
}

// ---------------------------------------------------------------------------
// Attendance log
// ---------------------------------------------------------------------------

pub fn load_attendance_for_event(
    conn: &Connection,
    event_id: i64,
) -> AppResult<Vec<AttendanceLog>> {
    let mut stmt = conn.prepare(
        "SELECT al.* FROM attendance_log al
         JOIN attendees a ON a.id = al.attendee_id
         WHERE a.event_id = ?1
         ORDER BY al.checked_at ASC, al.id ASC",
    )?;
    let rows = stmt.query_map([event_id], map_attendance_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_logs_for_attendee(conn: &Connection, attendee_id: i64) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM attendance_log WHERE attendee_id = ?1",
        [attendee_id],
        |row| row.get(0),
    )?;
    Ok(n)
}
