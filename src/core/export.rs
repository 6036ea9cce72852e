//! Attendance log export (CSV / JSON).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use csv::Writer;
use rusqlite::params;
use serde::Serialize;

use crate::db::pool::DbPool;
use crate::db::queries::map_attendance_log_row;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Flattened export row: one scan joined with its event and participant.
#[derive(Debug, Serialize)]
pub struct AttendanceExport {
    pub event_title: String,
    pub participant_name: String,
    pub participant_code: Option<String>,
    pub checked_at: String,
    pub status: &'static str,
    pub device_label: Option<String>,
    pub handled_by: Option<String>,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Returns whether an output file was actually written; an empty
    /// selection warns and produces nothing.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        event_id: Option<i64>,
        force: bool,
    ) -> AppResult<bool> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let rows = load_rows(pool, event_id)?;

        if rows.is_empty() {
            warning("No attendance entries found for the selected event.");
            return Ok(false);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(true)
    }
}

/// Refuse to clobber an existing file unless `--force` was given.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn load_rows(pool: &mut DbPool, event_id: Option<i64>) -> AppResult<Vec<AttendanceExport>> {
    let base = "SELECT al.*, e.title AS event_title, p.name AS participant_name,
                       p.student_id AS participant_code
                FROM attendance_log al
                JOIN attendees a ON a.id = al.attendee_id
                JOIN events e ON e.id = a.event_id
                JOIN participants p ON p.id = a.participant_id";

    fn collect(row: &rusqlite::Row) -> rusqlite::Result<AttendanceExport> {
        let log = map_attendance_log_row(row)?;
        Ok(AttendanceExport {
            event_title: row.get("event_title")?,
            participant_name: row.get("participant_name")?,
            participant_code: row.get("participant_code")?,
            checked_at: log.checked_at_str(),
            status: log.status.to_db_str(),
            device_label: log.device_label,
            handled_by: log.handled_by,
        })
    }

    let mut out = Vec::new();

    if let Some(id) = event_id {
        let sql = format!("{base} WHERE a.event_id = ?1 ORDER BY al.checked_at ASC, al.id ASC");
        let mut stmt = pool.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![id], collect)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let sql = format!("{base} ORDER BY al.checked_at ASC, al.id ASC");
        let mut stmt = pool.conn.prepare(&sql)?;
        let rows = stmt.query_map([], collect)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}

fn export_csv(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "event",
        "participant",
        "code",
        "checked_at",
        "status",
        "device",
        "operator",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record([
            row.event_title.as_str(),
            row.participant_name.as_str(),
            row.participant_code.as_deref().unwrap_or(""),
            row.checked_at.as_str(),
            row.status,
            row.device_label.as_deref().unwrap_or(""),
            row.handled_by.as_deref().unwrap_or(""),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

fn export_json(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
