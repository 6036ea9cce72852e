use rusqlite::Connection;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{list_events, load_attendance_for_event, load_event};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;

/// Print the attendance log of one event, or of every event with `--all`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { event, all } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match (event, all) {
            (Some(id), _) => print_event_attendance(&pool.conn, *id)?,
            (None, true) => {
                for ev in list_events(&pool.conn)? {
                    print_event_attendance(&pool.conn, ev.id)?;
                }
            }
            (None, false) => {
                return Err(AppError::Other(
                    "Specify --event ID or --all".to_string(),
                ));
            }
        }
    }

    Ok(())
}

fn print_event_attendance(conn: &Connection, event_id: i64) -> AppResult<()> {
    let ev = load_event(conn, event_id)?;
    let rows = load_attendance_for_event(conn, event_id)?;

    header(format!("Attendance — {}", ev.title));
    for row in rows {
        println!(
            "{}  attendee {:>4}  {:<9}  device: {}  operator: {}",
            row.checked_at_str(),
            row.attendee_id,
            row.status.to_db_str(),
            row.device_label.as_deref().unwrap_or("-"),
            row.handled_by.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
