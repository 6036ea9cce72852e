use rusqlite::{Connection, OptionalExtension, Result};

use crate::ui::messages::success;

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the attendance schema (idempotent).
fn create_attendance_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            title                   TEXT NOT NULL,
            start_at                TEXT NOT NULL,
            late_threshold_minutes  INTEGER NOT NULL DEFAULT 15
                                    CHECK(late_threshold_minutes >= 0),
            created_at              TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS participants (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            student_id  TEXT UNIQUE,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS attendees (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id             INTEGER NOT NULL REFERENCES events(id),
            participant_id       INTEGER NOT NULL REFERENCES participants(id),
            qr_token             TEXT NOT NULL UNIQUE,
            status               TEXT NOT NULL DEFAULT 'registered'
                                 CHECK(status IN ('registered','checked_in')),
            first_checked_in_at  TEXT,
            created_at           TEXT NOT NULL,
            UNIQUE(event_id, participant_id)
        );

        CREATE TABLE IF NOT EXISTS attendance_log (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            attendee_id   INTEGER NOT NULL REFERENCES attendees(id),
            checked_at    TEXT NOT NULL,
            status        TEXT NOT NULL
                          CHECK(status IN ('too_early','on_time','late')),
            device_label  TEXT,
            handled_by    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_attendees_token ON attendees(qr_token);
        CREATE INDEX IF NOT EXISTS idx_attendance_log_attendee
            ON attendance_log(attendee_id, checked_at);
        "#,
    )?;
    Ok(())
}

/// Check if a table has a given column.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// v0.3 migration: older databases logged scans without the operator column.
fn migrate_add_handled_by_column(conn: &Connection) -> Result<()> {
    let version = "20250812_0003_add_handled_by";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Apply only when the column is really missing (fresh schemas have it)
    if !table_has_column(conn, "attendance_log", "handled_by")? {
        conn.execute(
            "ALTER TABLE attendance_log ADD COLUMN handled_by TEXT;",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'handled_by' to attendance_log",
            version
        ));
    }

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added handled_by to attendance_log')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure attendance tables exist
    create_attendance_tables(conn)?;

    // 3) Column-level upgrades for pre-0.3 databases
    migrate_add_handled_by_column(conn)?;

    Ok(())
}
