#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

use rollcall::core::register::RegisterLogic;
use rollcall::db::initialize::init_db;
use rollcall::db::queries::{insert_event, insert_participant};
use rollcall::models::event::Event;
use rollcall::models::participant::Participant;

pub fn rc() -> Command {
    cargo_bin_cmd!("rollcall")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    rollcall::utils::time::parse_timestamp(s).expect("valid test timestamp")
}

/// Open (and initialize) a database for direct library-level seeding.
pub fn open_db(path: &str) -> Connection {
    let conn = Connection::open(path).expect("open db");
    init_db(&conn).expect("init db");
    conn
}

pub fn in_memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

pub fn seed_event(conn: &Connection, title: &str, start: &str, late_threshold: i64) -> i64 {
    let ev = Event::new(0, title, ts(start), late_threshold);
    insert_event(conn, &ev).expect("insert event")
}

pub fn seed_participant(conn: &Connection, name: &str, code: Option<&str>) -> i64 {
    let p = Participant::new(0, name, code.map(str::to_string));
    insert_participant(conn, &p).expect("insert participant")
}

/// Register and return the check-in token.
pub fn seed_registration(conn: &Connection, event_id: i64, participant_id: i64) -> String {
    let (attendee, _) =
        RegisterLogic::apply(conn, event_id, participant_id).expect("register attendee");
    attendee.qr_token
}
