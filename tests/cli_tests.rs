//! End-to-end tests driving the rollcall binary.

use predicates::str::contains;

mod common;
use common::{open_db, rc, seed_event, seed_participant, seed_registration, setup_test_db};

fn init(db_path: &str) {
    rc().args(["--db", db_path, "--test", "init"]).assert().success();
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init");

    init(&db_path);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
             AND name IN ('events','participants','attendees','attendance_log','log')",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 5);
}

#[test]
fn test_event_and_participant_add_list() {
    let db_path = setup_test_db("event_participant");

    init(&db_path);

    rc().args([
        "--db",
        &db_path,
        "event",
        "add",
        "Rust Meetup",
        "--start",
        "2025-11-23 13:00",
        "--late-threshold",
        "15",
    ])
    .assert()
    .success()
    .stdout(contains("Created event"));

    rc().args([
        "--db",
        &db_path,
        "participant",
        "add",
        "Ada Lovelace",
        "--code",
        "S-001",
    ])
    .assert()
    .success()
    .stdout(contains("Created participant"));

    rc().args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(contains("Rust Meetup"))
        .stdout(contains("2025-11-23 13:00:00"));

    rc().args(["--db", &db_path, "participant", "list"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("S-001"));
}

#[test]
fn test_register_prints_token_and_is_idempotent() {
    let db_path = setup_test_db("register_cli");

    init(&db_path);
    let (event, participant) = {
        let conn = open_db(&db_path);
        (
            seed_event(&conn, "Meetup", "2025-11-23 13:00:00", 15),
            seed_participant(&conn, "Ada", None),
        )
    };

    let first = rc()
        .args([
            "--db",
            &db_path,
            "register",
            "--event",
            &event.to_string(),
            "--participant",
            &participant.to_string(),
        ])
        .output()
        .expect("run register");
    assert!(first.status.success());
    let first_token = last_line(&first.stdout);
    assert_eq!(first_token.len(), 32);

    let second = rc()
        .args([
            "--db",
            &db_path,
            "register",
            "--event",
            &event.to_string(),
            "--participant",
            &participant.to_string(),
        ])
        .output()
        .expect("run register again");
    assert!(second.status.success());
    assert_eq!(last_line(&second.stdout), first_token);
}

#[test]
fn test_checkin_json_flow() {
    let db_path = setup_test_db("checkin_cli");

    init(&db_path);
    let token = {
        let conn = open_db(&db_path);
        let event = seed_event(&conn, "Rust Meetup", "2025-11-23 13:00:00", 15);
        let participant = seed_participant(&conn, "Ada Lovelace", Some("S-001"));
        seed_registration(&conn, event, participant)
    };

    // First scan is on time
    rc().args([
        "--db",
        &db_path,
        "checkin",
        &token,
        "--device",
        "gate-1",
        "--at",
        "2025-11-23 13:10:00",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("\"ok\":true"))
    .stdout(contains("\"status\":\"on_time\""))
    .stdout(contains("\"is_first\":true"))
    .stdout(contains("Ada Lovelace"));

    // Second scan is late and not first
    rc().args([
        "--db",
        &db_path,
        "checkin",
        &token,
        "--at",
        "2025-11-23 13:16:00",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("\"status\":\"late\""))
    .stdout(contains("\"is_first\":false"));

    // Too-early scan on a fresh clock, still logged
    rc().args([
        "--db",
        &db_path,
        "checkin",
        &token,
        "--at",
        "2025-11-23 12:25:00",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("\"status\":\"too_early\""));

    // Listing shows all three scans
    rc().args(["--db", &db_path, "list", "--event", "1"])
        .assert()
        .success()
        .stdout(contains("on_time"))
        .stdout(contains("late"))
        .stdout(contains("too_early"));
}

#[test]
fn test_list_all_events() {
    let db_path = setup_test_db("list_all");

    init(&db_path);
    let (token_a, token_b) = {
        let conn = open_db(&db_path);
        let event_a = seed_event(&conn, "Morning Session", "2025-11-23 09:00:00", 15);
        let event_b = seed_event(&conn, "Evening Session", "2025-11-23 18:00:00", 15);
        let ada = seed_participant(&conn, "Ada", None);
        let kay = seed_participant(&conn, "Kay", None);
        (
            seed_registration(&conn, event_a, ada),
            seed_registration(&conn, event_b, kay),
        )
    };

    rc().args(["--db", &db_path, "checkin", &token_a, "--at", "2025-11-23 09:05:00"])
        .assert()
        .success();
    rc().args(["--db", &db_path, "checkin", &token_b, "--at", "2025-11-23 18:30:00"])
        .assert()
        .success();

    // --all walks every event
    rc().args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Morning Session"))
        .stdout(contains("Evening Session"))
        .stdout(contains("2025-11-23 09:05:00"))
        .stdout(contains("2025-11-23 18:30:00"));

    // One of --event / --all is required
    rc().args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("--event ID or --all"));

    // And they are mutually exclusive
    rc().args(["--db", &db_path, "list", "--event", "1", "--all"])
        .assert()
        .failure();
}

#[test]
fn test_checkin_unknown_token_fails_with_not_found() {
    let db_path = setup_test_db("checkin_unknown");

    init(&db_path);

    rc().args([
        "--db",
        &db_path,
        "checkin",
        "deadbeefdeadbeefdeadbeefdeadbeef",
        "--at",
        "2025-11-23 13:00:00",
        "--json",
    ])
    .assert()
    .failure()
    .stdout(contains("\"code\":\"NOT_FOUND\""))
    .stdout(contains("\"ok\":false"));
}

#[test]
fn test_checkin_whitespace_token_fails_with_invalid_input() {
    let db_path = setup_test_db("checkin_empty");

    init(&db_path);

    rc().args([
        "--db",
        &db_path,
        "checkin",
        "   ",
        "--at",
        "2025-11-23 13:00:00",
        "--json",
    ])
    .assert()
    .failure()
    .stdout(contains("\"code\":\"INVALID_INPUT\""));
}

#[test]
fn test_db_check_and_log_print() {
    let db_path = setup_test_db("db_maint");

    init(&db_path);

    rc().args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));

    let conn = open_db(&db_path);
    let event = seed_event(&conn, "Meetup", "2025-11-23 13:00:00", 15);
    let participant = seed_participant(&conn, "Ada", None);
    seed_registration(&conn, event, participant);
    drop(conn);

    rc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("register"));
}

fn last_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .next_back()
        .unwrap_or_default()
        .trim()
        .to_string()
}
