//! Registration and token generation tests.

mod common;
use common::{in_memory_db, seed_event, seed_participant};

use rollcall::core::register::RegisterLogic;
use rollcall::core::token;
use rollcall::errors::AppError;
use rollcall::models::attendee_status::AttendeeStatus;

#[test]
fn token_is_32_lowercase_hex_chars() {
    for _ in 0..50 {
        let t = token::generate();
        assert_eq!(t.len(), token::TOKEN_LEN);
        assert!(t.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn generated_tokens_do_not_repeat() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(token::generate()));
    }
}

#[test]
fn registration_creates_one_row_with_token() {
    let conn = in_memory_db();
    let event = seed_event(&conn, "Meetup", "2025-11-23 13:00:00", 15);
    let participant = seed_participant(&conn, "Ada", Some("S-001"));

    let (attendee, created) = RegisterLogic::apply(&conn, event, participant).unwrap();
    assert!(created);
    assert_eq!(attendee.event_id, event);
    assert_eq!(attendee.participant_id, participant);
    assert_eq!(attendee.qr_token.len(), token::TOKEN_LEN);
    assert_eq!(attendee.status, AttendeeStatus::Registered);
    assert!(attendee.first_checked_in_at.is_none());
}

#[test]
fn re_registration_returns_the_existing_row() {
    let conn = in_memory_db();
    let event = seed_event(&conn, "Meetup", "2025-11-23 13:00:00", 15);
    let participant = seed_participant(&conn, "Ada", None);

    let (first, created_first) = RegisterLogic::apply(&conn, event, participant).unwrap();
    let (second, created_second) = RegisterLogic::apply(&conn, event, participant).unwrap();

    assert!(created_first);
    assert!(!created_second);
    assert_eq!(first.id, second.id);
    assert_eq!(first.qr_token, second.qr_token);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM attendees", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn same_participant_two_events_gets_two_tokens() {
    let conn = in_memory_db();
    let event_a = seed_event(&conn, "Day 1", "2025-11-23 09:00:00", 15);
    let event_b = seed_event(&conn, "Day 2", "2025-11-24 09:00:00", 15);
    let participant = seed_participant(&conn, "Ada", None);

    let (a, _) = RegisterLogic::apply(&conn, event_a, participant).unwrap();
    let (b, _) = RegisterLogic::apply(&conn, event_b, participant).unwrap();

    assert_ne!(a.qr_token, b.qr_token);
}

#[test]
fn registration_rejects_unknown_event_and_participant() {
    let conn = in_memory_db();
    let event = seed_event(&conn, "Meetup", "2025-11-23 13:00:00", 15);
    let participant = seed_participant(&conn, "Ada", None);

    let err = RegisterLogic::apply(&conn, 999, participant).unwrap_err();
    assert!(matches!(err, AppError::UnknownEvent(999)));

    let err = RegisterLogic::apply(&conn, event, 999).unwrap_err();
    assert!(matches!(err, AppError::UnknownParticipant(999)));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM attendees", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}
