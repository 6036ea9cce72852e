//! Registration: bind a participant to an event and hand out the token.

use rusqlite::Connection;

use crate::core::token;
use crate::db::log::audit;
use crate::db::queries::{
    insert_attendee, load_attendee_by_pair, load_event, load_participant,
};
use crate::errors::AppResult;
use crate::models::attendee::Attendee;

/// High-level business logic for the `register` command.
pub struct RegisterLogic;

impl RegisterLogic {
    /// Register `participant_id` to `event_id`.
    ///
    /// Idempotent: a participant already registered to the event gets the
    /// existing row back, same token, no duplicate. Returns the attendee
    /// and whether a new row was created.
    pub fn apply(
        conn: &Connection,
        event_id: i64,
        participant_id: i64,
    ) -> AppResult<(Attendee, bool)> {
        // Both sides must exist before a token is minted.
        let event = load_event(conn, event_id)?;
        let participant = load_participant(conn, participant_id)?;

        if let Some(existing) = load_attendee_by_pair(conn, event_id, participant_id)? {
            return Ok((existing, false));
        }

        let mut attendee = Attendee::new(0, event_id, participant_id, token::generate());
        attendee.id = insert_attendee(conn, &attendee)?;

        audit(
            conn,
            "register",
            &attendee.qr_token,
            &format!(
                "Registered participant {} ({}) to event {} ({})",
                participant.id,
                participant.display_name(),
                event.id,
                event.title
            ),
        )?;

        Ok((attendee, true))
    }
}
