//! The check-in engine: token validation, timing classification, the
//! append-only scan log and the exactly-once first-check-in transition.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::core::classify::classify;
use crate::db::repository::{AttendeeRepository, NewScanLog};
use crate::errors::{AppError, AppResult};
use crate::models::participant::UNNAMED_PARTICIPANT;
use crate::models::scan_status::ScanStatus;
use crate::utils::time::format_timestamp;

/// Source of "now" for scans. The engine never reads the system clock
/// itself, so classification stays deterministic under test.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time, used by the CLI.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed instant, for scripted scans and tests.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Payload returned to the scanning device after a resolved scan.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInOutcome {
    pub ok: bool,
    pub event_title: String,
    pub participant_name: String,
    pub participant_code: Option<String>,
    pub status: ScanStatus,
    pub checked_at: String,
    pub is_first: bool,
}

/// Failure payload; `code` is one of INVALID_INPUT, NOT_FOUND, INTERNAL.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInFailure {
    pub ok: bool,
    pub code: &'static str,
    pub message: String,
}

impl CheckInFailure {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            ok: false,
            code: err.code(),
            message: err.public_message(),
        }
    }
}

/// Stateless processor over an injected repository. One instance handles
/// any number of scans; all per-scan state lives in the store.
pub struct CheckInProcessor<'a, R: AttendeeRepository> {
    repo: &'a R,
}

impl<'a, R: AttendeeRepository> CheckInProcessor<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Process one scanned token at instant `now`.
    ///
    /// Side effects on success are exactly one scan-log append, plus the
    /// first-check-in transition when this is the attendee's first resolved
    /// scan. Validation failures and unknown tokens touch nothing.
    pub fn process(
        &self,
        token: &str,
        device_label: Option<&str>,
        handled_by: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<CheckInOutcome> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::EmptyToken);
        }

        let ctx = self
            .repo
            .find_by_token(token)?
            .ok_or(AppError::UnknownToken)?;

        let status = classify(now, ctx.event_start_at, ctx.late_threshold_minutes);

        // The log is a full history: every resolved scan appends a row,
        // repeat scans included.
        self.repo.append_scan_log(&NewScanLog {
            attendee_id: ctx.attendee_id,
            checked_at: now,
            status,
            device_label,
            handled_by,
        })?;

        // Conditional transition; the repository's compare-and-set decides
        // who was first, so concurrent duplicates cannot both win.
        let is_first = self.repo.mark_checked_in(ctx.attendee_id, now)?;

        let participant_name = {
            let trimmed = ctx.participant_name.trim();
            if trimmed.is_empty() {
                UNNAMED_PARTICIPANT.to_string()
            } else {
                trimmed.to_string()
            }
        };

        Ok(CheckInOutcome {
            ok: true,
            event_title: ctx.event_title,
            participant_name,
            participant_code: ctx.participant_code,
            status,
            checked_at: format_timestamp(&now),
            is_first,
        })
    }
}
