//! Time utilities: parsing timestamps, minute differences, formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Canonical storage format for timestamps in the database.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp, accepting second precision or bare minutes.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// Signed difference `end - start` in fractional minutes. Seconds are kept
/// as a fraction rather than rounded, so boundary comparisons stay exact.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}

pub fn parse_required_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}
