//! Scan timing classification against an event's time window.

use chrono::NaiveDateTime;

use crate::models::scan_status::ScanStatus;
use crate::utils::time::minutes_between;

/// Minutes before the scheduled start under which a scan counts as too
/// early. A fixed system constant, not configurable per event.
pub const EARLY_CUTOFF_MINUTES: f64 = 30.0;

/// Classify a scan instant against `start_at` and the event's late
/// threshold. First matching band wins:
///
/// - more than 30 minutes before start → too early
/// - strictly past the late threshold  → late
/// - everything else (both boundaries included) → on time
pub fn classify(now: NaiveDateTime, start_at: NaiveDateTime, late_threshold_minutes: i64) -> ScanStatus {
    let diff_minutes = minutes_between(start_at, now);

    if diff_minutes < -EARLY_CUTOFF_MINUTES {
        ScanStatus::TooEarly
    } else if diff_minutes > late_threshold_minutes as f64 {
        ScanStatus::Late
    } else {
        ScanStatus::OnTime
    }
}
