use serde::Serialize;

/// Classification of a single scan against the event time window.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    TooEarly,
    OnTime,
    Late,
}

impl ScanStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ScanStatus::TooEarly => "too_early",
            ScanStatus::OnTime => "on_time",
            ScanStatus::Late => "late",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "too_early" => Some(ScanStatus::TooEarly),
            "on_time" => Some(ScanStatus::OnTime),
            "late" => Some(ScanStatus::Late),
            _ => None,
        }
    }

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            ScanStatus::TooEarly => "too early",
            ScanStatus::OnTime => "on time",
            ScanStatus::Late => "late",
        }
    }
}
