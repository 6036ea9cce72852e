use serde::Serialize;

/// Persistent attendance state of an attendee row.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeStatus {
    Registered,
    CheckedIn,
}

impl AttendeeStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendeeStatus::Registered => "registered",
            AttendeeStatus::CheckedIn => "checked_in",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "registered" => Some(AttendeeStatus::Registered),
            "checked_in" => Some(AttendeeStatus::CheckedIn),
            _ => None,
        }
    }

    pub fn is_checked_in(&self) -> bool {
        matches!(self, AttendeeStatus::CheckedIn)
    }
}
