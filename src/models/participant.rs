use chrono::Local;
use serde::Serialize;

/// Fallback shown when a participant was registered without a usable name.
pub const UNNAMED_PARTICIPANT: &str = "(unnamed)";

#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,               // ⇔ participants.name (TEXT)
    pub student_id: Option<String>, // ⇔ participants.student_id (TEXT UNIQUE, nullable)
    pub created_at: String,         // ⇔ participants.created_at (TEXT, ISO8601)
}

impl Participant {
    pub fn new(id: i64, name: &str, student_id: Option<String>) -> Self {
        Self {
            id,
            name: name.to_string(),
            student_id,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Name as shown on scan results; never empty.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            UNNAMED_PARTICIPANT
        } else {
            trimmed
        }
    }
}
