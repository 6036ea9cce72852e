//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Check-in errors
    // ---------------------------
    #[error("Check-in code is missing or empty")]
    EmptyToken,

    #[error("Invalid or unregistered code")]
    UnknownToken,

    // ---------------------------
    // Lookup / parsing errors
    // ---------------------------
    #[error("No event with id {0}")]
    UnknownEvent(i64),

    #[error("No participant with id {0}")]
    UnknownParticipant(i64),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid late threshold: {0}")]
    InvalidThreshold(i64),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Stable machine-readable code for the check-in response payload.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyToken => "INVALID_INPUT",
            AppError::UnknownToken => "NOT_FOUND",
            _ => "INTERNAL",
        }
    }

    /// Message safe to show on the scanning device. Internal faults keep
    /// their detail out of the payload; the full error still reaches stderr.
    pub fn public_message(&self) -> String {
        match self {
            AppError::EmptyToken | AppError::UnknownToken => self.to_string(),
            _ => "Internal error, please retry".to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
