//! Error types for the scheduler library.

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

/// Comprehensive error type for all scheduler operations.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No plan has been generated for the given date
    #[error("No plan exists for {date}")]
    PlanNotFound { date: Date },
    /// Plan generation attempted while the date's plan is locked
    #[error("Plan for {date} is locked; unlock is not supported")]
    PlanLocked { date: Date },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Malformed wall-clock time input
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SchedulerError {
    /// Creates a database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for mapping database Results with a message.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SchedulerError::database_error(message, e))
    }
}

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
