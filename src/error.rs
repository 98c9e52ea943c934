//! Error types for besober.

use thiserror::Error;

/// Errors that can occur while tracking streaks.
#[derive(Error, Debug)]
pub enum BeSoberError {
    /// Local database failure (open, migrate, query, write).
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration or data directory problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User-supplied input was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization or parsing failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terminal setup or drawing failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for BeSoberError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<rusqlite::Error> for BeSoberError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

impl BeSoberError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 2,
            Self::InvalidInput(_) => 3,
            _ => 1,
        }
    }
}
