//! Error handling module
//!
//! Errors raised by the driver around the session controller.

use crate::session::ParseActionError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid command: {0}")]
    InvalidCommand(#[from] ParseActionError),

    #[error("Invalid JSON action: {0}")]
    Json(#[from] serde_json::Error),

    // Rejected actions
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Whether the driver can keep reading input after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCommand(_) | AppError::Json(_) | AppError::Domain(_)
        )
    }
}
