//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Validation outcomes of a table batch are data, not errors. `AppError`
/// covers requests the engine cannot even look at.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request payload.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested layout exceeds the configured limits.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::LimitExceeded(_) => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::LimitExceeded(_) => "LIMIT_EXCEEDED",
        }
    }
}
