//! Unified error handling.
//!
//! Provides a single error type for repository callers. Storage driver
//! failures are wrapped as-is; the email uniqueness violation gets its own
//! variant so callers can tell it apart from a broken connection.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Email {0} is already in use")]
    DuplicateEmail(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is the email uniqueness violation
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, AppError::DuplicateEmail(_))
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::DuplicateEmail(email) => AppError::DuplicateEmail(email),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
