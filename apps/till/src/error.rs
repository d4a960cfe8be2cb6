//! # API Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TillMate                               │
//! │                                                                         │
//! │  Scale reading "12x" ──► parsed as 0 ──► no error at all               │
//! │  Unknown coin key    ──► ignored     ──► no error at all               │
//! │  Unreadable profile  ──► logged      ──► defaults, no error            │
//! │                                                                         │
//! │  Profile write fails ──► DbError ──► ApiError ──► display shows it     │
//! │  Bad rounding mode   ──► ValidationError ──► ApiError                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The display receives `{ "code": "DATABASE_ERROR", "message": "..." }`.

use serde::Serialize;
use tillmate_core::{CoreError, ValidationError};
use tillmate_db::DbError;

/// API error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Profile store operation failed
    DatabaseError,

    /// Could not locate or create the profile directory
    ProfileUnavailable,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Profile store connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Profile store unavailable")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Profile migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Profile store migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Profile query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Could not save profile")
            }
            DbError::PoolExhausted => ApiError::new(ErrorCode::DatabaseError, "Profile store busy"),
            DbError::Internal(e) => {
                tracing::error!("Internal profile store error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Could not save profile")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::MalformedPayload { .. } | CoreError::Serialization(_) => ApiError::internal(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
