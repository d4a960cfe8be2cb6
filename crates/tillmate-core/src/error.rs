//! # Error Types
//!
//! Domain-specific error types for tillmate-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tillmate-core errors (this file)                                      │
//! │  ├── CoreError        - Stored payload problems                        │
//! │  └── ValidationError  - Operator input that cannot be applied          │
//! │                                                                         │
//! │  tillmate-db errors (separate crate)                                   │
//! │  └── DbError          - Profile store failures                         │
//! │                                                                         │
//! │  tillmate-app errors                                                   │
//! │  └── ApiError         - What the display layer sees (serialized)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The counting path itself never returns these: bad readings become zero
//! and unknown keys are ignored. They exist so the strict variants
//! (`try_*`) can say *why* a payload or edit was discarded, which the host
//! logs before falling back.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors from stored payloads.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored payload is not valid JSON, or has the wrong shape.
    ///
    /// ## When This Occurs
    /// - Profile file edited by hand
    /// - Payload written by an incompatible version
    #[error("Malformed {key} payload: {reason}")]
    MalformedPayload { key: String, reason: String },

    /// Serializing a payload for storage failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a MalformedPayload error.
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::MalformedPayload {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Key does not name a known denomination.
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
