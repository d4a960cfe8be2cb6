//! # Validation Module
//!
//! Rules that decide whether an operator value may be applied.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Weights editor ──► validate_unit_weight ──► registry.set_weight       │
//! │                                                                         │
//! │  Profile load  ──► validate_stored_weight ──► merge over defaults      │
//! │                                                                         │
//! │  Rounding toggle ─► validate_rounding_mode ──► session.rounding_mode   │
//! │                                                                         │
//! │  Scale readings are NOT validated: they degrade to 0 (see engine).     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tillmate_core::validation::{validate_unit_weight, validate_stored_weight};
//!
//! assert!(validate_unit_weight(6.5).is_ok());
//! assert!(validate_unit_weight(0.0).is_err());
//!
//! // Stored weights may be zero ("unknown, don't count")
//! assert!(validate_stored_weight(0.0).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::RoundingMode;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a unit weight entered in the weights editor.
///
/// ## Rules
/// - Must be finite
/// - Must be strictly positive
pub fn validate_unit_weight(weight: f64) -> ValidationResult<f64> {
    if !weight.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "unit_weight".to_string(),
        });
    }

    if weight <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "unit_weight".to_string(),
        });
    }

    Ok(weight)
}

/// Validates a unit weight read back from the profile store.
///
/// ## Rules
/// - Must be finite
/// - Zero is allowed and disables counting for that coin
/// - Negative values are rejected (the default weight is used instead)
pub fn validate_stored_weight(weight: f64) -> ValidationResult<f64> {
    if !weight.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "unit_weight".to_string(),
        });
    }

    if weight < 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "unit_weight".to_string(),
        });
    }

    Ok(weight)
}

/// Validates a rounding mode name ("round", "floor", "ceil").
pub fn validate_rounding_mode(mode: &str) -> ValidationResult<RoundingMode> {
    mode.trim().parse()
}

// =============================================================================
// Unit Tests
// =============================================================================
