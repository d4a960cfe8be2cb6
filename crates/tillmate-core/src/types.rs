//! # Domain Types
//!
//! Core domain types used throughout TillMate.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Denomination   │   │  RoundingMode   │   │   RowResult     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  key ("p10")    │   │  Round          │   │  net_weight     │       │
//! │  │  label ("10p")  │   │  Floor          │   │  raw_count      │       │
//! │  │  face_value     │   │  Ceil           │   │  count          │       │
//! │  │  unit_weight    │   └─────────────────┘   │  subtotal       │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StoredWeight   │   │  Preferences    │   │  ProfileEntry   │       │
//! │  │  key            │   │  rounding_mode  │   │  key/value      │       │
//! │  │  unit_weight    │   └─────────────────┘   │  updated_at     │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// A coin the till knows how to count.
///
/// `label` and `face_value` are fixed at construction; only `unit_weight`
/// can change (operator edits in the weights editor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Denomination {
    /// Stable identifier, unique within the registry ("gbp2", "p10", ...).
    pub key: String,

    /// Display name ("£2", "10p"). Never used in computation.
    pub label: String,

    /// Value of one coin.
    pub face_value: Money,

    /// Reference mass of one coin in grams. `<= 0` disables counting.
    pub unit_weight: f64,
}

impl Denomination {
    /// Creates a denomination.
    pub fn new(key: impl Into<String>, label: impl Into<String>, face_value: Money, unit_weight: f64) -> Self {
        Denomination {
            key: key.into(),
            label: label.into(),
            face_value,
            unit_weight,
        }
    }

    /// Whether this coin can be counted by weight.
    #[inline]
    pub fn is_countable(&self) -> bool {
        self.unit_weight > 0.0
    }
}

// =============================================================================
// Rounding Mode
// =============================================================================

/// How a fractional coin count becomes a whole one.
///
/// Session-wide, not per denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Nearest whole coin, halves away from zero.
    #[default]
    Round,
    /// Largest whole count not above the raw count.
    Floor,
    /// Smallest whole count not below the raw count.
    Ceil,
}

impl RoundingMode {
    /// All modes, in the order the toggle shows them.
    pub const ALL: [RoundingMode; 3] = [RoundingMode::Round, RoundingMode::Floor, RoundingMode::Ceil];

    /// Applies the mode to a raw count.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::Round => value.round(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Ceil => value.ceil(),
        }
    }

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMode::Round => "round",
            RoundingMode::Floor => "floor",
            RoundingMode::Ceil => "ceil",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "rounding_mode".to_string(),
                allowed: RoundingMode::ALL.iter().map(|m| m.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Computed Results
// =============================================================================

/// Output of the conversion engine for one denomination.
///
/// Derived on every input change, never stored. All fields are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RowResult {
    pub key: String,
    /// `max(0, gross - tare)` in grams.
    pub net_weight: f64,
    /// `net_weight / unit_weight` before rounding, 0 for uncountable coins.
    pub raw_count: f64,
    /// Rounded, clamped coin count.
    #[ts(type = "number")]
    pub count: u64,
    /// `count × face_value`.
    pub subtotal: Money,
}

/// Sums across every row of the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrandTotals {
    #[ts(type = "number")]
    pub grand_count: u64,
    pub grand_total: Money,
}

// =============================================================================
// Stored Payloads
// =============================================================================

/// One saved weight override, as written under [`crate::COIN_WEIGHTS_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWeight {
    pub key: String,
    pub unit_weight: f64,
}

/// Operator preferences, as written under [`crate::PREFERENCES_KEY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Preferences {
    pub rounding_mode: RoundingMode,
}

impl Preferences {
    /// Reads preferences from a stored payload.
    ///
    /// Nothing stored means the defaults. A payload that does not parse, or
    /// names an unknown rounding mode, is reported as malformed.
    pub fn try_from_saved(payload: Option<&str>) -> CoreResult<Self> {
        match payload {
            None => Ok(Preferences::default()),
            Some(raw) => serde_json::from_str::<Preferences>(raw)
                .map_err(|e| CoreError::malformed(crate::PREFERENCES_KEY, e.to_string())),
        }
    }
}

// =============================================================================
// Profile Entry
// =============================================================================

/// A row of the local profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProfileEntry {
    pub key: String,
    /// JSON payload.
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_mode_default() {
        assert_eq!(RoundingMode::default(), RoundingMode::Round);
    }

    #[test]
    fn test_rounding_mode_apply() {
        assert_eq!(RoundingMode::Round.apply(20.46), 20.0);
        assert_eq!(RoundingMode::Round.apply(20.5), 21.0);
        assert_eq!(RoundingMode::Floor.apply(20.99), 20.0);
        assert_eq!(RoundingMode::Ceil.apply(20.01), 21.0);
        assert_eq!(RoundingMode::Ceil.apply(20.0), 20.0);
    }

    #[test]
    fn test_rounding_mode_parse() {
        assert_eq!("floor".parse::<RoundingMode>().unwrap(), RoundingMode::Floor);
        assert_eq!("ceil".parse::<RoundingMode>().unwrap(), RoundingMode::Ceil);
        assert!("FLOOR".parse::<RoundingMode>().is_err());
        assert!("bankers".parse::<RoundingMode>().is_err());
    }

    #[test]
    fn test_rounding_mode_serializes_lowercase() {
        let json = serde_json::to_string(&Preferences { rounding_mode: RoundingMode::Ceil }).unwrap();
        assert_eq!(json, r#"{"rounding_mode":"ceil"}"#);
    }

    #[test]
    fn test_preferences_try_from_saved() {
        let prefs = Preferences::try_from_saved(Some(r#"{"rounding_mode":"floor"}"#)).unwrap();
        assert_eq!(prefs.rounding_mode, RoundingMode::Floor);
        assert_eq!(Preferences::try_from_saved(None).unwrap(), Preferences::default());

        for raw in ["not json", r#"{"rounding_mode":"sideways"}"#] {
            match Preferences::try_from_saved(Some(raw)) {
                Err(CoreError::MalformedPayload { key, .. }) => assert_eq!(key, "preferences"),
                other => panic!("expected malformed payload for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_denomination_countable() {
        let coin = Denomination::new("p10", "10p", Money::from_pence(10), 6.5);
        assert!(coin.is_countable());

        let unknown = Denomination::new("p10", "10p", Money::from_pence(10), 0.0);
        assert!(!unknown.is_countable());
    }
}
