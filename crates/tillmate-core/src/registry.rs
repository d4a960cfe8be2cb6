//! # Denomination Registry
//!
//! The fixed, ordered set of UK coins and their (editable) reference weights.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Registry Load (once, at startup)                       │
//! │                                                                         │
//! │  coin_weights payload (may be missing / garbage)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_saved_weights ── error? ──► pure defaults                       │
//! │       │                                                                 │
//! │       ▼  key → weight (last duplicate wins, invalid weights dropped)    │
//! │  for each DEFAULT coin, in default order:                               │
//! │       ├── saved weight for key?  ──► use it                            │
//! │       └── otherwise              ──► default weight                    │
//! │                                                                         │
//! │  Keys in storage but not in defaults never create rows.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Denomination, StoredWeight};
use crate::validation::{validate_stored_weight, validate_unit_weight};
use crate::COIN_WEIGHTS_KEY;

/// Built-in coins: (key, label, face value in pence, reference weight in grams).
const DEFAULT_COINS: [(&str, &str, i64, f64); 8] = [
    ("gbp2", "£2", 200, 12.00),
    ("gbp1", "£1", 100, 8.75),
    ("p50", "50p", 50, 8.00),
    ("p20", "20p", 20, 5.00),
    ("p10", "10p", 10, 6.50),
    ("p5", "5p", 5, 3.25),
    ("p2", "2p", 2, 7.12),
    ("p1", "1p", 1, 3.56),
];

/// Ordered denominations with their current unit weights.
///
/// ## Invariants
/// - Keys and order always match the built-in defaults
/// - Labels and face values never change
#[derive(Debug, Clone, PartialEq)]
pub struct DenominationRegistry {
    denominations: Vec<Denomination>,
}

impl DenominationRegistry {
    /// Returns the registry with built-in weights.
    pub fn load_defaults() -> Self {
        DenominationRegistry {
            denominations: default_denominations(),
        }
    }

    /// Builds the registry from a saved `coin_weights` payload.
    ///
    /// Never fails: anything unreadable resolves to the default weight.
    pub fn load(saved: Option<&str>) -> Self {
        Self::try_load(saved).unwrap_or_else(|_| Self::load_defaults())
    }

    /// Strict variant of [`load`](Self::load) that reports a malformed payload.
    ///
    /// Per-entry problems (unknown key, bad weight) are still skipped; only a
    /// payload that is not a JSON array of objects is an error.
    pub fn try_load(saved: Option<&str>) -> CoreResult<Self> {
        let Some(raw) = saved else {
            return Ok(Self::load_defaults());
        };

        let overrides = parse_saved_weights(raw)?;
        let denominations = default_denominations()
            .into_iter()
            .map(|mut coin| {
                if let Some(weight) = overrides.get(coin.key.as_str()) {
                    coin.unit_weight = *weight;
                }
                coin
            })
            .collect();

        Ok(DenominationRegistry { denominations })
    }

    /// Overwrites one coin's unit weight.
    ///
    /// Unknown keys and weights that are not finite and positive are ignored.
    /// Returns whether the weight was applied.
    pub fn set_weight(&mut self, key: &str, weight: f64) -> bool {
        self.try_set_weight(key, weight).is_ok()
    }

    /// Strict variant of [`set_weight`](Self::set_weight).
    pub fn try_set_weight(&mut self, key: &str, weight: f64) -> CoreResult<()> {
        let weight = validate_unit_weight(weight)?;
        let coin = self
            .denominations
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or_else(|| ValidationError::UnknownDenomination(key.to_string()))?;
        coin.unit_weight = weight;
        Ok(())
    }

    /// Restores every built-in weight. Idempotent.
    ///
    /// The caller is responsible for deleting the stored `coin_weights` entry.
    pub fn reset_to_defaults(&mut self) {
        self.denominations = default_denominations();
    }

    /// Serializes the current weights for the `coin_weights` key.
    ///
    /// Only `{key, unit_weight}` pairs are written, in registry order.
    pub fn to_saved_payload(&self) -> CoreResult<String> {
        let saved: Vec<StoredWeight> = self
            .denominations
            .iter()
            .map(|c| StoredWeight {
                key: c.key.clone(),
                unit_weight: c.unit_weight,
            })
            .collect();
        Ok(serde_json::to_string(&saved)?)
    }

    /// Looks up a denomination by key.
    pub fn get(&self, key: &str) -> Option<&Denomination> {
        self.denominations.iter().find(|c| c.key == key)
    }

    /// Whether the key names a known denomination.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Denomination> {
        self.denominations.iter()
    }

    /// Keys in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.denominations.iter().map(|c| c.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }
}

impl Default for DenominationRegistry {
    fn default() -> Self {
        Self::load_defaults()
    }
}

fn default_denominations() -> Vec<Denomination> {
    DEFAULT_COINS
        .iter()
        .map(|&(key, label, pence, weight)| Denomination::new(key, label, Money::from_pence(pence), weight))
        .collect()
}

/// Extracts `key → weight` overrides from a stored payload.
///
/// The payload must be an array of objects. Within it, entries without a
/// string `key` or without an acceptable numeric weight are skipped, and a
/// later duplicate key replaces an earlier one. `weight_g` is read when
/// `unit_weight` is absent.
fn parse_saved_weights(raw: &str) -> CoreResult<HashMap<String, f64>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| CoreError::malformed(COIN_WEIGHTS_KEY, e.to_string()))?;

    let Value::Array(entries) = value else {
        return Err(CoreError::malformed(COIN_WEIGHTS_KEY, "expected an array"));
    };

    let mut overrides = HashMap::new();
    for entry in entries {
        let Value::Object(fields) = entry else {
            return Err(CoreError::malformed(COIN_WEIGHTS_KEY, "expected an array of objects"));
        };

        let Some(key) = fields.get("key").and_then(Value::as_str) else {
            continue;
        };

        let weight = fields
            .get("unit_weight")
            .or_else(|| fields.get("weight_g"))
            .and_then(Value::as_f64)
            .and_then(|w| validate_stored_weight(w).ok());

        match weight {
            Some(w) => {
                overrides.insert(key.to_string(), w);
            }
            None => {
                overrides.remove(key);
            }
        }
    }

    Ok(overrides)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_of(registry: &DenominationRegistry, key: &str) -> f64 {
        registry.get(key).unwrap().unit_weight
    }

    #[test]
    fn test_defaults_order_and_values() {
        let registry = DenominationRegistry::load_defaults();
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, ["gbp2", "gbp1", "p50", "p20", "p10", "p5", "p2", "p1"]);

        let ten = registry.get("p10").unwrap();
        assert_eq!(ten.label, "10p");
        assert_eq!(ten.face_value.pence(), 10);
        assert_eq!(ten.unit_weight, 6.50);
        assert_eq!(weight_of(&registry, "gbp1"), 8.75);
    }

    #[test]
    fn test_load_missing_payload_is_defaults() {
        assert_eq!(DenominationRegistry::load(None), DenominationRegistry::load_defaults());
    }

    #[test]
    fn test_load_applies_valid_overrides() {
        let payload = r#"[{"key":"p10","unit_weight":6.6},{"key":"gbp2","unit_weight":0}]"#;
        let registry = DenominationRegistry::load(Some(payload));

        assert_eq!(weight_of(&registry, "p10"), 6.6);
        // Zero is accepted on load and disables counting
        assert_eq!(weight_of(&registry, "gbp2"), 0.0);
        assert_eq!(weight_of(&registry, "p1"), 3.56);
    }

    #[test]
    fn test_load_ignores_unknown_keys_and_keeps_default_order() {
        let payload = r#"[
            {"key":"p1","unit_weight":3.6},
            {"key":"p3","unit_weight":4.0},
            {"key":"gbp2","unit_weight":12.1}
        ]"#;
        let registry = DenominationRegistry::load(Some(payload));

        assert_eq!(registry.len(), 8);
        assert!(!registry.contains("p3"));
        assert_eq!(registry.keys().next(), Some("gbp2"));
        assert_eq!(weight_of(&registry, "gbp2"), 12.1);
        assert_eq!(weight_of(&registry, "p1"), 3.6);
    }

    #[test]
    fn test_load_rejects_bad_weights_per_entry() {
        let payload = r#"[
            {"key":"p10","unit_weight":"6.6"},
            {"key":"p20","unit_weight":-5},
            {"key":"p50"},
            {"key":"p5","unit_weight":3.3}
        ]"#;
        let registry = DenominationRegistry::load(Some(payload));

        assert_eq!(weight_of(&registry, "p10"), 6.50);
        assert_eq!(weight_of(&registry, "p20"), 5.00);
        assert_eq!(weight_of(&registry, "p50"), 8.00);
        assert_eq!(weight_of(&registry, "p5"), 3.3);
    }

    #[test]
    fn test_load_last_duplicate_wins() {
        let payload = r#"[{"key":"p2","unit_weight":7.0},{"key":"p2","unit_weight":7.2}]"#;
        let registry = DenominationRegistry::load(Some(payload));
        assert_eq!(weight_of(&registry, "p2"), 7.2);
    }

    #[test]
    fn test_load_accepts_legacy_field_name() {
        let payload = r#"[{"key":"gbp1","weight_g":8.8}]"#;
        let registry = DenominationRegistry::load(Some(payload));
        assert_eq!(weight_of(&registry, "gbp1"), 8.8);
    }

    #[test]
    fn test_load_garbage_is_defaults() {
        let defaults = DenominationRegistry::load_defaults();
        for payload in ["", "{", "null", r#"{"key":"p10"}"#, "[1,2,3]", "[null]"] {
            assert_eq!(DenominationRegistry::load(Some(payload)), defaults, "payload: {payload}");
        }
    }

    #[test]
    fn test_try_load_reports_malformed() {
        let err = DenominationRegistry::try_load(Some("{")).unwrap_err();
        assert!(matches!(err, CoreError::MalformedPayload { .. }));
    }

    #[test]
    fn test_set_weight() {
        let mut registry = DenominationRegistry::load_defaults();

        assert!(registry.set_weight("p10", 6.55));
        assert_eq!(weight_of(&registry, "p10"), 6.55);

        // Silent no-ops
        assert!(!registry.set_weight("p3", 4.0));
        assert!(!registry.set_weight("p10", 0.0));
        assert!(!registry.set_weight("p10", -1.0));
        assert!(!registry.set_weight("p10", f64::NAN));
        assert_eq!(weight_of(&registry, "p10"), 6.55);
    }

    #[test]
    fn test_reset_to_defaults_is_idempotent() {
        let mut registry = DenominationRegistry::load_defaults();
        registry.set_weight("gbp2", 11.9);

        registry.reset_to_defaults();
        assert_eq!(registry, DenominationRegistry::load_defaults());

        registry.reset_to_defaults();
        assert_eq!(registry, DenominationRegistry::load_defaults());
    }

    #[test]
    fn test_saved_payload_round_trip() {
        let mut registry = DenominationRegistry::load_defaults();
        registry.set_weight("p20", 5.1);

        let payload = registry.to_saved_payload().unwrap();
        assert!(payload.starts_with(r#"[{"key":"gbp2","unit_weight":12.0}"#));
        assert!(!payload.contains("label"));

        let reloaded = DenominationRegistry::load(Some(&payload));
        assert_eq!(reloaded, registry);
    }
}
