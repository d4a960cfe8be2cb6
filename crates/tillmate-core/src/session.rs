//! # Till Session
//!
//! Everything one till operator's screen depends on, in a single value the
//! host owns: the registry, the rounding mode, and the typed measurements.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup ──► TillSession::from_saved(weights, prefs)                    │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  edits ────► set_gross / set_tare / set_unit_weight / set_rounding_mode │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  evaluate() ──► SheetSummary (rows + grand totals)                      │
//! │                 │                                                       │
//! │  Save ──────► weights_payload() + preferences_payload() → profile store │
//! │  Reset all ─► reset_all_to_defaults() + delete coin_weights             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::engine::{self, evaluate_sheet, SheetSummary};
use crate::error::{CoreError, CoreResult};
use crate::measurement::MeasurementSheet;
use crate::registry::DenominationRegistry;
use crate::types::{Preferences, RoundingMode};

/// Explicit session context for the till.
#[derive(Debug, Clone, PartialEq)]
pub struct TillSession {
    pub registry: DenominationRegistry,
    pub rounding_mode: RoundingMode,
    pub sheet: MeasurementSheet,
}

impl TillSession {
    /// Creates a session with default weights and `round` mode.
    pub fn new() -> Self {
        Self::with_registry(DenominationRegistry::load_defaults(), RoundingMode::default())
    }

    /// Creates a session with blank measurements over `registry`.
    pub fn with_registry(registry: DenominationRegistry, rounding_mode: RoundingMode) -> Self {
        let sheet = MeasurementSheet::for_registry(&registry);
        TillSession {
            registry,
            rounding_mode,
            sheet,
        }
    }

    /// Builds a session from the two stored payloads, ignoring anything
    /// unreadable.
    pub fn from_saved(weights: Option<&str>, preferences: Option<&str>) -> Self {
        Self::try_from_saved(weights, preferences).0
    }

    /// Builds a session from the stored payloads and returns the errors for
    /// any payload that had to be replaced by defaults.
    ///
    /// ## Example
    /// ```rust
    /// use tillmate_core::{RoundingMode, TillSession};
    ///
    /// let (session, errors) = TillSession::try_from_saved(Some("[oops"), Some(r#"{"rounding_mode":"ceil"}"#));
    /// assert_eq!(session.rounding_mode, RoundingMode::Ceil);
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn try_from_saved(weights: Option<&str>, preferences: Option<&str>) -> (Self, Vec<CoreError>) {
        let mut errors = Vec::new();

        let registry = DenominationRegistry::try_load(weights).unwrap_or_else(|e| {
            errors.push(e);
            DenominationRegistry::load_defaults()
        });

        let prefs = Preferences::try_from_saved(preferences).unwrap_or_else(|e| {
            errors.push(e);
            Preferences::default()
        });

        (Self::with_registry(registry, prefs.rounding_mode), errors)
    }

    /// Sets the session-wide rounding mode.
    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.rounding_mode = mode;
    }

    /// Applies a unit weight typed in the weights editor.
    ///
    /// The text is parsed like a scale reading; only positive values apply.
    pub fn set_unit_weight(&mut self, key: &str, text: &str) -> bool {
        self.registry.set_weight(key, engine::parse_grams(text))
    }

    /// Restores default weights and clears every measurement.
    pub fn reset_all_to_defaults(&mut self) {
        self.registry.reset_to_defaults();
        self.sheet.clear_all();
    }

    /// Seeds the sheet with the demo weights.
    pub fn fill_demo(&mut self) {
        self.sheet.fill_demo(&engine::fill_demo_values());
    }

    /// Recomputes every row and the grand totals.
    pub fn evaluate(&self) -> SheetSummary {
        evaluate_sheet(&self.registry, &self.sheet, self.rounding_mode)
    }

    /// Payload for the `coin_weights` key.
    pub fn weights_payload(&self) -> CoreResult<String> {
        self.registry.to_saved_payload()
    }

    /// Payload for the `preferences` key.
    pub fn preferences_payload(&self) -> CoreResult<String> {
        let prefs = Preferences {
            rounding_mode: self.rounding_mode,
        };
        Ok(serde_json::to_string(&prefs)?)
    }
}

impl Default for TillSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
