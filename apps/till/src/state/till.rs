//! # Till State
//!
//! Owns the operator's `TillSession`.
//!
//! ## Ownership
//! There is one operator and one screen, so the session is a plain value
//! mutated through `&mut`. Every command that edits it recomputes the sheet
//! before returning.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Till State Operations                                │
//! │                                                                         │
//! │  Display Action           Command                 Session Change        │
//! │  ──────────────           ───────                 ──────────────        │
//! │                                                                         │
//! │  Type gross ─────────────► update_gross() ──────► sheet[key].gross      │
//! │  Type tare ──────────────► update_tare() ───────► sheet[key].tare       │
//! │  Row reset ──────────────► reset_row() ─────────► sheet[key] = blank    │
//! │  Clear ──────────────────► clear_inputs() ──────► sheet = blank         │
//! │  Edit unit weight ───────► set_unit_weight() ───► registry[key].weight  │
//! │  Pick rounding ──────────► set_rounding_mode() ─► rounding_mode         │
//! │  Reset all ──────────────► reset_all_weights() ─► defaults, blank sheet │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use tillmate_core::TillSession;

/// Session holder for the till screen.
#[derive(Debug, Clone, Default)]
pub struct TillState {
    session: TillSession,
}

impl TillState {
    /// Creates a state with default weights and `round` mode.
    pub fn new() -> Self {
        TillState::default()
    }

    /// Wraps an existing session.
    pub fn with_session(session: TillSession) -> Self {
        TillState { session }
    }

    /// Builds the session from stored payloads.
    ///
    /// Unreadable payloads are logged and replaced by defaults; they never
    /// stop the till from starting.
    pub fn from_saved(weights: Option<&str>, preferences: Option<&str>) -> Self {
        let (session, errors) = TillSession::try_from_saved(weights, preferences);

        for e in &errors {
            warn!(error = %e, "Saved profile entry unreadable, using defaults");
        }

        debug!(
            rounding_mode = %session.rounding_mode,
            coins = session.registry.len(),
            "Till session loaded"
        );

        TillState::with_session(session)
    }

    /// Read access to the session.
    pub fn session(&self) -> &TillSession {
        &self.session
    }

    /// Write access to the session.
    pub fn session_mut(&mut self) -> &mut TillSession {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillmate_core::RoundingMode;

    #[test]
    fn test_from_saved_nothing_stored() {
        let till = TillState::from_saved(None, None);
        assert_eq!(till.session(), &TillSession::new());
    }

    #[test]
    fn test_from_saved_applies_overrides() {
        let till = TillState::from_saved(
            Some(r#"[{"key":"p10","unit_weight":6.45}]"#),
            Some(r#"{"rounding_mode":"floor"}"#),
        );

        assert_eq!(till.session().registry.get("p10").unwrap().unit_weight, 6.45);
        assert_eq!(till.session().rounding_mode, RoundingMode::Floor);
    }

    #[test]
    fn test_from_saved_garbage_degrades_to_defaults() {
        let till = TillState::from_saved(Some("not json"), Some("{{{"));
        assert_eq!(till.session(), &TillSession::new());
    }

    #[test]
    fn test_from_saved_unknown_mode_degrades_to_round() {
        let till = TillState::from_saved(None, Some(r#"{"rounding_mode":"bankers"}"#));
        assert_eq!(till.session().rounding_mode, RoundingMode::Round);
    }
}
