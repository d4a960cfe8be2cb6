//! # Weights Commands
//!
//! Commands behind the unit-weights editor.
//!
//! Editing a weight only changes the session. Nothing is stored until the
//! operator presses Save (see `profile.rs`); "Reset all" is the exception and
//! deletes the stored weights immediately.

use tracing::{debug, info};

use crate::commands::sheet::{get_sheet, SheetResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, ProfileState, TillState};
use tillmate_core::COIN_WEIGHTS_KEY;

/// Applies a unit weight typed in the editor.
///
/// ## Behavior
/// - The text is read like a scale reading ("6,45" is 6.45g)
/// - Only weights greater than zero apply; anything else is ignored
/// - Unknown keys are ignored
///
/// ## Returns
/// The recomputed sheet
pub fn set_unit_weight(till: &mut TillState, config: &ConfigState, key: &str, text: &str) -> SheetResponse {
    debug!(key = %key, text = %text, "set_unit_weight command");

    if !till.session_mut().set_unit_weight(key, text) {
        debug!(key = %key, "Unit weight not applied");
    }

    get_sheet(till, config)
}

/// Restores every built-in weight and forgets the saved overrides.
///
/// Measurement inputs are cleared too. The rounding mode is kept.
///
/// ## Errors
/// The session is reset even when deleting the stored weights fails; the
/// error tells the display that the overrides will return on next start.
pub async fn reset_all_weights(
    till: &mut TillState,
    profile: &ProfileState,
    config: &ConfigState,
) -> Result<SheetResponse, ApiError> {
    debug!("reset_all_weights command");

    till.session_mut().reset_all_to_defaults();
    let removed = profile.remove(COIN_WEIGHTS_KEY).await?;

    info!(removed, "Coin weights reset to defaults");
    Ok(get_sheet(till, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sheet::update_gross;
    use tillmate_db::{Database, DbConfig};

    async fn test_profile() -> ProfileState {
        ProfileState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    #[test]
    fn test_set_unit_weight_recomputes() {
        let mut till = TillState::new();
        let config = ConfigState::default();
        update_gross(&mut till, &config, "p10", "130");

        let sheet = set_unit_weight(&mut till, &config, "p10", "13");
        let row = sheet.row("p10").unwrap();
        assert_eq!(row.unit_weight, 13.0);
        assert_eq!(row.count, 10);
        assert_eq!(row.subtotal, "£1.00");
    }

    #[test]
    fn test_set_unit_weight_accepts_comma() {
        let mut till = TillState::new();
        let sheet = set_unit_weight(&mut till, &ConfigState::default(), "p10", "6,45");
        assert_eq!(sheet.row("p10").unwrap().unit_weight, 6.45);
    }

    #[test]
    fn test_set_unit_weight_rejects_non_positive() {
        let mut till = TillState::new();
        let config = ConfigState::default();

        for text in ["0", "-2", "", "abc"] {
            let sheet = set_unit_weight(&mut till, &config, "p10", text);
            assert_eq!(sheet.row("p10").unwrap().unit_weight, 6.5, "text {:?}", text);
        }
    }

    #[tokio::test]
    async fn test_reset_all_weights_forgets_saved_overrides() {
        let profile = test_profile().await;
        let config = ConfigState::default();
        let mut till = TillState::new();

        set_unit_weight(&mut till, &config, "p10", "13");
        update_gross(&mut till, &config, "p10", "130");
        profile
            .put(COIN_WEIGHTS_KEY, &till.session().weights_payload().unwrap())
            .await
            .unwrap();

        let sheet = reset_all_weights(&mut till, &profile, &config).await.unwrap();
        let row = sheet.row("p10").unwrap();
        assert_eq!(row.unit_weight, 6.5);
        assert_eq!(row.gross_text, "");
        assert_eq!(profile.inner().profile().get(COIN_WEIGHTS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reset_all_weights_without_saved_overrides() {
        let profile = test_profile().await;
        let mut till = TillState::new();

        let sheet = reset_all_weights(&mut till, &profile, &ConfigState::default())
            .await
            .unwrap();
        assert_eq!(sheet.grand_count, 0);
    }
}
