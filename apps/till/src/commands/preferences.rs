//! # Preferences Commands
//!
//! The rounding-mode toggle. A mode change saves the whole profile right
//! away, so weight edits made since the last Save are stored with it.

use tracing::{debug, info};

use crate::commands::profile::save_profile;
use crate::commands::sheet::{get_sheet, SheetResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, ProfileState, TillState};
use tillmate_core::validation::validate_rounding_mode;
use tillmate_core::RoundingMode;

/// Lists the rounding modes the toggle offers, default first.
pub fn get_rounding_modes() -> Vec<RoundingMode> {
    RoundingMode::ALL.to_vec()
}

/// Switches the rounding mode and saves the profile.
///
/// Writes both `coin_weights` and `preferences`, exactly like Save.
///
/// ## Arguments
/// * `mode` - "round", "floor" or "ceil"
///
/// ## Errors
/// - Unknown mode name: validation error, session unchanged
/// - Store write failure: database error, session already switched
pub async fn set_rounding_mode(
    till: &mut TillState,
    profile: &ProfileState,
    config: &ConfigState,
    mode: &str,
) -> Result<SheetResponse, ApiError> {
    debug!(mode = %mode, "set_rounding_mode command");

    let mode = validate_rounding_mode(mode)?;
    till.session_mut().set_rounding_mode(mode);

    save_profile(till, profile).await?;

    info!(rounding_mode = %mode, "Rounding mode changed");
    Ok(get_sheet(till, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sheet::update_gross;
    use crate::commands::weights::set_unit_weight;
    use crate::error::ErrorCode;
    use tillmate_core::{DenominationRegistry, COIN_WEIGHTS_KEY, PREFERENCES_KEY};
    use tillmate_db::{Database, DbConfig};

    async fn test_profile() -> ProfileState {
        ProfileState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    #[test]
    fn test_get_rounding_modes() {
        assert_eq!(
            get_rounding_modes(),
            vec![RoundingMode::Round, RoundingMode::Floor, RoundingMode::Ceil]
        );
    }

    #[tokio::test]
    async fn test_floor_and_ceil_on_partial_coin() {
        let profile = test_profile().await;
        let config = ConfigState::default();
        let mut till = TillState::new();
        update_gross(&mut till, &config, "p10", "133");

        let sheet = set_rounding_mode(&mut till, &profile, &config, "floor").await.unwrap();
        assert_eq!(sheet.row("p10").unwrap().count, 20);
        assert_eq!(sheet.rounding_mode, RoundingMode::Floor);

        let sheet = set_rounding_mode(&mut till, &profile, &config, "ceil").await.unwrap();
        assert_eq!(sheet.row("p10").unwrap().count, 21);
        assert_eq!(sheet.row("p10").unwrap().subtotal, "£2.10");
    }

    #[tokio::test]
    async fn test_mode_change_saves_pending_weight_edits() {
        let profile = test_profile().await;
        let config = ConfigState::default();
        let mut till = TillState::new();

        set_unit_weight(&mut till, &config, "p10", "6.45");
        set_rounding_mode(&mut till, &profile, &config, "ceil").await.unwrap();

        let repo = profile.inner().profile();
        assert_eq!(
            repo.get(PREFERENCES_KEY).await.unwrap().as_deref(),
            Some(r#"{"rounding_mode":"ceil"}"#)
        );

        let saved = repo.get(COIN_WEIGHTS_KEY).await.unwrap();
        let reloaded = DenominationRegistry::load(saved.as_deref());
        assert_eq!(reloaded.get("p10").unwrap().unit_weight, 6.45);
    }

    #[tokio::test]
    async fn test_rejected_mode_writes_nothing() {
        let profile = test_profile().await;
        let mut till = TillState::new();

        assert!(set_rounding_mode(&mut till, &profile, &ConfigState::default(), "half-up")
            .await
            .is_err());
        assert!(profile.inner().profile().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_mode_is_rejected() {
        let profile = test_profile().await;
        let mut till = TillState::new();

        let err = set_rounding_mode(&mut till, &profile, &ConfigState::default(), "bankers")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(till.session().rounding_mode, RoundingMode::Round);
    }
}
