//! # Profile Commands
//!
//! Loading the saved profile at startup and the Save button.
//!
//! ## Profile Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  startup ──► load_session ──► read coin_weights ─┐                      │
//! │                               read preferences ──┴─► TillState          │
//! │                                                                         │
//! │  Save ─────► save_profile ──► write coin_weights                        │
//! │                               write preferences                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ProfileState, TillState};
use tillmate_core::{COIN_WEIGHTS_KEY, PREFERENCES_KEY};

/// Reads both stored entries and builds the session.
///
/// Never fails: storage errors and malformed payloads are logged and the
/// defaults are used.
pub async fn load_session(profile: &ProfileState) -> TillState {
    debug!("load_session command");

    let weights = profile.read_or_none(COIN_WEIGHTS_KEY).await;
    let preferences = profile.read_or_none(PREFERENCES_KEY).await;

    TillState::from_saved(weights.as_deref(), preferences.as_deref())
}

/// Writes the current weights and preferences.
///
/// ## Errors
/// Returns the first write failure. Weights are written before preferences.
pub async fn save_profile(till: &TillState, profile: &ProfileState) -> Result<(), ApiError> {
    debug!("save_profile command");

    let session = till.session();
    let weights = session.weights_payload()?;
    let preferences = session.preferences_payload()?;

    profile.put(COIN_WEIGHTS_KEY, &weights).await?;
    profile.put(PREFERENCES_KEY, &preferences).await?;

    info!(rounding_mode = %session.rounding_mode, "Profile saved");
    Ok(())
}
