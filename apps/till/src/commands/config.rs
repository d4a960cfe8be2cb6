//! # Config Commands
//!
//! Read-only access to the application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - Display startup (currency symbol for labels)
/// - Diagnostics (which profile file is in use)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
