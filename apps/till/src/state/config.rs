//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILLMATE_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no lock.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tillmate_core::{Money, DEFAULT_CURRENCY_SYMBOL};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display). Amounts are always pounds and pence.
    pub currency_symbol: String,

    /// Decimal places shown for net weight in grams
    pub weight_decimals: u8,

    /// Explicit profile database path; `None` means the platform data dir
    pub db_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Pounds sterling, two decimals for money and grams.
    fn default() -> Self {
        ConfigState {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            weight_decimals: 2,
            db_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILLMATE_DB_PATH`: Use this file for the profile store
    /// - `TILLMATE_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(path) = std::env::var("TILLMATE_DB_PATH") {
            if !path.trim().is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(symbol) = std::env::var("TILLMATE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_pence(1234)), "£12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    /// Formats grams with the configured precision ("130.00").
    pub fn format_grams(&self, grams: f64) -> String {
        format!("{:.*}", self.weight_decimals as usize, grams)
    }
}
