//! # Sheet Commands
//!
//! Commands for entering scale readings. Every command returns the full
//! recomputed sheet, so the display never computes anything itself.
//!
//! ## Row Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Row Lifecycle                                        │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Blank   │────►│  Gross   │────►│ Gross +  │                         │
//! │  │ (tare 0) │     │  typed   │     │  tare    │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲                │                 │                              │
//! │       │           update_gross      update_tare                        │
//! │       │                │                 │                              │
//! │       │                ▼                 ▼                              │
//! │       └──────────── reset_row / clear_inputs                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::state::{ConfigState, TillState};
use tillmate_core::{RoundingMode, TillSession, DEFAULT_TARE_TEXT};

/// One rendered row of the till sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub key: String,
    pub label: String,
    /// Face value, formatted ("£0.10")
    pub face_value: String,
    /// Unit weight in grams, as the weights editor shows it
    pub unit_weight: f64,
    /// Raw text the operator typed
    pub gross_text: String,
    pub tare_text: String,
    /// Net weight in grams, formatted ("130.00")
    pub net_weight: String,
    pub count: u64,
    /// Subtotal, formatted ("£2.00")
    pub subtotal: String,
}

/// The whole sheet: rows in registry order plus the grand totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetResponse {
    pub rows: Vec<RowView>,
    pub grand_count: u64,
    pub grand_total: String,
    pub rounding_mode: RoundingMode,
}

impl SheetResponse {
    /// Evaluates the session and formats it for display.
    pub fn build(session: &TillSession, config: &ConfigState) -> Self {
        let summary = session.evaluate();

        let rows = session
            .registry
            .iter()
            .zip(summary.rows.iter())
            .map(|(coin, row)| {
                let input = session.sheet.get(&coin.key);
                RowView {
                    key: coin.key.clone(),
                    label: coin.label.clone(),
                    face_value: config.format_currency(coin.face_value),
                    unit_weight: coin.unit_weight,
                    gross_text: input.map(|i| i.gross_text.clone()).unwrap_or_default(),
                    tare_text: input
                        .map(|i| i.tare_text.clone())
                        .unwrap_or_else(|| DEFAULT_TARE_TEXT.to_string()),
                    net_weight: config.format_grams(row.net_weight),
                    count: row.count,
                    subtotal: config.format_currency(row.subtotal),
                }
            })
            .collect();

        SheetResponse {
            rows,
            grand_count: summary.totals.grand_count,
            grand_total: config.format_currency(summary.totals.grand_total),
            rounding_mode: session.rounding_mode,
        }
    }

    /// Looks up a row by denomination key.
    pub fn row(&self, key: &str) -> Option<&RowView> {
        self.rows.iter().find(|r| r.key == key)
    }
}

/// Gets the current sheet.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Coin     Gross    Tare    Net      Count   Subtotal                    │
/// │  ───────  ───────  ──────  ───────  ─────   ────────                    │
/// │  £2       120      0       120.00   10      £20.00                      │
/// │  10p      130      0       130.00   20      £2.00                       │
/// │  ...                                                                    │
/// │  ─────────────────────────────────────────────────                      │
/// │  Total coins: 30                    Total value: £22.00                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_sheet(till: &TillState, config: &ConfigState) -> SheetResponse {
    debug!("get_sheet command");
    SheetResponse::build(till.session(), config)
}

/// Records the gross reading typed for a row.
///
/// Unknown keys are ignored; the sheet is returned unchanged.
pub fn update_gross(till: &mut TillState, config: &ConfigState, key: &str, text: &str) -> SheetResponse {
    debug!(key = %key, "update_gross command");

    if !till.session_mut().sheet.set_gross(key, text) {
        debug!(key = %key, "Unknown denomination, gross ignored");
    }

    get_sheet(till, config)
}

/// Records the tare reading typed for a row.
pub fn update_tare(till: &mut TillState, config: &ConfigState, key: &str, text: &str) -> SheetResponse {
    debug!(key = %key, "update_tare command");

    if !till.session_mut().sheet.set_tare(key, text) {
        debug!(key = %key, "Unknown denomination, tare ignored");
    }

    get_sheet(till, config)
}

/// Blanks one row: gross empty, tare "0".
pub fn reset_row(till: &mut TillState, config: &ConfigState, key: &str) -> SheetResponse {
    debug!(key = %key, "reset_row command");

    if !till.session_mut().sheet.reset_row(key) {
        debug!(key = %key, "Unknown denomination, reset ignored");
    }

    get_sheet(till, config)
}

/// Blanks every row. Weights and rounding mode are untouched.
pub fn clear_inputs(till: &mut TillState, config: &ConfigState) -> SheetResponse {
    debug!("clear_inputs command");
    till.session_mut().sheet.clear_all();
    get_sheet(till, config)
}

/// Fills every gross field with sample readings.
pub fn fill_demo(till: &mut TillState, config: &ConfigState) -> SheetResponse {
    debug!("fill_demo command");
    till.session_mut().fill_demo();
    get_sheet(till, config)
}
