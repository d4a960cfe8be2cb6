//! # Measurement Sheet
//!
//! The gross and tare text the operator has typed for each coin row.
//!
//! Inputs are kept as text, exactly as typed, so the display can echo them
//! back; the engine parses them on every recomputation. They are never saved.
//!
//! ## Row Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action            gross_text         tare_text                         │
//! │  ───────────────   ────────────────   ─────────────                     │
//! │  (startup)         ""                 "0"                               │
//! │  type in row       as typed           as typed                          │
//! │  Reset (row)       ""                 "0"                               │
//! │  Clear inputs      "" (every row)     "0" (every row)                   │
//! │  Fill demo         demo grams         "0"                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::registry::DenominationRegistry;
use crate::DEFAULT_TARE_TEXT;

/// Gross and tare text for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub gross_text: String,
    pub tare_text: String,
}

impl Default for MeasurementInput {
    fn default() -> Self {
        MeasurementInput {
            gross_text: String::new(),
            tare_text: DEFAULT_TARE_TEXT.to_string(),
        }
    }
}

/// Measurement inputs keyed by denomination key.
///
/// Edits to keys the sheet was not built with are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSheet {
    rows: HashMap<String, MeasurementInput>,
}

impl MeasurementSheet {
    /// Creates a blank row for every coin in the registry.
    pub fn for_registry(registry: &DenominationRegistry) -> Self {
        MeasurementSheet {
            rows: registry
                .keys()
                .map(|key| (key.to_string(), MeasurementInput::default()))
                .collect(),
        }
    }

    /// Returns the inputs for a row.
    pub fn get(&self, key: &str) -> Option<&MeasurementInput> {
        self.rows.get(key)
    }

    /// Sets the gross text. Returns whether the key was known.
    pub fn set_gross(&mut self, key: &str, text: impl Into<String>) -> bool {
        match self.rows.get_mut(key) {
            Some(row) => {
                row.gross_text = text.into();
                true
            }
            None => false,
        }
    }

    /// Sets the tare text. Returns whether the key was known.
    pub fn set_tare(&mut self, key: &str, text: impl Into<String>) -> bool {
        match self.rows.get_mut(key) {
            Some(row) => {
                row.tare_text = text.into();
                true
            }
            None => false,
        }
    }

    /// Blanks the gross and restores the default tare for one row.
    pub fn reset_row(&mut self, key: &str) -> bool {
        match self.rows.get_mut(key) {
            Some(row) => {
                *row = MeasurementInput::default();
                true
            }
            None => false,
        }
    }

    /// Resets every row.
    pub fn clear_all(&mut self) {
        for row in self.rows.values_mut() {
            *row = MeasurementInput::default();
        }
    }

    /// Seeds gross weights from a demo map and zeroes the tare of those rows.
    ///
    /// Rows missing from `values` are left untouched.
    pub fn fill_demo(&mut self, values: &HashMap<&str, f64>) {
        for (key, row) in self.rows.iter_mut() {
            if let Some(grams) = values.get(key.as_str()) {
                row.gross_text = grams.to_string();
                row.tare_text = DEFAULT_TARE_TEXT.to_string();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fill_demo_values;

    fn sheet() -> MeasurementSheet {
        MeasurementSheet::for_registry(&DenominationRegistry::load_defaults())
    }

    #[test]
    fn test_rows_start_blank_with_zero_tare() {
        let sheet = sheet();
        assert_eq!(sheet.len(), 8);
        let row = sheet.get("p1").unwrap();
        assert_eq!(row.gross_text, "");
        assert_eq!(row.tare_text, "0");
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut sheet = sheet();
        assert!(!sheet.set_gross("p3", "100"));
        assert!(!sheet.set_tare("p3", "5"));
        assert!(!sheet.reset_row("p3"));
        assert!(sheet.get("p3").is_none());
        assert_eq!(sheet.len(), 8);
    }

    #[test]
    fn test_reset_row_only_touches_that_row() {
        let mut sheet = sheet();
        sheet.set_gross("p10", "130");
        sheet.set_tare("p10", "4");
        sheet.set_gross("p20", "250");

        assert!(sheet.reset_row("p10"));
        assert_eq!(sheet.get("p10"), Some(&MeasurementInput::default()));
        assert_eq!(sheet.get("p20").unwrap().gross_text, "250");
    }

    #[test]
    fn test_clear_all() {
        let mut sheet = sheet();
        sheet.set_gross("gbp1", "176");
        sheet.set_tare("p5", "12");

        sheet.clear_all();
        assert_eq!(sheet, self::sheet());
    }

    #[test]
    fn test_fill_demo_sets_gross_and_zero_tare() {
        let mut sheet = sheet();
        sheet.set_tare("p2", "9");

        sheet.fill_demo(&fill_demo_values());
        let row = sheet.get("p2").unwrap();
        assert_eq!(row.gross_text, "71.2");
        assert_eq!(row.tare_text, "0");
        assert_eq!(sheet.get("gbp2").unwrap().gross_text, "120");
    }

    #[test]
    fn test_fill_demo_leaves_other_rows() {
        let mut sheet = sheet();
        sheet.set_gross("p1", "12");

        sheet.fill_demo(&HashMap::from([("p10", 130.0)]));
        assert_eq!(sheet.get("p10").unwrap().gross_text, "130");
        assert_eq!(sheet.get("p1").unwrap().gross_text, "12");
    }
}
