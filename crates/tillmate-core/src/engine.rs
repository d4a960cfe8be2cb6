//! # Conversion Engine
//!
//! Turns a scale reading into a coin count and a subtotal.
//!
//! ## The Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  gross text ──► parse_reading ──┐                                       │
//! │                                 ├──► net = max(0, gross − tare)         │
//! │  tare text  ──► parse_reading ──┘          │                            │
//! │                                            ▼                            │
//! │               raw = unit_weight > 0 ? net / unit_weight : 0             │
//! │                                            │                            │
//! │                                            ▼                            │
//! │               count = max(0, mode.apply(raw))                           │
//! │                                            │                            │
//! │                                            ▼                            │
//! │               subtotal = count × face_value                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here returns an error. A reading that cannot be parsed counts as
//! zero grams, so a stray keystroke shows a zero row until it is corrected.
//!
//! Every function is pure: the same inputs always give the same outputs.

use std::collections::HashMap;

use crate::measurement::MeasurementSheet;
use crate::registry::DenominationRegistry;
use crate::types::{Denomination, GrandTotals, RoundingMode, RowResult};

// =============================================================================
// Reading Parser
// =============================================================================

/// A scale or tare reading typed by the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// A finite number of grams.
    Valid(f64),
    /// Blank, non-numeric or non-finite text.
    Invalid,
}

impl Reading {
    /// Resolves the reading to grams; invalid readings are zero.
    #[inline]
    pub fn grams(self) -> f64 {
        match self {
            Reading::Valid(value) => value,
            Reading::Invalid => 0.0,
        }
    }
}

/// Parses operator text into a [`Reading`].
///
/// ## Rules
/// - The first `,` is treated as the decimal separator (`"12,5"` → 12.5)
/// - Leading whitespace is skipped
/// - The longest leading number is used (`"120g"` → 120)
/// - No leading number, or a non-finite one → [`Reading::Invalid`]
///
/// ## Example
/// ```rust
/// use tillmate_core::engine::{parse_reading, Reading};
///
/// assert_eq!(parse_reading("71,2"), Reading::Valid(71.2));
/// assert_eq!(parse_reading(""), Reading::Invalid);
/// assert_eq!(parse_reading("abc").grams(), 0.0);
/// ```
pub fn parse_reading(text: &str) -> Reading {
    let normalized = text.replacen(',', ".", 1);
    let prefix = numeric_prefix(normalized.trim_start());

    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => Reading::Valid(value),
        _ => Reading::Invalid,
    }
}

/// Parses operator text straight to grams.
#[inline]
pub fn parse_grams(text: &str) -> f64 {
    parse_reading(text).grams()
}

/// Longest prefix shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

// =============================================================================
// Row Computation
// =============================================================================

/// Computes one denomination's row from the operator's text.
///
/// Blank tare is zero. Never fails.
///
/// ## Example
/// ```rust
/// use tillmate_core::engine::compute_row;
/// use tillmate_core::registry::DenominationRegistry;
/// use tillmate_core::types::RoundingMode;
///
/// let registry = DenominationRegistry::load_defaults();
/// let row = compute_row(registry.get("p10").unwrap(), "133", "", RoundingMode::Floor);
/// assert_eq!(row.count, 20);
/// ```
pub fn compute_row(denomination: &Denomination, gross_text: &str, tare_text: &str, mode: RoundingMode) -> RowResult {
    compute_row_grams(denomination, parse_grams(gross_text), parse_grams(tare_text), mode)
}

/// Computes one denomination's row from already-parsed grams.
pub fn compute_row_grams(denomination: &Denomination, gross: f64, tare: f64, mode: RoundingMode) -> RowResult {
    let net_weight = clamp_non_negative(gross - tare);

    let raw_count = if denomination.is_countable() {
        net_weight / denomination.unit_weight
    } else {
        0.0
    };

    // `as u64` saturates; NaN becomes 0
    let count = clamp_non_negative(mode.apply(raw_count)) as u64;

    RowResult {
        key: denomination.key.clone(),
        net_weight,
        raw_count,
        count,
        subtotal: denomination.face_value.multiply_count(count),
    }
}

/// Sums counts and subtotals. Order of rows does not matter.
pub fn compute_grand_totals<'a, I>(rows: I) -> GrandTotals
where
    I: IntoIterator<Item = &'a RowResult>,
{
    rows.into_iter().fold(GrandTotals::default(), |mut totals, row| {
        totals.grand_count = totals.grand_count.saturating_add(row.count);
        totals.grand_total += row.subtotal;
        totals
    })
}

#[inline]
fn clamp_non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Sheet Evaluation
// =============================================================================

/// Every row of the till, in registry order, plus the grand totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    pub rows: Vec<RowResult>,
    pub totals: GrandTotals,
}

/// Recomputes the whole sheet.
///
/// Rows without a measurement count as blank gross and zero tare.
pub fn evaluate_sheet(registry: &DenominationRegistry, sheet: &MeasurementSheet, mode: RoundingMode) -> SheetSummary {
    let rows: Vec<RowResult> = registry
        .iter()
        .map(|coin| match sheet.get(&coin.key) {
            Some(input) => compute_row(coin, &input.gross_text, &input.tare_text, mode),
            None => compute_row_grams(coin, 0.0, 0.0, mode),
        })
        .collect();

    let totals = compute_grand_totals(&rows);
    SheetSummary { rows, totals }
}

// =============================================================================
// Demo Values
// =============================================================================

/// Sample gross weights (grams) for a demo fill.
///
/// Illustrative only; some values do not divide evenly by the default unit
/// weight (176g of £1 coins at 8.75g is 20.11 coins).
pub fn fill_demo_values() -> HashMap<&'static str, f64> {
    HashMap::from([
        ("gbp2", 120.0),
        ("gbp1", 176.0),
        ("p50", 160.0),
        ("p20", 250.0),
        ("p10", 130.0),
        ("p5", 65.0),
        ("p2", 71.2),
        ("p1", 35.6),
    ])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn ten_pence() -> Denomination {
        Denomination::new("p10", "10p", Money::from_pence(10), 6.50)
    }

    #[test]
    fn test_parse_reading() {
        assert_eq!(parse_reading("130"), Reading::Valid(130.0));
        assert_eq!(parse_reading("  12.5"), Reading::Valid(12.5));
        assert_eq!(parse_reading("12,5"), Reading::Valid(12.5));
        assert_eq!(parse_reading("-3"), Reading::Valid(-3.0));
        assert_eq!(parse_reading(".5"), Reading::Valid(0.5));
        assert_eq!(parse_reading("1e2"), Reading::Valid(100.0));
    }

    #[test]
    fn test_parse_reading_takes_leading_number() {
        assert_eq!(parse_reading("120g"), Reading::Valid(120.0));
        assert_eq!(parse_reading("5.5.5"), Reading::Valid(5.5));
        assert_eq!(parse_reading("7e"), Reading::Valid(7.0));
        // Only the first comma becomes a decimal point
        assert_eq!(parse_reading("1,234,5"), Reading::Valid(1.234));
    }

    #[test]
    fn test_parse_reading_invalid() {
        for text in ["", "   ", "abc", ".", "-", "g120", "inf", "NaN", "1e999"] {
            assert_eq!(parse_reading(text), Reading::Invalid, "text: {text:?}");
            assert_eq!(parse_grams(text), 0.0);
        }
    }

    #[test]
    fn test_exact_count_round() {
        let row = compute_row(&ten_pence(), "130", "0", RoundingMode::Round);
        assert_eq!(row.net_weight, 130.0);
        assert_eq!(row.raw_count, 20.0);
        assert_eq!(row.count, 20);
        assert_eq!(row.subtotal, Money::from_pence(200));
    }

    #[test]
    fn test_floor_and_ceil() {
        let coin = ten_pence();
        let floor = compute_row(&coin, "133", "0", RoundingMode::Floor);
        assert!((floor.raw_count - 20.4615).abs() < 0.001);
        assert_eq!(floor.count, 20);

        let ceil = compute_row(&coin, "133", "0", RoundingMode::Ceil);
        assert_eq!(ceil.count, 21);
        assert_eq!(ceil.subtotal, Money::from_pence(210));

        let round = compute_row(&coin, "133", "0", RoundingMode::Round);
        assert_eq!(round.count, 20);
    }

    #[test]
    fn test_blank_gross_is_zero() {
        let row = compute_row(&ten_pence(), "", "", RoundingMode::Round);
        assert_eq!(row.net_weight, 0.0);
        assert_eq!(row.count, 0);
        assert_eq!(row.subtotal.to_string(), "£0.00");
    }

    #[test]
    fn test_tare_never_makes_net_negative() {
        let row = compute_row(&ten_pence(), "50", "80", RoundingMode::Ceil);
        assert_eq!(row.net_weight, 0.0);
        assert_eq!(row.count, 0);
    }

    #[test]
    fn test_tare_is_subtracted() {
        let row = compute_row(&ten_pence(), "150,5", "20.5", RoundingMode::Round);
        assert_eq!(row.net_weight, 130.0);
        assert_eq!(row.count, 20);
    }

    #[test]
    fn test_uncountable_weight_gives_zero() {
        for weight in [0.0, -6.5] {
            let coin = Denomination::new("p10", "10p", Money::from_pence(10), weight);
            for mode in RoundingMode::ALL {
                let row = compute_row(&coin, "130", "0", mode);
                assert_eq!(row.raw_count, 0.0);
                assert_eq!(row.count, 0);
                assert!(row.subtotal.is_zero());
            }
        }
    }

    #[test]
    fn test_huge_count_saturates() {
        let coin = Denomination::new("gbp2", "£2", Money::from_pence(200), 1e-300);
        let row = compute_row(&coin, "1000", "0", RoundingMode::Round);
        assert_eq!(row.count, u64::MAX);
        assert_eq!(row.subtotal.pence(), i64::MAX);
    }

    #[test]
    fn test_matches_formula_for_all_modes() {
        let coin = ten_pence();
        for gross in [0.0, 3.2, 6.5, 9.75, 64.9, 133.0, 1000.1] {
            for mode in RoundingMode::ALL {
                let row = compute_row_grams(&coin, gross, 0.0, mode);
                let expected = mode.apply(gross / coin.unit_weight).max(0.0) as u64;
                assert_eq!(row.count, expected, "gross {gross} mode {mode}");
            }
        }
    }

    #[test]
    fn test_compute_row_is_idempotent() {
        let coin = ten_pence();
        let first = compute_row(&coin, "133", "2", RoundingMode::Ceil);
        let second = compute_row(&coin, "133", "2", RoundingMode::Ceil);
        assert_eq!(first, second);
    }

    #[test]
    fn test_grand_totals_sum_in_any_order() {
        let registry = DenominationRegistry::load_defaults();
        let demo = fill_demo_values();
        let rows: Vec<RowResult> = registry
            .iter()
            .map(|coin| compute_row_grams(coin, demo[coin.key.as_str()], 0.0, RoundingMode::Round))
            .collect();

        let forward = compute_grand_totals(&rows);
        let backward = compute_grand_totals(rows.iter().rev());
        assert_eq!(forward, backward);

        let count: u64 = rows.iter().map(|r| r.count).sum();
        let total: Money = rows.iter().map(|r| r.subtotal).sum();
        assert_eq!(forward.grand_count, count);
        assert_eq!(forward.grand_total, total);
    }

    #[test]
    fn test_demo_values_cover_registry() {
        let registry = DenominationRegistry::load_defaults();
        let demo = fill_demo_values();
        assert!(registry.keys().all(|key| demo.contains_key(key)));
    }

    #[test]
    fn test_evaluate_sheet() {
        let registry = DenominationRegistry::load_defaults();
        let mut sheet = MeasurementSheet::for_registry(&registry);
        sheet.set_gross("p10", "130");
        sheet.set_gross("gbp2", "120");

        let summary = evaluate_sheet(&registry, &sheet, RoundingMode::Round);
        assert_eq!(summary.rows.len(), 8);
        assert_eq!(summary.rows[0].key, "gbp2");
        assert_eq!(summary.rows[0].count, 10);
        assert_eq!(summary.totals.grand_count, 30);
        assert_eq!(summary.totals.grand_total.to_string(), "£22.00");
    }

    #[test]
    fn test_evaluate_sheet_missing_rows_are_zero() {
        let registry = DenominationRegistry::load_defaults();
        let sheet = MeasurementSheet::default();

        let summary = evaluate_sheet(&registry, &sheet, RoundingMode::Ceil);
        assert_eq!(summary.rows.len(), registry.len());
        assert_eq!(summary.totals, GrandTotals::default());
    }
}
