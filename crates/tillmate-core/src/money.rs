//! # Money Module
//!
//! Provides the `Money` type for coin face values and till totals.
//!
//! ## Why Integer Pence?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    20 × 0.10 + 3 × 0.20 = 2.6000000000000005  ❌                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    20 × 10p + 3 × 20p = 260p → "£2.60"                                 │
//! │                                                                         │
//! │  Weights stay f64 (they are measurements), money never does.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tillmate_core::money::Money;
//!
//! let fifty = Money::from_pence(50);
//! let bag = fifty.multiply_count(20); // 20 coins
//! assert_eq!(bag.to_string(), "£10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// Symbol used by `Display` when no other symbol is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the smallest GBP unit).
///
/// ## Where Money is Used
/// ```text
/// Denomination.face_value ──► RowResult.subtotal ──► GrandTotals.grand_total
///                                   │                        │
///                                   └── "£2.00" in the table └── "£47.30"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use tillmate_core::money::Money;
    ///
    /// let two_pounds = Money::from_pence(200);
    /// assert_eq!(two_pounds.pence(), 200);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Creates a Money value from pounds and pence.
    ///
    /// ```rust
    /// use tillmate_core::money::Money;
    ///
    /// assert_eq!(Money::from_pounds_pence(2, 50).pence(), 250);
    /// ```
    #[inline]
    pub const fn from_pounds_pence(pounds: i64, pence: i64) -> Self {
        Money(pounds * 100 + pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a face value by a coin count.
    ///
    /// Saturates at `i64::MAX`. A tiny unit weight such as `0.0000001`
    /// yields counts far beyond anything a till holds.
    ///
    /// ## Example
    /// ```rust
    /// use tillmate_core::money::Money;
    ///
    /// let ten_pence = Money::from_pence(10);
    /// assert_eq!(ten_pence.multiply_count(20).pence(), 200);
    /// assert_eq!(Money::from_pence(200).multiply_count(u64::MAX).pence(), i64::MAX);
    /// ```
    #[inline]
    pub fn multiply_count(&self, count: u64) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Money(self.0.saturating_mul(count))
    }

    /// Formats as `<symbol>x.yy`, with a leading `-` for negatives.
    ///
    /// ```rust
    /// use tillmate_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(1050).format_with("€"), "€10.50");
    /// assert_eq!(Money::from_pence(-5).format_with("£"), "-£0.05");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, self.pounds().abs(), self.pence_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `£x.yy`, the format the till table uses.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition saturates, totals never wrap.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
