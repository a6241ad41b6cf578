//! # Money Module
//!
//! Provides the `Money` type for rupee amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹85.00 is stored as 8500 paise                                       │
//! │    Percentages are applied with explicit rounding                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use schoolcart_core::money::Money;
//!
//! let price = Money::from_rupees(85);
//! assert_eq!(price.paise(), 8500);
//! assert_eq!(price.to_string(), "₹85.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// A monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences between amounts may be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as paise**: the dashboard divides by 100 for display
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► Inventory table ("₹85.00")
///                 └──► Projected profit (price × stock × margin)
///
/// Offer kinds: fixed amount, bundle price, minimum purchase
/// Orders: amount, Sales: daily revenue
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use schoolcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(200).paise(), 20_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use schoolcart_core::money::Money;
    ///
    /// let stock_value = Money::from_rupees(85).multiply_quantity(120);
    /// assert_eq!(stock_value, Money::from_rupees(10_200));
    /// assert_eq!(Money::from_paise(i64::MAX).multiply_quantity(2).paise(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns `percent`% of this amount, rounded half away from zero to the
    /// nearest paisa.
    ///
    /// ## Example
    /// ```rust
    /// use schoolcart_core::money::Money;
    ///
    /// // 25% of ₹85.00 = ₹21.25
    /// assert_eq!(Money::from_rupees(85).percentage(25).paise(), 2125);
    /// // 35% of ₹0.05 = 1.75 paise → 2 paise
    /// assert_eq!(Money::from_paise(5).percentage(35).paise(), 2);
    /// ```
    pub fn percentage(&self, percent: u32) -> Money {
        // i128 keeps large stock values from overflowing
        let scaled = self.0 as i128 * percent as i128;
        let rounded = if scaled < 0 {
            (scaled - 50) / 100
        } else {
            (scaled + 50) / 100
        };
        Money(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Divides evenly by `count`, rounding half away from zero.
    ///
    /// Returns `None` when `count` is zero.
    pub fn divide_rounded(&self, count: i64) -> Option<Money> {
        if count == 0 {
            return None;
        }
        let negative = (self.0 < 0) != (count < 0);
        let magnitude = (self.0.abs() + count.abs() / 2) / count.abs();
        Some(Money(if negative { -magnitude } else { magnitude }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `₹85.00`. Localised grouping is left to the dashboard.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Totals saturate instead of wrapping.
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
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees_and_parts() {
        let money = Money::from_paise(1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);

        assert_eq!(Money::from_paise(-550).paise_part(), 50);
        assert_eq!(Money::from_rupees(85), Money::from_paise(8500));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(200)), "₹200.00");
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::zero()), "₹0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!(a.multiply_quantity(3).paise(), 3000);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_rupees(20));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_paise(5_000_000_000_000_000_000);
        assert_eq!(huge.multiply_quantity(2).paise(), i64::MAX);
        assert_eq!((huge + huge).paise(), i64::MAX);

        let mut total = Money::from_paise(i64::MAX - 1);
        total += Money::from_rupees(1);
        assert_eq!(total.paise(), i64::MAX);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(Money::from_rupees(100).percentage(20), Money::from_rupees(20));
        // 33% of 1 paisa = 0.33 → 0
        assert_eq!(Money::from_paise(1).percentage(33).paise(), 0);
        // 50% of 1 paisa = 0.5 → 1
        assert_eq!(Money::from_paise(1).percentage(50).paise(), 1);
        assert_eq!(Money::from_paise(-1).percentage(50).paise(), -1);
    }

    #[test]
    fn test_divide_rounded() {
        // 135100 / 462 = 292.42 → 292
        assert_eq!(
            Money::from_rupees(135_100).divide_rounded(462),
            Some(Money::from_paise(29_242))
        );
        assert_eq!(Money::from_paise(5).divide_rounded(2), Some(Money::from_paise(3)));
        assert_eq!(Money::from_paise(-5).divide_rounded(2), Some(Money::from_paise(-3)));
        assert_eq!(Money::from_paise(5).divide_rounded(0), None);
    }
}
