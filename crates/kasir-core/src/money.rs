//! # Money Module
//!
//! Provides the `Money` type for monetary values in the smallest currency
//! unit (for Rupiah that is the whole Rupiah, prices like `3500`).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE LEDGER RULE                                                        │
//! │                                                                         │
//! │  transaction.total_amount == Σ detail.subtotal                          │
//! │  detail.subtotal          == quantity × unit price at sale time         │
//! │                                                                         │
//! │  Integer arithmetic keeps both equalities exact. Overflow is checked   │
//! │  and surfaced as an error instead of wrapping silently.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::new(3500);
//! let subtotal = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(subtotal.amount(), 7000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// Serializes as a bare integer, so `{"total_amount": 13000}` on the wire.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from an amount in the smallest currency unit.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Indomie, price 3500
    /// Quantity: 2
    ///      │
    ///      ▼
    /// checked_mul_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: 7000
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Groups thousands with dots, the way receipts print Rupiah: `13.000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.amount().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        if self.is_negative() {
            grouped.insert(0, '-');
        }
        f.pad(&grouped)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_mul_quantity() {
        let price = Money::new(3500);
        assert_eq!(price.checked_mul_quantity(2), Some(Money::new(7000)));
        assert_eq!(price.checked_mul_quantity(0), Some(Money::zero()));
    }

    #[test]
    fn test_checked_mul_overflow() {
        let price = Money::new(i64::MAX / 2 + 1);
        assert_eq!(price.checked_mul_quantity(2), None);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
        assert_eq!(
            Money::new(7000).checked_add(Money::new(6000)),
            Some(Money::new(13000))
        );
    }

    #[test]
    fn test_running_total_reports_overflow() {
        let fold = |amounts: &[i64]| {
            amounts
                .iter()
                .try_fold(Money::zero(), |acc, &a| acc.checked_add(Money::new(a)))
        };
        assert_eq!(fold(&[7000, 6000]), Some(Money::new(13000)));
        assert_eq!(fold(&[i64::MAX, 1, -1]), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(0).to_string(), "0");
        assert_eq!(Money::new(950).to_string(), "950");
        assert_eq!(Money::new(13000).to_string(), "13.000");
        assert_eq!(Money::new(1234567).to_string(), "1.234.567");
        assert_eq!(Money::new(-3500).to_string(), "-3.500");
        assert_eq!(format!("{:>7}", Money::new(3500)), "  3.500");
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::new(13000)).unwrap();
        assert_eq!(json, "13000");
        let back: Money = serde_json::from_str("3500").unwrap();
        assert_eq!(back, Money::new(3500));
    }
}
