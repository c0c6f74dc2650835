//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  A sale total must equal the sum of its line subtotals EXACTLY.        │
//! │  With floats, 3 × 0.10 + 0.20 may not compare equal to 0.50.           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    unit_price_cents = 10, quantity = 3  →  subtotal_cents = 30         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ironmonger_core::money::Money;
//!
//! let price = Money::from_cents(850); // 8.50 (bag of cement)
//! let subtotal = price.checked_multiply_quantity(4);
//! assert_eq!(subtotal, Some(Money::from_cents(3400)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Arithmetic is checked only: every operation that can leave the `i64`
/// range returns `Option`.
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► SaleLine.unit_price_cents ──► SaleItem.subtotal_cents
///                                                              │
///                                                  Σ ──► Sale.total_cents
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use ironmonger_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use ironmonger_core::money::Money;
    ///
    /// let hammer = Money::from_cents(1299);
    /// assert_eq!(hammer.checked_multiply_quantity(3), Some(Money::from_cents(3897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// Human-readable rendering, for logs only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(5500).to_string(), "55.00");
        assert_eq!(Money::from_cents(850).to_string(), "8.50");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-92233720368547758.08");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_checked_operations_detect_overflow() {
        let big = Money::from_cents(i64::MAX);
        assert_eq!(big.checked_multiply_quantity(2), None);
        assert_eq!(big.checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(500).checked_multiply_quantity(3),
            Some(Money::from_cents(1500))
        );
        assert_eq!(
            Money::from_cents(1500).checked_add(Money::from_cents(4000)),
            Some(Money::from_cents(5500))
        );
    }
}
