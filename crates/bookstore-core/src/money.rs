//! # Money Module
//!
//! Provides the `Money` type for book prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  0.1 + 0.2 = 0.30000000000000004  ❌                                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $580    → 58000 cents                                                │
//! │    $10.99  →  1099 cents                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Renderings
//! - [`Money::to_plain_string`]: the value as a number would print (`580`, `10.5`).
//!   Used in book display text.
//! - [`Money::to_fixed_string`]: always two decimals (`580.00`).
//!   Used by [`format_price`](crate::report::format_price) and `Display`.
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_major(580);
//! assert_eq!(price.cents(), 58000);
//! assert_eq!(price.to_plain_string(), "580");
//! assert_eq!(price.to_string(), "$580.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that `Book::new` can hold whatever the caller passes,
/// including negative prices. `Book::try_new` rejects those.
///
/// Construction and addition saturate at `i64::MIN`/`i64::MAX` cents
/// instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units, saturating on overflow.
    ///
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(580).cents(), 58000);
    /// assert_eq!(Money::from_major(i64::MAX).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(100))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Renders the value with exactly two decimals, sign first.
    ///
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).to_fixed_string(), "10.99");
    /// assert_eq!(Money::from_cents(-550).to_fixed_string(), "-5.50");
    /// assert_eq!(Money::from_cents(-5).to_fixed_string(), "-0.05");
    /// ```
    pub fn to_fixed_string(&self) -> String {
        format!(
            "{}{}.{:02}",
            self.sign(),
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }

    /// Renders the value the way a plain number prints: no trailing
    /// fractional zeros, no decimal point for whole amounts.
    ///
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(580).to_plain_string(), "580");
    /// assert_eq!(Money::from_cents(1050).to_plain_string(), "10.5");
    /// assert_eq!(Money::from_cents(1099).to_plain_string(), "10.99");
    /// assert_eq!(Money::from_cents(-300).to_plain_string(), "-3");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let whole = self.dollars().unsigned_abs();
        let fraction = self.cents_part();

        match fraction {
            0 => format!("{}{}", self.sign(), whole),
            f if f % 10 == 0 => format!("{}{}.{}", self.sign(), whole, f / 10),
            f => format!("{}{}.{:02}", self.sign(), whole, f),
        }
    }

    fn sign(&self) -> &'static str {
        if self.0 < 0 {
            "-"
        } else {
            ""
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Currency symbol followed by the fixed two-decimal value (`$-5.50` for negatives).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, self.to_fixed_string())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
