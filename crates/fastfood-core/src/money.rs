//! # Money Module
//!
//! Provides the `Money` type returned as an order total.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: exact Decimal arithmetic, then integer cents             │
//! │    Σ price × quantity   computed in rust_decimal (exact)                │
//! │    round once, half to even, to 2 places                                │
//! │    store as i64 cents                                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fastfood_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let total = Money::from_decimal_rounded(Decimal::new(35125, 3)).unwrap(); // 35.125
//! assert_eq!(total.cents(), 3512); // half to even
//! assert_eq!(total.to_string(), "35.12");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Same width as the rest of the pipeline; totals are
///   never negative but the type does not forbid it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency**: A display concern, handled by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use fastfood_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to 2 places (half to even) and converts it.
    ///
    /// Returns `None` when the amount does not fit in i64 cents.
    ///
    /// ## Bankers Rounding
    /// ```text
    /// 0.125 → 0.12   (2 is even)
    /// 0.135 → 0.14   (4 is even)
    /// 0.126 → 0.13   (not a midpoint)
    /// ```
    pub fn from_decimal_rounded(amount: Decimal) -> Option<Self> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        let cents = rounded.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()?;
        Some(Money(cents))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal with exactly 2 places.
    ///
    /// ## Example
    /// ```rust
    /// use fastfood_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3500).to_decimal().to_string(), "35.00");
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
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
}

/// Renders as a plain decimal (`35.00`, `-5.50`).
///
/// ## Note
/// No currency symbol. The CLI prefixes one from its configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
