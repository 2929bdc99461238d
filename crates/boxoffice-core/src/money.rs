//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Yen                                              │
//! │    Unit prices, line totals and the base subtotal are all whole-yen    │
//! │    integers, so every addition and count multiplication is exact.      │
//! │                                                                         │
//! │  The ONLY place a price leaves integer space is the total-level        │
//! │  multipliers (×0.9 group, ×1.15 weekend), where the contract is the    │
//! │  exact unrounded value, see `Rate::apply` in `types`.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxoffice_core::money::Money;
//!
//! let adult = Money::from_yen(1000);
//! let line_total = adult.multiply_count(3); // ¥3000
//! assert_eq!(line_total.yen(), 3000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole yen.
///
/// ## Design Decisions
/// - **i64 (signed)**: a custom pricing table may set a night deduction
///   larger than a unit price; the engine does not clamp, so the type must
///   carry the negative result honestly
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for the JSON report path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole yen.
    #[inline]
    pub const fn from_yen(yen: i64) -> Self {
        Money(yen)
    }

    /// Returns the value in whole yen.
    #[inline]
    pub const fn yen(&self) -> i64 {
        self.0
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

    /// Multiplies a unit price by a ticket count.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    ///
    /// let senior = Money::from_yen(800);
    /// assert_eq!(senior.multiply_count(3).yen(), 2400);
    /// ```
    #[inline]
    pub const fn multiply_count(&self, count: u64) -> Self {
        Money(self.0 * count as i64)
    }

    /// The value as `f64`, for the total-level rate adjustments.
    ///
    /// Whole-yen subtotals in this system are far below 2^53, so the
    /// conversion is exact.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} yen", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values (summing line totals).
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values (per-ticket night deduction).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
