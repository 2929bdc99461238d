//! # Domain Types
//!
//! Core domain types used throughout the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  TicketCounts   │   │      Rate       │   │  PriceOption    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  adult (u64)    │   │  bps (u32)      │   │  Group          │       │
//! │  │  child (u64)    │   │  9000 = ×0.90   │   │  Night          │       │
//! │  │  senior (u64)   │   │  11500 = ×1.15  │   │  Holiday        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────┐           │
//! │  │  OptionSet: which options apply, iterated in the fixed  │           │
//! │  │  order Group, Night, Holiday, duplicates impossible     │           │
//! │  └─────────────────────────────────────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Ticket Counts
// =============================================================================

/// How many tickets of each type a purchase requests.
///
/// Counts come from the validated `"A,C,S"` input string; a `TicketCounts`
/// that reaches the pricing stage always has at least one non-zero field
/// (validation rejects the all-zero case) and every field at most
/// [`crate::MAX_TICKET_COUNT`], so the half-head doubling and the
/// per-type line totals cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    /// Adult tickets.
    pub adult: u64,

    /// Child tickets.
    pub child: u64,

    /// Senior tickets.
    pub senior: u64,
}

impl TicketCounts {
    /// Creates a set of ticket counts.
    #[inline]
    pub const fn new(adult: u64, child: u64, senior: u64) -> Self {
        TicketCounts {
            adult,
            child,
            senior,
        }
    }

    /// True when all three counts are zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.adult == 0 && self.child == 0 && self.senior == 0
    }

    /// Weighted attendance in half-head units.
    ///
    /// The group-discount rule counts a child as half a person:
    /// `adult + 0.5*child + senior`. Doubling both sides keeps the
    /// comparison in exact integer arithmetic:
    /// `adult*2 + child + senior*2` against a threshold of 20 half-heads
    /// (= 10 people).
    #[inline]
    pub const fn weighted_half_heads(&self) -> u64 {
        self.adult * 2 + self.child + self.senior * 2
    }
}

// =============================================================================
// Rate
// =============================================================================

/// A price multiplier represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000.
/// 9000 bps = ×0.90 (group discount), 11500 bps = ×1.15 (weekend surcharge).
///
/// `apply` computes `amount * bps / 10000` in f64. For whole-yen subtotals
/// the intermediate product is an exactly-representable integer, so the
/// quotient is the mathematically exact result (e.g. 2300 × 1.15 = 2645
/// exactly, not 2644.999…).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a multiplier (for display only).
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Applies the rate to an amount.
    #[inline]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.0 as f64 / 10_000.0
    }
}

// =============================================================================
// Price Options
// =============================================================================

/// A named discount/surcharge option.
///
/// The closed enumeration behind `OptionSet`. The original system matched
/// option names by substring search over a joined string; membership here
/// is a typed test, which is equivalent but cannot misfire on partial
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceOption {
    /// 10% off the subtotal for weighted attendance over 10.
    Group,

    /// Flat per-ticket deduction outside the 9:00-17:59 day window.
    Night,

    /// 15% uplift on the total for Saturday/Sunday purchases.
    Holiday,
}

impl PriceOption {
    /// Human-readable label used by reports.
    pub const fn label(&self) -> &'static str {
        match self {
            PriceOption::Group => "group discount",
            PriceOption::Night => "night discount",
            PriceOption::Holiday => "weekend surcharge",
        }
    }
}

impl fmt::Display for PriceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Option Set
// =============================================================================

/// The set of options that apply to a purchase.
///
/// One flag per option, so duplicates are impossible by construction, and
/// [`OptionSet::iter`] always yields in the fixed evaluation/display order:
/// Group, Night, Holiday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    group: bool,
    night: bool,
    holiday: bool,
}

impl OptionSet {
    /// Builds a set from the three independent flags.
    #[inline]
    pub const fn new(group: bool, night: bool, holiday: bool) -> Self {
        OptionSet {
            group,
            night,
            holiday,
        }
    }

    /// The empty set (no options apply).
    #[inline]
    pub const fn none() -> Self {
        OptionSet::new(false, false, false)
    }

    /// Membership test.
    #[inline]
    pub const fn contains(&self, option: PriceOption) -> bool {
        match option {
            PriceOption::Group => self.group,
            PriceOption::Night => self.night,
            PriceOption::Holiday => self.holiday,
        }
    }

    /// True when no option applies.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.group && !self.night && !self.holiday
    }

    /// Iterates the applied options in the fixed order Group, Night, Holiday.
    pub fn iter(&self) -> impl Iterator<Item = PriceOption> {
        let set = *self;
        [PriceOption::Group, PriceOption::Night, PriceOption::Holiday]
            .into_iter()
            .filter(move |option| set.contains(*option))
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for option in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(&option, f)?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_half_heads() {
        // 1 adult + 2 children + 3 seniors = 1 + 1 + 3 = 5 people weighted
        let counts = TicketCounts::new(1, 2, 3);
        assert_eq!(counts.weighted_half_heads(), 10);

        // 10 people exactly is NOT over the threshold of 20 half-heads
        assert_eq!(TicketCounts::new(10, 0, 0).weighted_half_heads(), 20);
        assert_eq!(TicketCounts::new(11, 0, 0).weighted_half_heads(), 22);

        // 21 children = 10.5 people weighted, strictly over 10
        assert_eq!(TicketCounts::new(0, 21, 0).weighted_half_heads(), 21);
    }

    #[test]
    fn test_counts_is_empty() {
        assert!(TicketCounts::new(0, 0, 0).is_empty());
        assert!(!TicketCounts::new(0, 1, 0).is_empty());
    }

    #[test]
    fn test_rate_apply_is_exact() {
        let group = Rate::from_bps(9000);
        let holiday = Rate::from_bps(11_500);

        assert_eq!(group.apply(11_000.0), 9900.0);
        assert_eq!(holiday.apply(2300.0), 2645.0);

        // Composed group → holiday on an even subtotal stays exact
        assert_eq!(holiday.apply(group.apply(2300.0)), 2380.5);
    }

    #[test]
    fn test_rate_multiplier() {
        assert_eq!(Rate::from_bps(9000).multiplier(), 0.9);
        assert_eq!(Rate::from_bps(11_500).multiplier(), 1.15);
    }

    #[test]
    fn test_option_set_order_and_membership() {
        let set = OptionSet::new(true, false, true);
        assert!(set.contains(PriceOption::Group));
        assert!(!set.contains(PriceOption::Night));
        assert!(set.contains(PriceOption::Holiday));

        let listed: Vec<PriceOption> = set.iter().collect();
        assert_eq!(listed, vec![PriceOption::Group, PriceOption::Holiday]);
    }

    #[test]
    fn test_option_set_display() {
        assert_eq!(OptionSet::none().to_string(), "none");
        assert_eq!(
            OptionSet::new(true, true, true).to_string(),
            "group discount, night discount, weekend surcharge"
        );
        assert_eq!(
            OptionSet::new(false, true, false).to_string(),
            "night discount"
        );
    }
}
