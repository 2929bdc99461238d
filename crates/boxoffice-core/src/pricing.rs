//! # Pricing Module
//!
//! Option resolution and price computation.
//!
//! ## Price Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Price Pipeline                                   │
//! │                                                                         │
//! │  counts + time facts ──► resolve_options ──► OptionSet                 │
//! │                                                                         │
//! │  Per-ticket stage (integer Money):                                     │
//! │    unit price [- night deduction] × count, summed over the three       │
//! │    ticket types                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Total stage (f64, fixed order):                                       │
//! │    × group rate (0.90)  then  × holiday rate (1.15)                    │
//! │                                                                         │
//! │  The group discount is computed on the pre-surcharge amount; the       │
//! │  order never reverses.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding anywhere: the option-applied price is the exact computed
//! value and may be fractional.

use serde::{Serialize, Serializer};

use crate::money::Money;
use crate::schedule::{is_night_hour, is_weekend_day, TimeFacts};
use crate::table::PricingTable;
use crate::types::{OptionSet, PriceOption, TicketCounts};
use crate::validation::ValidatedRequest;

// =============================================================================
// Option Resolution
// =============================================================================

/// Decides which options apply to a purchase. Pure function.
///
/// - Group: weighted attendance strictly over the threshold
/// - Night: purchase hour outside the daytime window
/// - Holiday: purchase day is Saturday or Sunday
///
/// The three checks are independent; any subset can apply.
pub fn resolve_options(
    counts: &TicketCounts,
    facts: &TimeFacts,
    table: &PricingTable,
) -> OptionSet {
    OptionSet::new(
        counts.weighted_half_heads() > table.group_threshold_half_heads,
        is_night_hour(facts.hour, table),
        is_weekend_day(facts.weekday),
    )
}

// =============================================================================
// Price Computation
// =============================================================================

/// Sum of the three per-type line totals.
///
/// When `night` is set, every unit price is reduced by the flat night
/// deduction before multiplying by its count. The subtraction is not
/// clamped; the default table cannot go negative.
fn line_subtotal(counts: &TicketCounts, table: &PricingTable, night: bool) -> Money {
    let deduction = if night {
        table.night_deduction
    } else {
        Money::zero()
    };
    (table.adult_unit - deduction).multiply_count(counts.adult)
        + (table.child_unit - deduction).multiply_count(counts.child)
        + (table.senior_unit - deduction).multiply_count(counts.senior)
}

/// Computes the purchase price.
///
/// With `apply_options == false` every option is ignored and the plain
/// base subtotal comes back - that is the baseline the report compares
/// against. With `apply_options == true`:
///
/// 1. the night deduction adjusts the unit prices (only if Night is in
///    the set - otherwise plain unit prices even here)
/// 2. the group rate multiplies the subtotal (only if Group is in the set)
/// 3. the holiday rate multiplies the (possibly group-discounted) result
///    (only if Holiday is in the set)
pub fn compute_price(
    counts: &TicketCounts,
    options: OptionSet,
    apply_options: bool,
    table: &PricingTable,
) -> f64 {
    let night = apply_options && options.contains(PriceOption::Night);
    let mut total = line_subtotal(counts, table, night).as_f64();

    if apply_options {
        if options.contains(PriceOption::Group) {
            total = table.group_rate.apply(total);
        }
        if options.contains(PriceOption::Holiday) {
            total = table.holiday_rate.apply(total);
        }
    }

    total
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// The result of pricing one purchase: baseline, option-applied price,
/// and which options applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    /// Plain base price - no option applied.
    pub base_price: Money,

    /// Price with every applicable option applied. Equals the base price
    /// numerically when no option applies; may be fractional otherwise.
    pub option_applied_price: f64,

    /// Which options applied, in display order.
    #[serde(serialize_with = "serialize_option_list")]
    pub applied: OptionSet,
}

impl PriceBreakdown {
    /// Computes both prices for a purchase, sharing the base subtotal
    /// between the baseline and the option-applied path instead of
    /// running the per-ticket stage twice.
    pub fn compute(counts: &TicketCounts, options: OptionSet, table: &PricingTable) -> Self {
        let base = line_subtotal(counts, table, false);

        let subtotal = if options.contains(PriceOption::Night) {
            line_subtotal(counts, table, true)
        } else {
            base
        };

        let mut option_applied = subtotal.as_f64();
        if options.contains(PriceOption::Group) {
            option_applied = table.group_rate.apply(option_applied);
        }
        if options.contains(PriceOption::Holiday) {
            option_applied = table.holiday_rate.apply(option_applied);
        }

        PriceBreakdown {
            base_price: base,
            option_applied_price: option_applied,
            applied: options,
        }
    }

    /// True when the applied options changed the price, i.e. the report
    /// should show both figures.
    pub fn has_adjustment(&self) -> bool {
        self.option_applied_price != self.base_price.as_f64()
    }
}

/// Prices a validated purchase end to end: classify the timestamp,
/// resolve the options, compute the breakdown.
pub fn price_purchase(request: &ValidatedRequest, table: &PricingTable) -> PriceBreakdown {
    let facts = TimeFacts::from_datetime(request.purchased_at);
    let options = resolve_options(&request.counts, &facts, table);
    PriceBreakdown::compute(&request.counts, options, table)
}

/// Serializes the applied options as a list, in display order.
fn serialize_option_list<S>(set: &OptionSet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(set.iter())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn table() -> PricingTable {
        PricingTable::default()
    }

    fn daytime_weekday() -> TimeFacts {
        TimeFacts {
            hour: 10,
            weekday: Weekday::Wed,
        }
    }

    #[test]
    fn test_resolve_no_options() {
        let counts = TicketCounts::new(1, 2, 3);
        let options = resolve_options(&counts, &daytime_weekday(), &table());
        assert!(options.is_empty());
    }

    #[test]
    fn test_resolve_group_threshold_is_strict() {
        // Exactly 10 weighted people: no discount
        let at_threshold = TicketCounts::new(10, 0, 0);
        assert!(resolve_options(&at_threshold, &daytime_weekday(), &table()).is_empty());

        // 10.5 weighted people (21 children): discount
        let over = TicketCounts::new(0, 21, 0);
        let options = resolve_options(&over, &daytime_weekday(), &table());
        assert!(options.contains(PriceOption::Group));
        assert!(!options.contains(PriceOption::Night));
    }

    #[test]
    fn test_resolve_night_and_holiday() {
        let counts = TicketCounts::new(1, 1, 1);
        let facts = TimeFacts {
            hour: 8,
            weekday: Weekday::Sat,
        };
        let options = resolve_options(&counts, &facts, &table());
        assert!(!options.contains(PriceOption::Group));
        assert!(options.contains(PriceOption::Night));
        assert!(options.contains(PriceOption::Holiday));
    }

    #[test]
    fn test_base_price() {
        // 1*1000 + 2*500 + 3*800 = 4400
        let counts = TicketCounts::new(1, 2, 3);
        assert_eq!(compute_price(&counts, OptionSet::none(), true, &table()), 4400.0);
    }

    #[test]
    fn test_no_options_equals_baseline() {
        let counts = TicketCounts::new(1, 2, 3);
        let with = compute_price(&counts, OptionSet::none(), true, &table());
        let without = compute_price(&counts, OptionSet::none(), false, &table());
        assert_eq!(with, without);
    }

    #[test]
    fn test_group_discount() {
        // 11 adults: 11000 → 9900
        let counts = TicketCounts::new(11, 0, 0);
        let options = OptionSet::new(true, false, false);
        assert_eq!(compute_price(&counts, options, true, &table()), 9900.0);
        // Baseline ignores the option
        assert_eq!(compute_price(&counts, options, false, &table()), 11_000.0);
    }

    #[test]
    fn test_night_discount_is_per_ticket() {
        // (1000-300) + (500-300) + (800-300) = 1400
        let counts = TicketCounts::new(1, 1, 1);
        let options = OptionSet::new(false, true, false);
        assert_eq!(compute_price(&counts, options, true, &table()), 1400.0);
        assert_eq!(compute_price(&counts, options, false, &table()), 2300.0);
    }

    #[test]
    fn test_holiday_surcharge() {
        // 2300 × 1.15 = 2645, exactly
        let counts = TicketCounts::new(1, 1, 1);
        let options = OptionSet::new(false, false, true);
        assert_eq!(compute_price(&counts, options, true, &table()), 2645.0);
    }

    #[test]
    fn test_group_before_holiday_order() {
        // 11 adults on a weekend: 11000 × 0.9 = 9900, then × 1.15 = 11385.
        // (The reverse order, 11000 × 1.15 × 0.9, lands on the same value
        // only because multiplication commutes; the shared intermediate
        // 9900 is what the fixed order guarantees.)
        let counts = TicketCounts::new(11, 0, 0);
        let options = OptionSet::new(true, false, true);
        assert_eq!(compute_price(&counts, options, true, &table()), 11_385.0);
    }

    #[test]
    fn test_all_three_options() {
        // 21 adults at 8:00 on a Saturday:
        // per-ticket: 21 × (1000-300) = 14700
        // total: × 0.9 = 13230, × 1.15 = 15214.5
        let counts = TicketCounts::new(21, 0, 0);
        let options = OptionSet::new(true, true, true);
        assert_eq!(compute_price(&counts, options, true, &table()), 15_214.5);
    }

    #[test]
    fn test_night_ignored_without_apply() {
        let counts = TicketCounts::new(1, 1, 1);
        let options = OptionSet::new(false, true, false);
        // applyOptions=false uses plain unit prices even though Night is set
        assert_eq!(compute_price(&counts, options, false, &table()), 2300.0);
    }

    #[test]
    fn test_breakdown_shares_baseline() {
        let counts = TicketCounts::new(1, 1, 1);
        let breakdown =
            PriceBreakdown::compute(&counts, OptionSet::new(false, false, true), &table());
        assert_eq!(breakdown.base_price, Money::from_yen(2300));
        assert_eq!(breakdown.option_applied_price, 2645.0);
        assert!(breakdown.has_adjustment());

        let plain = PriceBreakdown::compute(&counts, OptionSet::none(), &table());
        assert_eq!(plain.base_price, Money::from_yen(2300));
        assert_eq!(plain.option_applied_price, 2300.0);
        assert!(!plain.has_adjustment());
    }

    #[test]
    fn test_breakdown_json_lists_options() {
        let counts = TicketCounts::new(11, 0, 0);
        let breakdown =
            PriceBreakdown::compute(&counts, OptionSet::new(true, false, true), &table());
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["base_price"], 11_000);
        assert_eq!(json["applied"], serde_json::json!(["group", "holiday"]));
    }

    #[test]
    fn test_custom_table() {
        // Alternate pricing table flows through without engine changes
        let mut custom = table();
        custom.adult_unit = Money::from_yen(1200);
        custom.holiday_rate = crate::types::Rate::from_bps(12_000);

        let counts = TicketCounts::new(2, 0, 0);
        assert_eq!(compute_price(&counts, OptionSet::none(), false, &custom), 2400.0);
        let options = OptionSet::new(false, false, true);
        assert_eq!(compute_price(&counts, options, true, &custom), 2880.0);
    }
}
