//! # Pricing Table
//!
//! Every numeric constant of the pricing rules lives here, in one explicit
//! configuration structure, so an alternate table (promotions, testing)
//! can be swapped in without touching engine logic.
//!
//! ## Canonical Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Unit prices      adult 1000 / child 500 / senior 800 yen              │
//! │  Night discount   -300 yen per ticket, outside the 9:00-17:59 window   │
//! │  Group discount   ×0.90 when weighted attendance > 10                  │
//! │  Weekend uplift   ×1.15 on Saturday and Sunday                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Rate;

// =============================================================================
// Pricing Table
// =============================================================================

/// The full set of pricing constants.
///
/// `Default` is the canonical table above. All fields carry serde defaults,
/// so a JSON override file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    /// Adult unit price.
    pub adult_unit: Money,

    /// Child unit price.
    pub child_unit: Money,

    /// Senior unit price.
    pub senior_unit: Money,

    /// Flat per-ticket deduction applied to every unit price when the
    /// night option is active.
    pub night_deduction: Money,

    /// Total multiplier for the group discount (9000 bps = ×0.90).
    pub group_rate: Rate,

    /// Total multiplier for the weekend surcharge (11500 bps = ×1.15).
    pub holiday_rate: Rate,

    /// Group-discount threshold in half-head units (a child counts as
    /// half a person). 20 half-heads = 10 people; the discount applies
    /// strictly above this value.
    pub group_threshold_half_heads: u64,

    /// First hour of the daytime window (inclusive). Hours before this
    /// are night.
    pub day_start_hour: u32,

    /// Last hour of the daytime window (inclusive). Hours strictly after
    /// this are night, so with the default of 17 the 17:00-17:59 window
    /// is still daytime.
    pub day_end_hour: u32,
}

impl Default for PricingTable {
    fn default() -> Self {
        PricingTable {
            adult_unit: Money::from_yen(1000),
            child_unit: Money::from_yen(500),
            senior_unit: Money::from_yen(800),
            night_deduction: Money::from_yen(300),
            group_rate: Rate::from_bps(9000),
            holiday_rate: Rate::from_bps(11_500),
            group_threshold_half_heads: 20,
            day_start_hour: 9,
            day_end_hour: 17,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
