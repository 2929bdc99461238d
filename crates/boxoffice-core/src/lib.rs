//! # boxoffice-core: Pure Pricing Logic for Box Office
//!
//! This crate is the **heart** of Box Office. It turns two raw inputs -
//! a ticket-count string and an optional purchase date - into either a
//! price breakdown or a validation error, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Box Office Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      apps/cli (Reporter)                        │   │
//! │  │     process args ──► engine ──► rendered report / error line    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ boxoffice-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │ schedule  │  │  pricing  │  │   table   │  │   │
//! │  │   │  counts   │  │   hour    │  │  options  │  │   unit    │  │   │
//! │  │   │   date    │  │  weekday  │  │  totals   │  │  prices   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TicketCounts, Rate, OptionSet, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`table`] - The pricing table (every constant, swappable)
//! - [`error`] - The closed validation-error taxonomy
//! - [`validation`] - Input parsing and timestamp resolution
//! - [`schedule`] - Hour/weekday classification
//! - [`pricing`] - Option resolution and price computation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; "now" and the
//!    timezone are arguments, never ambient state
//! 2. **No I/O**: clock, arguments, printing all live in the CLI
//! 3. **Integer Money**: unit prices and subtotals are whole-yen `i64`;
//!    only the total-level multipliers move to `f64`, unrounded
//! 4. **Explicit Errors**: all failures are typed variants, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use boxoffice_core::{
//!     default_timezone, price_purchase, validate_request, PricingTable,
//! };
//! use chrono::Utc;
//!
//! let request = validate_request(
//!     Some("1,1,1"),
//!     Some("2023/01/07 10:00:00"), // a Saturday
//!     default_timezone(),
//!     Utc::now(),
//! )?;
//!
//! let breakdown = price_purchase(&request, &PricingTable::default());
//! assert_eq!(breakdown.base_price.yen(), 2300);
//! assert_eq!(breakdown.option_applied_price, 2645.0); // × 1.15
//! # Ok::<(), boxoffice_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod schedule;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boxoffice_core::Money` instead of
// `use boxoffice_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use pricing::{compute_price, price_purchase, resolve_options, PriceBreakdown};
pub use schedule::TimeFacts;
pub use table::PricingTable;
pub use types::{OptionSet, PriceOption, Rate, TicketCounts};
pub use validation::{validate_request, ValidatedRequest};

use chrono::FixedOffset;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Venue timezone offset from UTC, in hours.
///
/// ## Why a constant?
/// The system prices for a single venue in JST (UTC+9). The offset is a
/// plain parameter threaded into timestamp resolution - nothing mutates
/// process-global timezone state - so a multi-venue future only needs to
/// pass a different offset.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// Maximum tickets of one type in a single purchase.
///
/// ## Why a constant?
/// The digit-run shape check accepts a number of any length, and `u64`
/// alone is not a safe bound: the half-head doubling and the
/// `unit price × count` products must stay inside `i64`/`u64` range.
/// With counts capped at one billion, every intermediate the engine
/// computes is at most a few orders of magnitude above 10^12, far from
/// overflow. A larger count is no more meaningful than letters and
/// reports the same format error.
pub const MAX_TICKET_COUNT: u64 = 1_000_000_000;

/// The venue timezone as a `FixedOffset`.
pub fn default_timezone() -> FixedOffset {
    // In range by construction; FixedOffset::east_opt only fails beyond ±24h
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600).expect("offset within ±24h")
}
