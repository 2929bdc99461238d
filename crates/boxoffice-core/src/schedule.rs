//! # Schedule Module
//!
//! Derives the calendar facts the discount rules care about - hour of day
//! and day of week - from a resolved purchase timestamp.
//!
//! Deterministic, pure logic. No wall-clock access: the timestamp was
//! resolved upstream and is immutable from here on.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::table::PricingTable;

// =============================================================================
// Time Facts
// =============================================================================

/// The two calendar facts option resolution needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFacts {
    /// Hour of day, 0-23, in the venue timezone.
    pub hour: u32,

    /// Day of week.
    pub weekday: Weekday,
}

impl TimeFacts {
    /// Extracts the facts from a resolved purchase timestamp.
    pub fn from_datetime(at: DateTime<FixedOffset>) -> Self {
        TimeFacts {
            hour: at.hour(),
            weekday: at.weekday(),
        }
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// True when `hour` falls outside the daytime window.
///
/// With the canonical table this is `hour < 9 || hour > 17`: the
/// 17:00-17:59 window is still daytime. That asymmetry is the historical
/// rule and is kept as-is; `day_end_hour` is inclusive.
#[inline]
pub fn is_night_hour(hour: u32, table: &PricingTable) -> bool {
    hour < table.day_start_hour || hour > table.day_end_hour
}

/// True on Saturday and Sunday.
#[inline]
pub fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

// =============================================================================
// Unit Tests
// =============================================================================
