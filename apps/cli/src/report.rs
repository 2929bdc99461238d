//! Report rendering: the one success or error message the caller sees.
//!
//! The engine guarantees both the baseline and the option-applied price;
//! this module only decides how to show them. The option-applied figure
//! appears only when it differs from the base price.

use boxoffice_core::{PriceBreakdown, TicketCounts, ValidatedRequest, ValidationError};
use serde::Serialize;

/// Date layout used in the human-readable report.
const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Text Report
// =============================================================================

/// Renders the success report.
pub fn render_success(request: &ValidatedRequest, breakdown: &PriceBreakdown) -> String {
    let TicketCounts {
        adult,
        child,
        senior,
    } = request.counts;

    let mut out = format!(
        "[SUCCESS] adult: {adult}, child: {child}, senior: {senior}, purchased at {}\n",
        request.purchased_at.format(REPORT_DATE_FORMAT)
    );
    out.push_str(&format!("Total price: {} yen\n", breakdown.base_price.yen()));
    if breakdown.has_adjustment() {
        out.push_str(&format!(
            "Price with options applied: {} yen\n",
            format_price(breakdown.option_applied_price)
        ));
    }
    out.push_str(&format!("Applied options: {}", breakdown.applied));
    out
}

/// Renders the single error line.
pub fn render_error(error: &ValidationError) -> String {
    format!("[ERROR] {error}")
}

/// Formats a price that may be fractional: whole values print without a
/// decimal point, fractional values print exactly as computed.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}

// =============================================================================
// JSON Report
// =============================================================================

/// Machine-readable form of the success report (`--json`).
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub counts: &'a TicketCounts,
    pub purchased_at: String,
    #[serde(flatten)]
    pub breakdown: &'a PriceBreakdown,
}

impl<'a> JsonReport<'a> {
    pub fn new(request: &'a ValidatedRequest, breakdown: &'a PriceBreakdown) -> Self {
        JsonReport {
            counts: &request.counts,
            purchased_at: request
                .purchased_at
                .format(REPORT_DATE_FORMAT)
                .to_string(),
            breakdown,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
