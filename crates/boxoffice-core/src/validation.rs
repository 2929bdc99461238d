//! # Validation Module
//!
//! Parses and validates the two raw inputs: the ticket-count string and
//! the optional purchase date string.
//!
//! ## Validation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Pipeline                                │
//! │                                                                         │
//! │  ticket string ──► absent/empty? ──► Err(NoTickets)                    │
//! │       │                                                                 │
//! │       ├── shape "<digits>,<digits>,<digits>"? ──► Err(TicketFormat)    │
//! │       │                                                                 │
//! │       ├── all three counts zero? ──► Err(NoTickets)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  date string ──► absent? ──► use injected "now"                        │
//! │       │                                                                 │
//! │       ├── shape "YYYY/MM/DD HH:MM:SS"? ──► Err(DateFormat)             │
//! │       │                                                                 │
//! │       ├── valid calendar value? ──► Err(DateValue)                     │
//! │       │                                                                 │
//! │       ├── canonical round-trip? ──► Err(DateFormat)                    │
//! │       │                                                                 │
//! │       └── OK ──► ValidatedRequest { counts, purchased_at }             │
//! │                                                                         │
//! │  Short-circuiting: tickets before date, first error wins, no partial   │
//! │  result ever reaches the pricing stage.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Now" and the timezone are explicit arguments, never read from the
//! environment here, so every call is deterministic and testable.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::error::{ValidationError, ValidationResult};
use crate::types::TicketCounts;
use crate::MAX_TICKET_COUNT;

/// Canonical purchase-date format: `YYYY/MM/DD HH:MM:SS`, zero-padded.
pub const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

// =============================================================================
// Validated Request
// =============================================================================

/// The fully validated pair of inputs handed to the pricing stage.
///
/// Both fields are immutable for the remainder of the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Parsed ticket counts (at least one non-zero).
    pub counts: TicketCounts,

    /// Resolved purchase time in the venue timezone.
    pub purchased_at: DateTime<FixedOffset>,
}

/// Validates both raw inputs in pipeline order: tickets first, then date.
pub fn validate_request(
    ticket_input: Option<&str>,
    date_input: Option<&str>,
    tz: FixedOffset,
    now: DateTime<Utc>,
) -> ValidationResult<ValidatedRequest> {
    let counts = parse_ticket_counts(ticket_input)?;
    let purchased_at = resolve_purchase_time(date_input, tz, now)?;
    Ok(ValidatedRequest {
        counts,
        purchased_at,
    })
}

// =============================================================================
// Ticket Counts
// =============================================================================

/// Parses the `"A,C,S"` ticket-count string.
///
/// ## Rules
/// - Absent or empty input is `NoTickets`: an argument that was never
///   given has no format to be wrong about
/// - Exactly three comma-separated runs of ASCII digits; no sign, no
///   decimal point, no spaces; anything else is `TicketFormat`
/// - Counts above [`MAX_TICKET_COUNT`] are `TicketFormat`: the cap keeps
///   every downstream product inside integer range
/// - All three counts zero is `NoTickets`
///
/// ## Example
/// ```rust
/// use boxoffice_core::validation::parse_ticket_counts;
///
/// let counts = parse_ticket_counts(Some("1,2,3")).unwrap();
/// assert_eq!((counts.adult, counts.child, counts.senior), (1, 2, 3));
///
/// assert!(parse_ticket_counts(Some("a,b,c")).is_err());
/// assert!(parse_ticket_counts(None).is_err());
/// ```
pub fn parse_ticket_counts(input: Option<&str>) -> ValidationResult<TicketCounts> {
    let raw = match input {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(ValidationError::NoTickets),
    };

    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 3 {
        return Err(ValidationError::TicketFormat);
    }
    if fields
        .iter()
        .any(|f| f.is_empty() || !f.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(ValidationError::TicketFormat);
    }

    // Counts beyond the cap are no more meaningful than letters
    let parse = |f: &str| {
        f.parse::<u64>()
            .ok()
            .filter(|n| *n <= MAX_TICKET_COUNT)
            .ok_or(ValidationError::TicketFormat)
    };
    let counts = TicketCounts::new(parse(fields[0])?, parse(fields[1])?, parse(fields[2])?);

    if counts.is_empty() {
        return Err(ValidationError::NoTickets);
    }

    Ok(counts)
}

// =============================================================================
// Purchase Time
// =============================================================================

/// Resolves the optional purchase-date string to a timestamp in `tz`.
///
/// ## Rules
/// - Absent or empty input resolves to the injected `now`
/// - The string must have the canonical `YYYY/MM/DD HH:MM:SS` shape
///   (`DateFormat` otherwise)
/// - It must denote a real calendar date-time (`DateValue` otherwise,
///   e.g. month 13 or February 31st)
/// - Re-formatting the parsed value must reproduce the input exactly
///   (`DateFormat` otherwise)
///
/// ## Example
/// ```rust
/// use boxoffice_core::{default_timezone, validation::resolve_purchase_time};
/// use chrono::Utc;
///
/// let tz = default_timezone();
/// let at = resolve_purchase_time(Some("2023/01/04 10:00:00"), tz, Utc::now()).unwrap();
/// assert_eq!(at.to_string(), "2023-01-04 10:00:00 +09:00");
/// ```
pub fn resolve_purchase_time(
    input: Option<&str>,
    tz: FixedOffset,
    now: DateTime<Utc>,
) -> ValidationResult<DateTime<FixedOffset>> {
    let raw = match input {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(now.with_timezone(&tz)),
    };

    if !has_canonical_shape(raw) {
        return Err(ValidationError::DateFormat);
    }

    let naive = NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::DateValue)?;

    // The canonical formatter must reproduce the input byte-for-byte
    if naive.format(DATE_FORMAT).to_string() != raw {
        return Err(ValidationError::DateFormat);
    }

    // A fixed offset has no gaps or overlaps, but chrono still makes us
    // answer for the general case
    tz.from_local_datetime(&naive)
        .single()
        .ok_or(ValidationError::DateValue)
}

/// Checks the literal `YYYY/MM/DD HH:MM:SS` shape: digit runs of fixed
/// width with `/`, space and `:` separators at fixed positions.
fn has_canonical_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 19 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'/',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
