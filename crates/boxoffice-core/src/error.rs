//! # Error Types
//!
//! The closed validation-error taxonomy for the pricing engine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  raw inputs ──► validation ──► ValidationError ──► Reporter            │
//! │                                                                         │
//! │  Validation short-circuits: ticket counts are checked before the       │
//! │  date, the first error wins, and no partial breakdown is ever          │
//! │  produced alongside an error.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to exactly one user-facing line

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// This is a closed set: every failure the engine can report is one of
/// these four variants, and none of them carries a partial result.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Ticket input is absent, empty, or all three counts are zero.
    ///
    /// ## Precedence
    /// Absence reports this variant (not a format error): an argument that
    /// was never given has no format to be wrong about. A present but
    /// malformed string reports [`ValidationError::TicketFormat`] instead,
    /// and the all-zero check runs only on strings that passed the shape
    /// check.
    #[error("ticket counts must contain at least one ticket")]
    NoTickets,

    /// Ticket string does not match `"<digits>,<digits>,<digits>"`.
    #[error("ticket counts must be entered as \"A,C,S\" (three comma-separated numbers)")]
    TicketFormat,

    /// Date string does not match the canonical `YYYY/MM/DD HH:MM:SS`
    /// shape, or fails the exact round-trip through the canonical
    /// formatter (e.g. a non-zero-padded field).
    #[error("purchase date must be entered as \"YYYY/MM/DD HH:MM:SS\" or left empty")]
    DateFormat,

    /// Date string has the right shape but is not a valid calendar
    /// date-time (e.g. month 13, February 31st).
    #[error("purchase date could not be resolved to a valid date-time")]
    DateValue,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_single_lines() {
        let all = [
            ValidationError::NoTickets,
            ValidationError::TicketFormat,
            ValidationError::DateFormat,
            ValidationError::DateValue,
        ];
        for err in all {
            let msg = err.to_string();
            assert!(!msg.is_empty());
            assert!(!msg.contains('\n'));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::NoTickets.to_string(),
            "ticket counts must contain at least one ticket"
        );
        assert_eq!(
            ValidationError::DateValue.to_string(),
            "purchase date could not be resolved to a valid date-time"
        );
    }
}
