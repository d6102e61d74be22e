//! Parse errors for duration strings.

use thiserror::Error;

/// Errors raised while scanning a duration string.
///
/// Scanning stops at the first error; no partial total is returned. The
/// message text is part of the crate's contract and is meant to be shown
/// to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside `[0-9]`, `.`, `[a-z]`, `µ`.
    #[error("Invalid character '{0}' in duration string")]
    InvalidCharacter(char),

    /// A unit token with no entry in the unit table, reported as written.
    #[error("Unknown time unit: {0}")]
    UnknownUnit(String),

    /// A dangling number with no unit, a unit with no number, or an empty
    /// string.
    #[error("Invalid duration string format")]
    InvalidFormat,
}
