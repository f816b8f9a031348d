//! Compact timestamp handling.
//!
//! The planner stamps journeys and sections with "YYYYMMDDTHHMMSS" strings.
//! They are kept verbatim on the records and only parsed when a constraint
//! needs to do arithmetic on them.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// Format used by the planner for every timestamp it produces.
pub const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: {reason}")]
pub struct TimeError {
    value: String,
    reason: &'static str,
}

impl TimeError {
    fn new(value: &str, reason: &'static str) -> Self {
        Self {
            value: value.to_string(),
            reason,
        }
    }

    /// Returns the string that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A timestamp parsed from the planner's compact format.
///
/// # Examples
///
/// ```
/// use journey_qualifier::domain::CompactDateTime;
///
/// let t = CompactDateTime::parse("20240315T083000").unwrap();
/// assert_eq!(t.to_string(), "20240315T083000");
///
/// // Separators and short fields are rejected
/// assert!(CompactDateTime::parse("2024-03-15T08:30:00").is_err());
/// assert!(CompactDateTime::parse("20240315T0830").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompactDateTime(NaiveDateTime);

impl CompactDateTime {
    /// Parse a "YYYYMMDDTHHMMSS" string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // chrono accepts variable-width fields, the planner never emits them
        if s.len() != 15 {
            return Err(TimeError::new(s, "expected YYYYMMDDTHHMMSS"));
        }
        if s.as_bytes()[8] != b'T' {
            return Err(TimeError::new(s, "expected 'T' at position 8"));
        }

        NaiveDateTime::parse_from_str(s, COMPACT_FORMAT)
            .map(Self)
            .map_err(|_| TimeError::new(s, "not a valid date and time"))
    }

    /// Returns the underlying date and time.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Add a duration, returning `None` on overflow.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self)
    }

    /// Subtract a duration, returning `None` on overflow.
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        self.0.checked_sub_signed(duration).map(Self)
    }
}

impl fmt::Debug for CompactDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactDateTime({})", self.0.format(COMPACT_FORMAT))
    }
}

impl fmt::Display for CompactDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(COMPACT_FORMAT))
    }
}
