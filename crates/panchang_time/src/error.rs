//! Error types for civil time construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised when building an [`crate::Instant`] from civil fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a valid Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second are out of range.
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// The timezone name is not in the IANA database.
    UnknownTimezone(String),
    /// The local time falls in a DST gap and never occurs in that zone.
    NonexistentLocalTime(String),
    /// Text could not be parsed as a date or date-time.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => write!(f, "invalid time: {hour:02}:{minute:02}:{second:02}"),
            Self::UnknownTimezone(name) => write!(f, "unknown timezone: {name}"),
            Self::NonexistentLocalTime(msg) => write!(f, "nonexistent local time: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
