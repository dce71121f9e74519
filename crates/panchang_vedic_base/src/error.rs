//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Error from time or timezone handling.
    Time(TimeError),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidLocation(_) => None,
        }
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
