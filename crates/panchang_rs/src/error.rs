use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_config::ConfigError;
use panchang_time::TimeError;
use panchang_vedic_base::VedicError;

/// Errors from building a [`crate::Panchangam`] or its inputs.
///
/// Computations themselves are total; only construction can fail.
#[derive(Debug)]
#[non_exhaustive]
pub enum PanchangError {
    Time(TimeError),
    Location(VedicError),
    Config(ConfigError),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time: {e}"),
            Self::Location(e) => write!(f, "location: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for PanchangError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Location(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for PanchangError {
    fn from(e: VedicError) -> Self {
        Self::Location(e)
    }
}

impl From<ConfigError> for PanchangError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
