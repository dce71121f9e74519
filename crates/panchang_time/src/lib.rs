//! Angle normalization, Julian Day conversions, civil instants and sidereal
//! time.
//!
//! This crate provides:
//! - Degree normalization helpers shared by every other crate
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - [`Instant`], an immutable civil date/time bound to an IANA timezone
//! - Greenwich and local mean sidereal time in degrees

pub mod angle;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use angle::{normalize_360, normalize_to_pm180};
pub use error::TimeError;
pub use instant::{Instant, parse_timezone};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{SIDEREAL_DEG_PER_DAY, gmst_deg, local_sidereal_time_deg};

/// Re-exported so callers can name zones without depending on `chrono-tz`.
pub use chrono_tz::Tz;
