//! Greenwich and local mean sidereal time in degrees.
//!
//! Uses the Meeus (eq. 12.4) polynomial, evaluated directly from a UT
//! Julian Date. Accuracy is far better than the 0.1 s needed for
//! sunrise and horizontal-coordinate work.

use crate::angle::normalize_360;
use crate::julian::{J2000_JD, jd_to_centuries};

/// Mean sidereal rotation rate of the Earth, degrees per solar day.
pub const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich Mean Sidereal Time in degrees [0, 360) at a UT Julian Date.
///
/// GMST = 280.46061837 + 360.98564736629·(JD − 2451545) + 0.000387933·T²
///        − T³/38710000
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + SIDEREAL_DEG_PER_DAY * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(theta)
}

/// Local Mean Sidereal Time in degrees [0, 360).
///
/// `longitude_deg` is east-positive.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_deg: f64) -> f64 {
    normalize_360(gmst_deg(jd_ut) + longitude_deg)
}
