//! Low-accuracy solar theory.
//!
//! Meeus, _Astronomical Algorithms_ ch. 25: geometric mean longitude and
//! mean anomaly, a three-term equation of centre, radius vector from the
//! orbital eccentricity, and a combined aberration + nutation correction.
//! Error in apparent longitude stays below 0.01° within ±2 centuries of
//! J2000.

use panchang_time::{jd_to_centuries, normalize_360};

use crate::body::{Body, BodyPosition};

/// Worst-case error of [`sun_longitude`] in degrees.
pub const SUN_LONGITUDE_ERROR_DEG: f64 = 0.01;

/// Mean geocentric motion of the Sun, degrees per day.
pub const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 0.985_647_36;

/// Astronomical unit in km (IAU 2012).
const AU_KM: f64 = 149_597_870.7;

/// Apparent geocentric position of the Sun.
pub fn sun_position(jd: f64) -> BodyPosition {
    let t = jd_to_centuries(jd);
    let t2 = t * t;

    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let v = m + c.to_radians();
    let r_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * v.cos());

    // aberration (-20.5") and the principal nutation term
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_lon - 0.00569 - 0.00478 * omega.sin();

    BodyPosition {
        body: Body::Sun,
        lon_deg: normalize_360(apparent),
        lat_deg: 0.0,
        distance_km: r_au * AU_KM,
    }
}

/// Apparent tropical longitude of the Sun in degrees [0, 360).
pub fn sun_longitude(jd: f64) -> f64 {
    sun_position(jd).lon_deg
}
