//! Equatorial ↔ horizontal (azimuth/altitude) conversion.
//!
//! Azimuth is measured from north through east. The hour angle comes from
//! the local sidereal time: H = LST − α.

use serde::Serialize;

use panchang_time::normalize_360;

/// Observer-local sky position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalCoords {
    /// Azimuth in degrees [0, 360), north = 0, east = 90.
    pub azimuth_deg: f64,
    /// Geometric altitude in degrees [-90, 90], no refraction.
    pub altitude_deg: f64,
}

/// Convert right ascension/declination to azimuth/altitude.
///
/// `lst_deg` is the local sidereal time, `latitude_deg` the observer's
/// geodetic latitude.
pub fn equatorial_to_horizontal(
    ra_deg: f64,
    dec_deg: f64,
    lst_deg: f64,
    latitude_deg: f64,
) -> HorizontalCoords {
    let (sin_h, cos_h) = (lst_deg - ra_deg).to_radians().sin_cos();
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = latitude_deg.to_radians().sin_cos();

    let sin_alt = (sin_d * sin_p + cos_d * cos_p * cos_h).clamp(-1.0, 1.0);
    let az = (-cos_d * sin_h).atan2(sin_d * cos_p - cos_d * sin_p * cos_h);

    HorizontalCoords {
        azimuth_deg: normalize_360(az.to_degrees()),
        altitude_deg: sin_alt.asin().to_degrees(),
    }
}

/// Inverse of [`equatorial_to_horizontal`]; returns `(ra_deg, dec_deg)`.
pub fn horizontal_to_equatorial(
    hor: &HorizontalCoords,
    lst_deg: f64,
    latitude_deg: f64,
) -> (f64, f64) {
    let (sin_a, cos_a) = hor.azimuth_deg.to_radians().sin_cos();
    let (sin_h, cos_h) = hor.altitude_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = latitude_deg.to_radians().sin_cos();

    let sin_d = (sin_h * sin_p + cos_h * cos_p * cos_a).clamp(-1.0, 1.0);
    let ha = (-cos_h * sin_a).atan2(sin_h * cos_p - cos_h * sin_p * cos_a);

    let ra = normalize_360(lst_deg - ha.to_degrees());
    (ra, sin_d.asin().to_degrees())
}
