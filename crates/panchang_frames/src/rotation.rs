//! Ecliptic ↔ equatorial rotation about the equinox axis.
//!
//! Both directions rotate the unit vector about +x by ±ε, so a round trip
//! is exact to floating-point precision.

use serde::Serialize;

use crate::spherical::{lon_lat_to_unit, unit_to_lon_lat};

/// Ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticCoords {
    /// Longitude in degrees [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees [-90, 90].
    pub lat_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Equatorial position of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialCoords {
    /// Right ascension in degrees [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees [-90, 90].
    pub dec_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

fn rotate_x(v: [f64; 3], angle_deg: f64) -> [f64; 3] {
    let (s, c) = angle_deg.to_radians().sin_cos();
    [v[0], c * v[1] - s * v[2], s * v[1] + c * v[2]]
}

/// Rotate ecliptic coordinates into the equator of date.
///
/// `obliquity_deg` is normally [`crate::true_obliquity_deg`] at the same epoch.
pub fn ecliptic_to_equatorial(ecl: &EclipticCoords, obliquity_deg: f64) -> EquatorialCoords {
    let v = rotate_x(lon_lat_to_unit(ecl.lon_deg, ecl.lat_deg), obliquity_deg);
    let (ra_deg, dec_deg) = unit_to_lon_lat(&v);
    EquatorialCoords {
        ra_deg,
        dec_deg,
        distance_km: ecl.distance_km,
    }
}

/// Inverse of [`ecliptic_to_equatorial`].
pub fn equatorial_to_ecliptic(eq: &EquatorialCoords, obliquity_deg: f64) -> EclipticCoords {
    let v = rotate_x(lon_lat_to_unit(eq.ra_deg, eq.dec_deg), -obliquity_deg);
    let (lon_deg, lat_deg) = unit_to_lon_lat(&v);
    EclipticCoords {
        lon_deg,
        lat_deg,
        distance_km: eq.distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4392911;

    fn ecl(lon_deg: f64, lat_deg: f64) -> EclipticCoords {
        EclipticCoords {
            lon_deg,
            lat_deg,
            distance_km: 1.0,
        }
    }

    #[test]
    fn equinox_point_unchanged() {
        let eq = ecliptic_to_equatorial(&ecl(0.0, 0.0), EPS);
        assert!(eq.ra_deg.abs() < 1e-12 || (eq.ra_deg - 360.0).abs() < 1e-12);
        assert!(eq.dec_deg.abs() < 1e-12);
    }

    #[test]
    fn summer_solstice_declination() {
        let eq = ecliptic_to_equatorial(&ecl(90.0, 0.0), EPS);
        assert!((eq.ra_deg - 90.0).abs() < 1e-9);
        assert!((eq.dec_deg - EPS).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // → α = 116.328942°, δ = 28.026183°
        let eq = ecliptic_to_equatorial(&ecl(113.215_630, 6.684_170), EPS);
        assert!((eq.ra_deg - 116.328_942).abs() < 1e-5, "ra = {}", eq.ra_deg);
        assert!((eq.dec_deg - 28.026_183).abs() < 1e-5, "dec = {}", eq.dec_deg);
    }

    #[test]
    fn round_trip_grid() {
        for i in 0..36 {
            for j in -8..=8 {
                let lon = i as f64 * 10.0 + 0.37;
                let lat = j as f64 * 10.0 + 0.11;
                let back = equatorial_to_ecliptic(&ecliptic_to_equatorial(&ecl(lon, lat), EPS), EPS);
                assert!((back.lon_deg - lon).abs() < 1e-6, "lon {lon} -> {}", back.lon_deg);
                assert!((back.lat_deg - lat).abs() < 1e-6, "lat {lat} -> {}", back.lat_deg);
            }
        }
    }
}
