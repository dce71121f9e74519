//! Observer-centred positions of the Sun and Moon for sky visualization.

use serde::Serialize;

use panchang_ephem::{ALL_BODIES, Body, position};
use panchang_frames::{
    EclipticCoords, EquatorialCoords, HorizontalCoords, Projection, ScreenPosition,
    ecliptic_to_equatorial, equatorial_to_horizontal, project, true_obliquity_deg,
};
use panchang_time::{Instant, local_sidereal_time_deg};
use panchang_vedic_base::GeoLocation;

use crate::trace::{TraceEvent, TraceHook, emit};

/// Earth's equatorial radius, km.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// One body through every stage of the frame pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkyPosition {
    pub body: Body,
    pub ecliptic: EclipticCoords,
    pub equatorial: EquatorialCoords,
    /// Topocentric altitude (parallax in altitude applied), no refraction.
    pub horizontal: HorizontalCoords,
    pub screen: ScreenPosition,
}

/// Lower a geocentric altitude by the horizontal parallax at `distance_km`.
///
/// Reaches ~0.95° for the Moon near the horizon and ~2.4″ for the Sun.
fn parallax_in_altitude(hor: HorizontalCoords, distance_km: f64) -> HorizontalCoords {
    let sin_p = (EARTH_RADIUS_KM / distance_km).clamp(0.0, 1.0);
    let cos_alt = hor.altitude_deg.to_radians().cos();
    let shift = (sin_p * cos_alt).asin().to_degrees();
    HorizontalCoords {
        azimuth_deg: hor.azimuth_deg,
        altitude_deg: hor.altitude_deg - shift,
    }
}

/// `body` carried through ecliptic, equatorial and topocentric horizontal
/// frames, given the obliquity and local sidereal time at `jd`.
fn observe(
    body: Body,
    jd: f64,
    obliquity_deg: f64,
    lst_deg: f64,
    location: &GeoLocation,
) -> (EclipticCoords, EquatorialCoords, HorizontalCoords) {
    let ecliptic = position(body, jd).ecliptic();
    let equatorial = ecliptic_to_equatorial(&ecliptic, obliquity_deg);
    let geocentric = equatorial_to_horizontal(
        equatorial.ra_deg,
        equatorial.dec_deg,
        lst_deg,
        location.latitude_deg,
    );
    let horizontal = parallax_in_altitude(geocentric, equatorial.distance_km);
    (ecliptic, equatorial, horizontal)
}

/// Topocentric horizontal position of `body` and its geocentric distance
/// in km.
pub(crate) fn topocentric(body: Body, jd: f64, location: &GeoLocation) -> (HorizontalCoords, f64) {
    let eps = true_obliquity_deg(jd);
    let lst = local_sidereal_time_deg(jd, location.longitude_deg);
    let (_, equatorial, horizontal) = observe(body, jd, eps, lst, location);
    (horizontal, equatorial.distance_km)
}

/// Sun and Moon positions at `instant` as seen from `location`.
pub fn compute_sky_positions(
    instant: &Instant,
    location: &GeoLocation,
    projection: Projection,
) -> Vec<SkyPosition> {
    compute_sky_positions_traced(instant, location, projection, None)
}

/// [`compute_sky_positions`] reporting each body to `trace`.
pub fn compute_sky_positions_traced(
    instant: &Instant,
    location: &GeoLocation,
    projection: Projection,
    trace: Option<&dyn TraceHook>,
) -> Vec<SkyPosition> {
    let jd = instant.julian_day();
    let eps = true_obliquity_deg(jd);
    let lst = local_sidereal_time_deg(jd, location.longitude_deg);

    ALL_BODIES
        .iter()
        .map(|&body| {
            let (ecliptic, equatorial, horizontal) = observe(body, jd, eps, lst, location);
            emit(
                trace,
                TraceEvent::SkyBody {
                    body,
                    azimuth_deg: horizontal.azimuth_deg,
                    altitude_deg: horizontal.altitude_deg,
                },
            );
            SkyPosition {
                body,
                ecliptic,
                equatorial,
                horizontal,
                screen: project(&horizontal, projection),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_parallax_near_horizon() {
        let hor = HorizontalCoords {
            azimuth_deg: 90.0,
            altitude_deg: 0.0,
        };
        let shifted = parallax_in_altitude(hor, 384_400.0);
        let p = hor.altitude_deg - shifted.altitude_deg;
        assert!((p - 0.9507).abs() < 0.001, "p = {p}");
        assert_eq!(shifted.azimuth_deg, 90.0);
    }

    #[test]
    fn no_parallax_at_zenith() {
        let hor = HorizontalCoords {
            azimuth_deg: 0.0,
            altitude_deg: 90.0,
        };
        let shifted = parallax_in_altitude(hor, 384_400.0);
        assert!((shifted.altitude_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn one_record_per_body() {
        let loc = GeoLocation::new(13.0827, 80.2707, 0.0).unwrap();
        let now = Instant::from_julian_day(2_460_330.0, panchang_time::Tz::UTC);
        let sky = compute_sky_positions(&now, &loc, Projection::Mercator);
        assert_eq!(sky.len(), 2);
        assert_eq!(sky[0].body, Body::Sun);
        assert_eq!(sky[1].body, Body::Moon);
        for s in &sky {
            assert!(s.screen.is_visible());
            assert!((0.0..360.0).contains(&s.horizontal.azimuth_deg));
        }
    }
}
