//! Sunrise, sunset and twilight.
//!
//! The Sun's transit is found from its right ascension and the local
//! sidereal time. The event hour angle follows from the declination at
//! transit and the target altitude. Two correction passes then re-evaluate
//! right ascension and declination at the event estimate.
//!
//! All Julian Dates here are UT. Refraction is folded into the target
//! altitude, so the Sun position itself is geometric-apparent.

use chrono::{Datelike, NaiveDate};
use log::debug;

use panchang_ephem::sun_position;
use panchang_frames::{ecliptic_to_equatorial, true_obliquity_deg};
use panchang_time::{
    Instant, SIDEREAL_DEG_PER_DAY, Tz, calendar_to_jd, local_sidereal_time_deg, normalize_to_pm180,
};

use crate::riseset_types::{
    ALL_EVENTS, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarDayWindow,
};

/// Correction passes after the initial estimate, for transit and events.
const CORRECTION_PASSES: usize = 2;

/// Approximate local solar noon from the 0h UT Julian Date of a date.
///
/// `JD_noon = JD_0h + 0.5 - longitude / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Apparent right ascension and declination of the Sun in degrees.
pub fn sun_ra_dec_deg(jd: f64) -> (f64, f64) {
    let eq = ecliptic_to_equatorial(&sun_position(jd).ecliptic(), true_obliquity_deg(jd));
    (eq.ra_deg, eq.dec_deg)
}

/// Hour angle of the Sun in degrees (-180, 180], west positive.
fn hour_angle_deg(jd: f64, longitude_deg: f64, ra_deg: f64) -> f64 {
    normalize_to_pm180(local_sidereal_time_deg(jd, longitude_deg) - ra_deg)
}

fn cos_event_hour_angle(target_alt_deg: f64, phi: f64, dec_deg: f64) -> f64 {
    let h0 = target_alt_deg.to_radians();
    let dec = dec_deg.to_radians();
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Julian Date (UT) of the Sun's upper transit nearest `jd_noon`.
pub fn solar_transit_jd(location: &GeoLocation, jd_noon: f64) -> f64 {
    let mut jd = jd_noon;
    for _ in 0..CORRECTION_PASSES {
        let (ra, _) = sun_ra_dec_deg(jd);
        jd -= hour_angle_deg(jd, location.longitude_deg, ra) / SIDEREAL_DEG_PER_DAY;
    }
    jd
}

fn polar_outcome(cos_h: f64) -> Option<RiseSetResult> {
    if cos_h > 1.0 {
        Some(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Some(RiseSetResult::NeverSets)
    } else {
        None
    }
}

fn rise_set_from_transit(
    location: &GeoLocation,
    event: RiseSetEvent,
    transit_jd: f64,
    config: &RiseSetConfig,
) -> RiseSetResult {
    let phi = location.latitude_rad();
    let target_alt = config.target_altitude_deg(event, location.altitude_m);
    let sign = if event.is_rising() { -1.0 } else { 1.0 };

    let (_, dec_noon) = sun_ra_dec_deg(transit_jd);
    let cos_h = cos_event_hour_angle(target_alt, phi, dec_noon);
    if let Some(polar) = polar_outcome(cos_h) {
        debug!("{}: {polar:?} at lat {:.4}", event.name(), location.latitude_deg);
        return polar;
    }

    let mut jd = transit_jd + sign * cos_h.acos().to_degrees() / SIDEREAL_DEG_PER_DAY;
    for _ in 0..CORRECTION_PASSES {
        let (ra, dec) = sun_ra_dec_deg(jd);
        let cos_h = cos_event_hour_angle(target_alt, phi, dec);
        if let Some(polar) = polar_outcome(cos_h) {
            debug!("{}: {polar:?} during refinement", event.name());
            return polar;
        }
        let target_ha = sign * cos_h.acos().to_degrees();
        let actual_ha = hour_angle_deg(jd, location.longitude_deg, ra);
        jd += normalize_to_pm180(target_ha - actual_ha) / SIDEREAL_DEG_PER_DAY;
    }

    RiseSetResult::Event { jd, event }
}

/// Compute one rise/set event for the solar day around `jd_noon`.
///
/// `jd_noon` is an approximate local noon in UT, see
/// [`approximate_local_noon_jd`].
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_noon: f64,
    config: &RiseSetConfig,
) -> RiseSetResult {
    let transit = solar_transit_jd(location, jd_noon);
    rise_set_from_transit(location, event, transit, config)
}

/// All eight events, dawn to dusk. Each is computed independently, so a
/// high-latitude summer night can report twilight as `NeverSets` while
/// sunrise and sunset still occur.
pub fn compute_all_events(
    location: &GeoLocation,
    jd_noon: f64,
    config: &RiseSetConfig,
) -> Vec<RiseSetResult> {
    let transit = solar_transit_jd(location, jd_noon);
    ALL_EVENTS
        .iter()
        .map(|&event| rise_set_from_transit(location, event, transit, config))
        .collect()
}

/// Seed for the solar day of civil `date` in `tz`: 12:00 local time.
///
/// The transit nearest civil noon belongs to `date` even where the zone
/// offset is far from `longitude / 15` (Pacific/Kiritimati, Samoa). When
/// 12:00 does not exist locally, the longitude estimate is used instead.
pub fn local_noon_for_date(date: NaiveDate, location: &GeoLocation, tz: Tz) -> f64 {
    match Instant::from_civil(date.year(), date.month(), date.day(), 12, 0, 0, tz) {
        Ok(noon) => noon.julian_day(),
        Err(_) => {
            let jd0 = calendar_to_jd(date.year(), date.month(), f64::from(date.day()));
            approximate_local_noon_jd(jd0, location.longitude_deg)
        }
    }
}

/// Sunrise, solar noon and sunset for a civil date, shown in `tz`.
///
/// Never fails: a date without sunrise or sunset is reported as
/// [`SolarDayWindow::PolarDay`] or [`SolarDayWindow::PolarNight`].
pub fn solar_day_window(
    date: NaiveDate,
    location: &GeoLocation,
    tz: Tz,
    config: &RiseSetConfig,
) -> SolarDayWindow {
    let transit = solar_transit_jd(location, local_noon_for_date(date, location, tz));
    let solar_noon = Instant::from_julian_day(transit, tz);

    let rise = rise_set_from_transit(location, RiseSetEvent::Sunrise, transit, config);
    let set = rise_set_from_transit(location, RiseSetEvent::Sunset, transit, config);

    match (rise, set) {
        (RiseSetResult::Event { jd: r, .. }, RiseSetResult::Event { jd: s, .. }) => {
            SolarDayWindow::Regular {
                sunrise: Instant::from_julian_day(r, tz),
                solar_noon,
                sunset: Instant::from_julian_day(s, tz),
            }
        }
        (RiseSetResult::NeverSets, _) | (_, RiseSetResult::NeverSets) => {
            SolarDayWindow::PolarDay { solar_noon }
        }
        _ => SolarDayWindow::PolarNight { solar_noon },
    }
}
