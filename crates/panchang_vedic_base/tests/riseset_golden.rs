//! Sunrise/sunset against published almanac times.
//!
//! Reference times are US Naval Observatory / timeanddate.com values,
//! rounded to the minute. The closed-form Sun model and the standard
//! -50′ horizon keep us within a couple of minutes at mid-latitudes.

use chrono::{NaiveDate, Timelike};
use panchang_time::{Instant, Tz};
use panchang_vedic_base::{GeoLocation, RiseSetConfig, SolarDayWindow, solar_day_window};

const TOLERANCE_MIN: f64 = 5.0;

fn utc_minutes(i: &Instant) -> f64 {
    let t = i.utc().time();
    f64::from(t.num_seconds_from_midnight()) / 60.0
}

fn check(lat: f64, lon: f64, date: (i32, u32, u32), rise: (u32, u32), set: (u32, u32)) {
    let loc = GeoLocation::new(lat, lon, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    let w = solar_day_window(date, &loc, Tz::UTC, &RiseSetConfig::default());
    let SolarDayWindow::Regular { sunrise, solar_noon, sunset } = w else {
        panic!("expected a regular day at lat {lat}, got {w:?}");
    };
    assert!(sunrise < solar_noon && solar_noon < sunset);

    let want_rise = f64::from(rise.0 * 60 + rise.1);
    let want_set = f64::from(set.0 * 60 + set.1);
    let got_rise = utc_minutes(&sunrise);
    let got_set = utc_minutes(&sunset);
    assert!((got_rise - want_rise).abs() < TOLERANCE_MIN, "sunrise {got_rise} vs {want_rise}");
    assert!((got_set - want_set).abs() < TOLERANCE_MIN, "sunset {got_set} vs {want_set}");
}

#[test]
fn london_2020_01_15() {
    check(51.5074, -0.1278, (2020, 1, 15), (7, 59), (16, 20));
}

#[test]
fn new_york_2020_01_15() {
    check(40.7128, -74.0060, (2020, 1, 15), (12, 18), (21, 52));
}

#[test]
fn mumbai_2020_01_15() {
    check(19.0760, 72.8777, (2020, 1, 15), (1, 44), (12, 51));
}

#[test]
fn new_delhi_2024_equinox() {
    check(28.6139, 77.2090, (2024, 3, 20), (0, 55), (13, 3));
}

#[test]
fn window_shown_in_requested_zone() {
    let loc = GeoLocation::new(13.0827, 80.2707, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
    let w = solar_day_window(date, &loc, Tz::Asia__Kolkata, &RiseSetConfig::default());
    let sunrise = w.sunrise().unwrap();
    assert_eq!(sunrise.timezone(), Tz::Asia__Kolkata);
    assert_eq!(sunrise.date(), date);
    assert!(sunrise.to_rfc3339().starts_with("2024-01-11T06:3"), "{sunrise}");
}

#[test]
fn tromso_midsummer_is_polar_day() {
    let loc = GeoLocation::new(71.0, 25.0, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let w = solar_day_window(date, &loc, Tz::UTC, &RiseSetConfig::default());
    assert!(matches!(w, SolarDayWindow::PolarDay { .. }), "{w:?}");
    assert!(w.sunrise().is_none());
    assert_eq!(w.day_length_days(), 1.0);
}

#[test]
fn antarctic_midwinter_is_polar_night() {
    let loc = GeoLocation::new(-75.0, 0.0, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let w = solar_day_window(date, &loc, Tz::UTC, &RiseSetConfig::default());
    assert!(matches!(w, SolarDayWindow::PolarNight { .. }), "{w:?}");
}

#[test]
fn kiritimati_window_stays_on_its_civil_date() {
    // UTC+14 at 157°W: local clocks run almost a day ahead of the Sun
    let loc = GeoLocation::new(1.87, -157.4, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let w = solar_day_window(date, &loc, Tz::Pacific__Kiritimati, &RiseSetConfig::default());
    let SolarDayWindow::Regular { sunrise, solar_noon, sunset } = w else {
        panic!("expected a regular day, got {w:?}");
    };
    for event in [sunrise, solar_noon, sunset] {
        assert_eq!(event.date(), date, "{event}");
    }
    assert!(sunrise.to_rfc3339().starts_with("2024-03-01T06:"), "{sunrise}");
    assert!(sunset.to_rfc3339().starts_with("2024-03-01T18:"), "{sunset}");
}

#[test]
fn samoa_window_stays_on_its_civil_date() {
    let loc = GeoLocation::new(-13.83, -171.76, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
    let w = solar_day_window(date, &loc, Tz::Pacific__Apia, &RiseSetConfig::default());
    assert_eq!(w.sunrise().unwrap().date(), date);
    assert_eq!(w.sunset().unwrap().date(), date);
}
