//! Reference events with published values.

use panchang_search::ElementKind;
use panchang_time::{Instant, Tz};
use panchang_vedic_base::GeoLocation;

use crate::case::{Expectation, ValidationCase};

const MEEUS: &str = "Meeus, Astronomical Algorithms (2nd ed.)";
const USNO: &str = "US Naval Observatory";
const TIMEANDDATE: &str = "timeanddate.com";
const DRIK: &str = "Drik Panchang, Chennai";

/// Minutes of tolerance on published rise/set times.
const RISE_SET_TOLERANCE_MIN: f64 = 5.0;

/// Degrees of tolerance on new/full moon elongation.
const SYZYGY_TOLERANCE_DEG: f64 = 0.25;

fn place(lat: f64, lon: f64, tz: Tz) -> GeoLocation {
    GeoLocation {
        latitude_deg: lat,
        longitude_deg: lon,
        altitude_m: 0.0,
        timezone: Some(tz),
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, tz: Tz) -> Option<Instant> {
    Instant::from_civil(y, m, d, h, min, 0, tz).ok()
}

type Row = (
    &'static str,
    &'static str,
    Option<Instant>,
    GeoLocation,
    Expectation,
    f64,
);

/// The built-in reference table.
pub fn historical_cases() -> Vec<ValidationCase> {
    let greenwich = place(51.4769, 0.0, Tz::UTC);
    let london = place(51.5074, -0.1278, Tz::Europe__London);
    let new_york = place(40.7128, -74.0060, Tz::America__New_York);
    let mumbai = place(19.0760, 72.8777, Tz::Asia__Kolkata);
    let delhi = place(28.6139, 77.2090, Tz::Asia__Kolkata);
    let chennai = place(13.0827, 80.2707, Tz::Asia__Kolkata);
    let utc = Tz::UTC;
    let ist = Tz::Asia__Kolkata;

    let rows: [Row; 22] = [
        (
            "Sun, 1992-10-13 0h TD",
            MEEUS,
            Some(Instant::from_julian_day(2_448_908.5, utc)),
            greenwich,
            Expectation::SunLongitude { deg: 199.908_95 },
            0.01,
        ),
        (
            "Moon, 1992-04-12 0h TD",
            MEEUS,
            Some(Instant::from_julian_day(2_448_724.5, utc)),
            greenwich,
            Expectation::MoonLongitude { deg: 133.167_265 },
            0.05,
        ),
        (
            "March equinox 2024",
            USNO,
            at(2024, 3, 20, 3, 6, utc),
            greenwich,
            Expectation::SunLongitude { deg: 0.0 },
            0.02,
        ),
        (
            "June solstice 2024",
            USNO,
            at(2024, 6, 20, 20, 51, utc),
            greenwich,
            Expectation::SunLongitude { deg: 90.0 },
            0.02,
        ),
        (
            "New moon 2024-01-11",
            USNO,
            at(2024, 1, 11, 11, 57, utc),
            greenwich,
            Expectation::Elongation { deg: 0.0 },
            SYZYGY_TOLERANCE_DEG,
        ),
        (
            "Full moon 2024-01-25",
            USNO,
            at(2024, 1, 25, 17, 54, utc),
            greenwich,
            Expectation::Elongation { deg: 180.0 },
            SYZYGY_TOLERANCE_DEG,
        ),
        (
            "New moon 2024-04-08 (total solar eclipse)",
            USNO,
            at(2024, 4, 8, 18, 21, utc),
            greenwich,
            Expectation::Elongation { deg: 0.0 },
            SYZYGY_TOLERANCE_DEG,
        ),
        (
            "London sunrise 2020-01-15",
            TIMEANDDATE,
            at(2020, 1, 15, 8, 0, Tz::Europe__London),
            london,
            Expectation::Sunrise,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "London sunset 2020-01-15",
            TIMEANDDATE,
            at(2020, 1, 15, 16, 20, Tz::Europe__London),
            london,
            Expectation::Sunset,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "New York sunrise 2020-01-15",
            TIMEANDDATE,
            at(2020, 1, 15, 7, 18, Tz::America__New_York),
            new_york,
            Expectation::Sunrise,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "New York sunset 2020-01-15",
            TIMEANDDATE,
            at(2020, 1, 15, 16, 52, Tz::America__New_York),
            new_york,
            Expectation::Sunset,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "Mumbai sunrise 2020-01-15",
            TIMEANDDATE,
            at(2020, 1, 15, 7, 14, ist),
            mumbai,
            Expectation::Sunrise,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "Mumbai sunset 2020-01-15",
            TIMEANDDATE,
            at(2020, 1, 15, 18, 21, ist),
            mumbai,
            Expectation::Sunset,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "New Delhi sunrise 2024-03-20",
            TIMEANDDATE,
            at(2024, 3, 20, 6, 25, ist),
            delhi,
            Expectation::Sunrise,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "New Delhi sunset 2024-03-20",
            TIMEANDDATE,
            at(2024, 3, 20, 18, 33, ist),
            delhi,
            Expectation::Sunset,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "Chennai sunrise 2024-01-11",
            DRIK,
            at(2024, 1, 11, 6, 34, ist),
            chennai,
            Expectation::Sunrise,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "Chennai sunset 2024-01-11",
            DRIK,
            at(2024, 1, 11, 17, 59, ist),
            chennai,
            Expectation::Sunset,
            RISE_SET_TOLERANCE_MIN,
        ),
        (
            "Chennai tithi 2024-01-11 06:30 (Amavasya)",
            DRIK,
            at(2024, 1, 11, 6, 30, ist),
            chennai,
            Expectation::Element {
                kind: ElementKind::Tithi,
                index: 30,
            },
            0.0,
        ),
        (
            "Chennai nakshatra 2024-01-11 06:30 (Purva Ashadha)",
            DRIK,
            at(2024, 1, 11, 6, 30, ist),
            chennai,
            Expectation::Element {
                kind: ElementKind::Nakshatra,
                index: 20,
            },
            0.0,
        ),
        (
            "Chennai tithi 2024-01-25 18:00 (Purnima)",
            DRIK,
            at(2024, 1, 25, 18, 0, ist),
            chennai,
            Expectation::Element {
                kind: ElementKind::Tithi,
                index: 15,
            },
            0.0,
        ),
        (
            "Chennai nakshatra 2024-01-25 18:00 (Pushya)",
            DRIK,
            at(2024, 1, 25, 18, 0, ist),
            chennai,
            Expectation::Element {
                kind: ElementKind::Nakshatra,
                index: 8,
            },
            0.0,
        ),
        (
            "Chennai karana 2024-01-11 06:30 (Chatushpada)",
            DRIK,
            at(2024, 1, 11, 6, 30, ist),
            chennai,
            Expectation::Element {
                kind: ElementKind::Karana,
                index: 59,
            },
            0.0,
        ),
    ];

    rows.into_iter()
        .filter_map(|(name, source, instant, location, expectation, tolerance)| {
            instant.map(|i| ValidationCase::new(name, source, i, location, expectation, tolerance))
        })
        .collect()
}
