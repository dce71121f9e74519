//! Moonrise, moonset, lunar age and the element attribute tables on real
//! dates.
//!
//! January 2024 conjunction 11th 11:59 UTC, first quarter 18th 03:54 UTC,
//! full moon 25th 17:55 UTC.

use chrono::{NaiveDate, Timelike};
use panchang_search::{
    PanchangOptions, SearchContext, compute_panchangam, day_panchang, lunar_cycle_at,
    moon_rise_set,
};
use panchang_time::{Instant, Tz};
use panchang_vedic_base::{
    AyanamshaSystem, GeoLocation, Karana, KaranaType, LunarPhase, NakshatraLord, RiseSetConfig,
    YogaQuality,
};

fn chennai() -> GeoLocation {
    GeoLocation::new(13.0827, 80.2707, 0.0)
        .unwrap()
        .with_timezone_name("Asia/Kolkata")
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ist(y: i32, m: u32, d: u32, h: u32, min: u32) -> Instant {
    Instant::from_civil(y, m, d, h, min, 0, Tz::Asia__Kolkata).unwrap()
}

fn lahiri() -> PanchangOptions {
    PanchangOptions::new(AyanamshaSystem::Lahiri)
}

/// Minutes between an instant and a local wall-clock time on its date.
fn minutes_off(instant: &Instant, h: u32, min: f64) -> f64 {
    let t = instant.datetime();
    f64::from(t.hour()) * 60.0 + f64::from(t.minute()) + f64::from(t.second()) / 60.0
        - (f64::from(h) * 60.0 + min)
}

#[test]
fn full_moon_rises_at_dusk() {
    let options = lahiri();
    let ctx = SearchContext::new(&options, Tz::Asia__Kolkata);
    let moon = moon_rise_set(date(2024, 1, 25), &chennai(), &RiseSetConfig::default(), &ctx);
    assert!(moon.up_at_start);
    assert!(moon.is_visible());
    let rise = moon.moonrise.unwrap();
    let set = moon.moonset.unwrap();
    assert_eq!(rise.date(), date(2024, 1, 25));
    assert!(minutes_off(&rise, 17, 51.5).abs() < 3.0, "moonrise {rise}");
    assert!(minutes_off(&set, 6, 17.1).abs() < 3.0, "moonset {set}");
}

#[test]
fn new_moon_rises_with_the_sun() {
    let options = lahiri();
    let ctx = SearchContext::new(&options, Tz::Asia__Kolkata);
    let moon = moon_rise_set(date(2024, 1, 11), &chennai(), &RiseSetConfig::default(), &ctx);
    assert!(!moon.up_at_start);
    let rise = moon.moonrise.unwrap();
    let set = moon.moonset.unwrap();
    assert!(minutes_off(&rise, 6, 20.4).abs() < 3.0, "moonrise {rise}");
    assert!(minutes_off(&set, 17, 53.4).abs() < 3.0, "moonset {set}");
}

#[test]
fn first_quarter_day_has_no_moonset() {
    // sets again at 00:46 on the 19th
    let options = lahiri();
    let ctx = SearchContext::new(&options, Tz::Asia__Kolkata);
    let moon = moon_rise_set(date(2024, 1, 18), &chennai(), &RiseSetConfig::default(), &ctx);
    assert!(!moon.up_at_start);
    assert_eq!(moon.moonset, None);
    let rise = moon.moonrise.unwrap();
    assert!(minutes_off(&rise, 11, 56.2).abs() < 3.0, "moonrise {rise}");
    assert!(moon.is_visible());
}

#[test]
fn arctic_summer_full_moon_stays_down() {
    let tromso = GeoLocation::new(69.65, 18.96, 0.0)
        .unwrap()
        .with_timezone_name("Europe/Oslo")
        .unwrap();
    let options = lahiri();
    let ctx = SearchContext::new(&options, Tz::Europe__Oslo);
    let moon = moon_rise_set(date(2024, 6, 21), &tromso, &RiseSetConfig::default(), &ctx);
    assert_eq!(moon.moonrise, None);
    assert_eq!(moon.moonset, None);
    assert!(!moon.is_visible());
}

#[test]
fn age_and_next_full_moon() {
    let options = lahiri();
    let ctx = SearchContext::new(&options, Tz::UTC);
    let cycle = lunar_cycle_at(ist(2024, 1, 21, 12, 0).julian_day(), &ctx);
    assert!((cycle.age_days - 9.77).abs() < 0.02, "age = {}", cycle.age_days);

    let new_moon = cycle.previous_new_moon.datetime();
    assert_eq!(new_moon.date_naive(), date(2024, 1, 11));
    let minutes = i64::from(new_moon.hour() * 60 + new_moon.minute());
    assert!((minutes - 719).abs() <= 3, "{new_moon}");

    assert_eq!(cycle.next_phase.phase, LunarPhase::FullMoon);
    let full = cycle.next_phase.at.datetime();
    assert_eq!(full.date_naive(), date(2024, 1, 25));
    let minutes = i64::from(full.hour() * 60 + full.minute());
    assert!((minutes - 1075).abs() <= 3, "{full}");
}

#[test]
fn next_phase_walks_the_quarters() {
    let options = lahiri();
    let ctx = SearchContext::new(&options, Tz::UTC);
    let mut jd = ist(2024, 1, 12, 0, 0).julian_day();
    let mut seen = Vec::new();
    for _ in 0..4 {
        let next = lunar_cycle_at(jd, &ctx).next_phase;
        assert!(next.at.julian_day() > jd);
        seen.push(next.phase);
        jd = next.at.julian_day() + 0.01;
    }
    assert_eq!(
        seen,
        [
            LunarPhase::FirstQuarter,
            LunarPhase::FullMoon,
            LunarPhase::LastQuarter,
            LunarPhase::NewMoon
        ]
    );
    // the cycle closes on the February conjunction
    let february = Instant::from_julian_day(jd, Tz::UTC);
    assert_eq!(february.date(), date(2024, 2, 9));
}

#[test]
fn panchang_carries_attributes() {
    let info = compute_panchangam(&ist(2024, 1, 25, 18, 0), &chennai(), &lahiri(), None);
    assert_eq!(info.nakshatra.name, "Pushya");
    assert_eq!(info.nakshatra_details.lord, NakshatraLord::Shani);
    assert_eq!(info.nakshatra_details.deity, "Brihaspati");
    assert_eq!(info.yoga.name, "Priti");
    assert_eq!(info.yoga_quality, YogaQuality::Auspicious);
    // elongation 177.5°: 30th karana of the month
    assert_eq!(info.karana.index, 30);
    assert_eq!(info.karana_details.karana, Karana::Bava);
    assert_eq!(info.karana_details.karana_type, KaranaType::Movable);
    assert!(!info.karana_details.is_vishti);
    assert_eq!(info.lunar_cycle.next_phase.phase, LunarPhase::FullMoon);
    assert!(info.moon.moonrise.is_some());
}

#[test]
fn morning_of_full_moon_is_vishti() {
    // elongation 171.8° at 06:00
    let info = compute_panchangam(&ist(2024, 1, 25, 6, 0), &chennai(), &lahiri(), None);
    assert_eq!(info.karana.index, 29);
    assert!(info.karana_details.is_vishti);
    assert_eq!(info.karana_details.karana, Karana::Vishti);
}

#[test]
fn amavasya_closes_with_fixed_karana() {
    // elongation 353.8° at 06:30
    let info = compute_panchangam(&ist(2024, 1, 11, 6, 30), &chennai(), &lahiri(), None);
    assert_eq!(info.karana_details.karana, Karana::Chatushpada);
    assert_eq!(info.karana_details.karana_type, KaranaType::Fixed);
    assert!(info.lunar_cycle.age_days > 28.5, "age = {}", info.lunar_cycle.age_days);
    assert_eq!(info.lunar_cycle.next_phase.phase, LunarPhase::NewMoon);
}

#[test]
fn day_listing_includes_the_moon() {
    let day = day_panchang(date(2024, 1, 25), &chennai(), &lahiri(), None);
    assert_eq!(day.moon.date, date(2024, 1, 25));
    let rise = day.moon.moonrise.unwrap();
    assert!(minutes_off(&rise, 17, 51.5).abs() < 3.0, "moonrise {rise}");
}
