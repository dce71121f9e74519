//! Element search, day listings and the combined panchang on real dates.
//!
//! Chennai (13.0827 N, 80.2707 E, Asia/Kolkata) fixtures:
//! - 2024-01-11 06:30 IST: Amavasya, before the 06:34 sunrise
//! - 2024-01-25 18:00 IST: Purnima in Pushya
//! - 2024-03-12: tithi 3 starts after sunrise and ends before the next one
//! - 2024-03-22: tithi 13 is active at both sunrises

use std::cell::RefCell;

use chrono::{NaiveDate, Timelike};
use panchang_ephem::Body;
use panchang_frames::Projection;
use panchang_search::{
    ALL_ELEMENT_KINDS, ElementKind, PanchangOptions, SearchContext, TraceEvent, TraceHook,
    compute_panchangam, compute_sky_positions, day_panchang, elements_between,
};
use panchang_time::{Instant, Tz};
use panchang_vedic_base::{AyanamshaSystem, GeoLocation, Hora, Paksha, Vaar};

fn chennai() -> GeoLocation {
    GeoLocation::new(13.0827, 80.2707, 0.0)
        .unwrap()
        .with_timezone_name("Asia/Kolkata")
        .unwrap()
}

fn ist(y: i32, m: u32, d: u32, h: u32, min: u32) -> Instant {
    Instant::from_civil(y, m, d, h, min, 0, Tz::Asia__Kolkata).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn lahiri() -> PanchangOptions {
    PanchangOptions::new(AyanamshaSystem::Lahiri)
}

#[test]
fn amavasya_before_sunrise() {
    let info = compute_panchangam(&ist(2024, 1, 11, 6, 30), &chennai(), &lahiri(), None);

    assert_eq!(info.tithi.index, 30);
    assert_eq!(info.tithi.name, "Amavasya");
    assert_eq!(info.tithi_details.paksha, Paksha::Krishna);
    assert_eq!(info.nakshatra.index, 20);
    assert_eq!(info.nakshatra.name, "Purva Ashadha");

    // new moon 2024-01-11 11:57 UTC
    let new_moon = Instant::from_civil(2024, 1, 11, 11, 57, 0, Tz::UTC).unwrap();
    let off_min = (info.tithi.end.julian_day() - new_moon.julian_day()) * 1440.0;
    assert!(off_min.abs() < 15.0, "tithi end off by {off_min} min");
    // elongation 353.8° at 06:30, a little under half of the last 12° arc
    let pct = info.tithi.percent_complete;
    assert!((45.0..50.0).contains(&pct), "percent = {pct}");
    let by_arc = (info.lunar_phase.elongation_deg - 348.0) / 12.0 * 100.0;
    assert!((pct - by_arc).abs() < 1e-6, "percent {pct} vs arc {by_arc}");

    // 06:30 precedes the 06:34 sunrise, so the Vedic day is still Wednesday
    assert_eq!(info.vaar.vaar, Vaar::Budhvaar);
    assert_eq!(info.hora.number, 24);
    assert_eq!(info.hora.hora, Hora::Shani);
    assert!(info.vaar.start < info.instant && info.instant < info.vaar.end);
}

#[test]
fn purnima_in_pushya() {
    let info = compute_panchangam(&ist(2024, 1, 25, 18, 0), &chennai(), &lahiri(), None);
    assert_eq!(info.tithi.index, 15);
    assert_eq!(info.nakshatra.name, "Pushya");
    assert_eq!(info.vaar.vaar, Vaar::Guruvaar);
    assert!(info.lunar_phase.illumination > 0.99);
    for e in [&info.tithi, &info.nakshatra, &info.yoga, &info.karana] {
        assert!(e.contains(&info.instant), "{:?}", e.kind);
        assert_eq!(e.start.timezone(), Tz::Asia__Kolkata);
    }
}

#[test]
fn thursday_rahu_kalam_in_afternoon() {
    let info = compute_panchangam(&ist(2024, 1, 11, 12, 0), &chennai(), &lahiri(), None);
    let muhurta = info.muhurta.expect("regular day");
    // 6th eighth of 06:34 .. 17:59
    let start = muhurta.rahu_kalam.start.datetime();
    assert_eq!(start.hour(), 13);
    assert!((35..50).contains(&start.minute()), "{start}");
    assert!(muhurta.abhijit.contains(&info.solar_day_window.solar_noon()));
}

#[test]
fn repeated_input_is_bit_identical() {
    let a = compute_panchangam(&ist(2024, 5, 2, 9, 15), &chennai(), &lahiri(), None);
    let b = compute_panchangam(&ist(2024, 5, 2, 9, 15), &chennai(), &lahiri(), None);
    assert_eq!(a, b);
}

#[test]
fn tithis_follow_each_other_for_a_month() {
    let opts = lahiri();
    let ctx = SearchContext::new(&opts, Tz::UTC);
    let start = ist(2024, 2, 1, 0, 0).julian_day();
    let list = elements_between(ElementKind::Tithi, start, start + 30.0, &ctx);
    assert!((30..=32).contains(&list.len()), "{} tithis", list.len());
    for pair in list.windows(2) {
        assert_eq!(pair[1].index, pair[0].index % 30 + 1);
        assert!((pair[1].start.julian_day() - pair[0].end.julian_day()).abs() < 1e-6);
        let hours = pair[1].duration_hours();
        assert!((19.0..27.0).contains(&hours), "tithi {} lasts {hours} h", pair[1].index);
    }
}

#[test]
fn skipped_tithi_is_reported() {
    let day = day_panchang(date(2024, 3, 12), &chennai(), &lahiri(), None);
    assert_eq!(day.tithi.element.index, 2);
    assert_eq!(day.tithi.skipped.len(), 1);
    assert_eq!(day.tithi.skipped[0].index, 3);
    assert!(day.tithi.skipped[0].start > day.anchor);
    assert!(day.tithi.skipped[0].end < day.next_anchor);
    assert!(!day.tithi.repeats_next_day);

    let next = day_panchang(date(2024, 3, 13), &chennai(), &lahiri(), None);
    assert_eq!(next.tithi.element.index, 4);
    assert!(!next.tithi.repeated_from_previous);
}

#[test]
fn repeated_tithi_is_flagged_on_both_days() {
    let day = day_panchang(date(2024, 3, 22), &chennai(), &lahiri(), None);
    assert_eq!(day.tithi.element.index, 13);
    assert!(day.tithi.repeats_next_day);
    assert!(day.tithi.skipped.is_empty());

    let next = day_panchang(date(2024, 3, 23), &chennai(), &lahiri(), None);
    assert_eq!(next.tithi.element.index, 13);
    assert!(next.tithi.repeated_from_previous);
    let drift = next.tithi.element.start.julian_day() - day.tithi.element.start.julian_day();
    assert!(drift.abs() < 1e-6, "start drift {drift} days");
}

#[test]
fn consecutive_days_chain() {
    let loc = chennai();
    let opts = lahiri();
    let days: Vec<_> = (0..8)
        .map(|i| day_panchang(date(2024, 3, 10 + i), &loc, &opts, None))
        .collect();
    for pair in days.windows(2) {
        let (today, tomorrow) = (&pair[0], &pair[1]);
        assert_eq!(today.next_anchor, tomorrow.anchor);
        assert!(today.anchor.datetime().hour() == 6);
        for kind in ALL_ELEMENT_KINDS {
            let a = today.listing(kind);
            let b = tomorrow.listing(kind);
            assert_eq!(a.repeats_next_day, b.repeated_from_previous, "{kind:?}");
            if a.repeats_next_day {
                assert_eq!(a.element.index, b.element.index);
            } else {
                let steps = a.skipped.len() as u32 + 1;
                let expect = (u32::from(a.element.index) - 1 + steps) % u32::from(kind.count()) + 1;
                assert_eq!(u32::from(b.element.index), expect, "{kind:?} on {}", tomorrow.date);
            }
        }
    }
}

#[test]
fn polar_day_anchors_at_midnight() {
    let tromso = GeoLocation::new(69.65, 18.96, 0.0)
        .unwrap()
        .with_timezone_name("Europe/Oslo")
        .unwrap();
    let day = day_panchang(date(2024, 6, 21), &tromso, &lahiri(), None);
    assert!(day.solar_day_window.is_polar());
    assert!(day.anchor.to_rfc3339().starts_with("2024-06-21T00:00:00+02:00"));
    assert!(day.next_anchor.to_rfc3339().starts_with("2024-06-22T00:00:00+02:00"));
    assert_eq!(day.vaar, Vaar::Shukravaar);
}

#[test]
fn date_line_zone_lists_its_own_day() {
    let kiritimati = GeoLocation::new(1.87, -157.4, 0.0)
        .unwrap()
        .with_timezone_name("Pacific/Kiritimati")
        .unwrap();
    let day = day_panchang(date(2024, 3, 1), &kiritimati, &lahiri(), None);
    assert_eq!(day.anchor.date(), date(2024, 3, 1), "{}", day.anchor);
    assert_eq!(day.next_anchor.date(), date(2024, 3, 2), "{}", day.next_anchor);
    assert_eq!(day.anchor.datetime().hour(), 6);
    assert_eq!(day.vaar, Vaar::Shukravaar);
}

#[derive(Default)]
struct Collector {
    anchors: RefCell<Vec<bool>>,
    boundaries: RefCell<usize>,
}

impl TraceHook for Collector {
    fn on_event(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::DayAnchor { polar, .. } => self.anchors.borrow_mut().push(*polar),
            TraceEvent::Boundary { .. } => *self.boundaries.borrow_mut() += 1,
            _ => {}
        }
    }
}

#[test]
fn trace_hook_sees_anchors_and_boundaries() {
    let hook = Collector::default();
    day_panchang(date(2024, 1, 11), &chennai(), &lahiri(), Some(&hook));
    assert_eq!(*hook.anchors.borrow(), vec![false, false, false]);
    // start and end of at least one element per kind
    assert!(*hook.boundaries.borrow() >= 8);
}

#[test]
fn sun_and_moon_on_screen() {
    let loc = chennai();
    let noon = compute_sky_positions(&ist(2024, 1, 11, 12, 30), &loc, Projection::Stereographic);
    assert_eq!(noon[0].body, Body::Sun);
    assert!(noon[0].horizontal.altitude_deg > 50.0);
    assert!(noon[0].screen.is_visible());

    // full moon near local midnight: Moon high, Sun below the horizon
    let night = compute_sky_positions(&ist(2024, 1, 26, 0, 0), &loc, Projection::Stereographic);
    assert!(!night[0].screen.is_visible());
    assert_eq!(night[1].body, Body::Moon);
    assert!(night[1].horizontal.altitude_deg > 60.0);
    assert!(night[1].screen.is_visible());
    let (ra, dec) = (night[1].equatorial.ra_deg, night[1].equatorial.dec_deg);
    assert!((0.0..360.0).contains(&ra) && dec.abs() < 30.0);
}

#[test]
fn panchang_serializes_to_json() {
    let info = compute_panchangam(&ist(2024, 1, 25, 18, 0), &chennai(), &lahiri(), None);
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["tithi"]["kind"], "tithi");
    assert_eq!(json["tithi"]["index"], 15);
    assert!(json["instant"].as_str().unwrap().starts_with("2024-01-25T18:00:00+05:30"));
}
