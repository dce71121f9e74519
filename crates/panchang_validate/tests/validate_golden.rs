//! The built-in reference table passes under Lahiri.

use panchang_search::ElementKind;
use panchang_time::{Instant, Tz};
use panchang_validate::{
    DeviationUnit, Expectation, ValidationCase, ValidationSuite, historical_cases, validate,
};
use panchang_vedic_base::{AyanamshaSystem, GeoLocation};

#[test]
fn historical_table_passes() {
    let suite = ValidationSuite::run(&historical_cases(), AyanamshaSystem::Lahiri);
    let failures: Vec<_> = suite.failures().map(|r| r.name.clone()).collect();
    assert!(suite.all_passed(), "failed: {failures:?}");
    assert_eq!(suite.success_rate, 100.0);
}

#[test]
fn rise_set_deviation_in_minutes() {
    let results = validate(&historical_cases(), AyanamshaSystem::Lahiri);
    for r in results.iter().filter(|r| r.name.contains("sunrise")) {
        assert_eq!(r.unit, DeviationUnit::Minutes);
        assert!(r.deviation < 5.0, "{}: {}", r.name, r.deviation);
    }
}

#[test]
fn wrong_element_reports_arc_distance() {
    let chennai = GeoLocation::new(13.0827, 80.2707, 0.0)
        .unwrap()
        .with_timezone(Tz::Asia__Kolkata);
    let instant = Instant::from_civil(2024, 1, 11, 6, 30, 0, Tz::Asia__Kolkata).unwrap();
    // elongation is ~353.5°, inside tithi 30; tithi 29 spans 336..348
    let case = ValidationCase::new(
        "off by one",
        "test",
        instant,
        chennai,
        Expectation::Element {
            kind: ElementKind::Tithi,
            index: 29,
        },
        0.0,
    );
    let r = &validate(&[case], AyanamshaSystem::Lahiri)[0];
    assert!(!r.passed);
    assert!((4.0..7.0).contains(&r.deviation), "deviation {}", r.deviation);
    assert!(r.computed.contains("Amavasya"));
}

#[test]
fn json_export_is_parseable() {
    let suite = ValidationSuite::run(&historical_cases()[..3], AyanamshaSystem::Lahiri)
        .with_generated_at(Instant::from_julian_day(2_460_000.5, Tz::UTC));
    let json: serde_json::Value = serde_json::from_str(&suite.to_json().unwrap()).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["ayanamsha"], "lahiri");
    assert_eq!(json["results"][0]["unit"], "degrees");
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
    assert!(json["generated_at"].as_str().unwrap().starts_with("2023-02-25T00:00:00"));
}
