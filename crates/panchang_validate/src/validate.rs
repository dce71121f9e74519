//! Comparator, suite summary, text report and JSON export.

use std::fmt::Write as _;

use log::{debug, info, warn};
use serde::Serialize;

use panchang_ephem::{moon_longitude, sun_longitude};
use panchang_search::{ElementKind, element_angle, elongation_at};
use panchang_time::{Instant, normalize_360, normalize_to_pm180};
use panchang_vedic_base::{AyanamshaSystem, RiseSetConfig, solar_day_window};

use crate::case::{DeviationUnit, Expectation, ValidationCase};

/// Outcome of one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub name: String,
    pub source: String,
    pub expected: String,
    pub computed: String,
    /// Absolute deviation; infinite when nothing comparable was computed.
    pub deviation: f64,
    pub tolerance: f64,
    pub unit: DeviationUnit,
    pub passed: bool,
}

/// Angular distance from `angle_deg` to the arc `[start, start + span)`,
/// zero inside the arc.
fn distance_to_arc(angle_deg: f64, start_deg: f64, span_deg: f64) -> f64 {
    let offset = normalize_360(angle_deg - start_deg);
    if offset < span_deg {
        0.0
    } else {
        (offset - span_deg).min(360.0 - offset)
    }
}

fn angle_check(computed: f64, expected: f64) -> (String, String, f64) {
    (
        format!("{expected:.4}°"),
        format!("{computed:.4}°"),
        normalize_to_pm180(computed - expected).abs(),
    )
}

fn element_check(
    kind: ElementKind,
    index: u8,
    jd: f64,
    ayanamsha: AyanamshaSystem,
) -> (String, String, f64) {
    let angle = element_angle(kind, jd, ayanamsha);
    let span = kind.span_deg();
    let got = ((angle / span).floor() as u8).min(kind.count() - 1) + 1;
    let computed = format!("{} {got} ({})", kind.name(), kind.element_name(got));
    if !(1..=kind.count()).contains(&index) {
        let expected = format!("{} {index} (outside 1..={})", kind.name(), kind.count());
        return (expected, computed, f64::INFINITY);
    }
    let expected = format!("{} {index} ({})", kind.name(), kind.element_name(index));
    let deviation = distance_to_arc(angle, f64::from(index.saturating_sub(1)) * span, span);
    (expected, computed, deviation)
}

fn rise_set_check(case: &ValidationCase, rising: bool) -> (String, String, f64) {
    let tz = case.instant.timezone();
    let window = solar_day_window(
        case.instant.date(),
        &case.location,
        tz,
        &RiseSetConfig::default(),
    );
    let event = if rising {
        window.sunrise()
    } else {
        window.sunset()
    };
    let expected = case.instant.to_rfc3339();
    match event {
        Some(got) => (
            expected,
            got.to_rfc3339(),
            (got.julian_day() - case.instant.julian_day()).abs() * 1440.0,
        ),
        None => (expected, "none (polar)".to_string(), f64::INFINITY),
    }
}

fn check_one(case: &ValidationCase, ayanamsha: AyanamshaSystem) -> ValidationResult {
    let jd = case.instant.julian_day();
    let (expected, computed, deviation) = match case.expectation {
        Expectation::SunLongitude { deg } => angle_check(sun_longitude(jd), deg),
        Expectation::MoonLongitude { deg } => angle_check(moon_longitude(jd), deg),
        Expectation::Elongation { deg } => angle_check(elongation_at(jd), deg),
        Expectation::Element { kind, index } => element_check(kind, index, jd, ayanamsha),
        Expectation::Sunrise => rise_set_check(case, true),
        Expectation::Sunset => rise_set_check(case, false),
    };
    let passed = deviation <= case.tolerance;
    if passed {
        debug!("{}: {computed} (deviation {deviation:.4})", case.name);
    } else {
        warn!(
            "{}: expected {expected}, computed {computed}, deviation {deviation:.4} > {}",
            case.name, case.tolerance
        );
    }
    ValidationResult {
        name: case.name.clone(),
        source: case.source.clone(),
        expected,
        computed,
        deviation,
        tolerance: case.tolerance,
        unit: case.expectation.unit(),
        passed,
    }
}

/// Check every case. Tolerance failures are results, not errors.
pub fn validate(cases: &[ValidationCase], ayanamsha: AyanamshaSystem) -> Vec<ValidationResult> {
    cases.iter().map(|c| check_one(c, ayanamsha)).collect()
}

/// Aggregated results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationSuite {
    pub ayanamsha: AyanamshaSystem,
    /// When the suite was run, if the caller recorded it.
    pub generated_at: Option<Instant>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Passed share in percent; 100 for an empty suite.
    pub success_rate: f64,
    pub results: Vec<ValidationResult>,
}

impl ValidationSuite {
    /// Run `cases` and summarize.
    pub fn run(cases: &[ValidationCase], ayanamsha: AyanamshaSystem) -> Self {
        Self::from_results(validate(cases, ayanamsha), ayanamsha)
    }

    pub fn from_results(results: Vec<ValidationResult>, ayanamsha: AyanamshaSystem) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let success_rate = if total == 0 {
            100.0
        } else {
            passed as f64 / total as f64 * 100.0
        };
        info!("validation: {passed}/{total} passed ({success_rate:.1}%)");
        Self {
            ayanamsha,
            generated_at: None,
            total,
            passed,
            failed: total - passed,
            success_rate,
            results,
        }
    }

    pub fn with_generated_at(mut self, at: Instant) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Plain-text report, one line per case then a summary.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Validation report (ayanamsha: {})", self.ayanamsha.name());
        if let Some(at) = &self.generated_at {
            let _ = writeln!(out, "Generated: {at}");
        }
        out.push('\n');
        for r in &self.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            let _ = writeln!(
                out,
                "[{status}] {}: expected {}, computed {}, deviation {:.4} {} (tolerance {} {})",
                r.name,
                r.expected,
                r.computed,
                r.deviation,
                r.unit.symbol(),
                r.tolerance,
                r.unit.symbol()
            );
        }
        let _ = writeln!(
            out,
            "\n{} cases, {} passed, {} failed ({:.1}%)",
            self.total, self.passed, self.failed, self.success_rate
        );
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
