//! Moonrise, moonset and the Moon's place in its synodic cycle.
//!
//! Rise and set are found by stepping the Moon's topocentric altitude
//! through the civil day an hour at a time and bisecting each horizon
//! crossing. The Moon's own motion is too fast for the single-transit
//! method used for the Sun.
//!
//! Age and the next principal phase come from the true elongation, seeded
//! by mean synodic motion and refined by the same scan-and-bisect used for
//! element boundaries.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::Serialize;

use panchang_ephem::Body;
use panchang_time::{Instant, normalize_360, normalize_to_pm180};
use panchang_vedic_base::{
    GeoLocation, LunarPhase, RiseSetConfig, SYNODIC_MONTH_DAYS, mean_age_days,
};

use crate::panchang::{SearchContext, elongation_at};
use crate::search_util::{bisect, find_zero_crossing};
use crate::sky::topocentric;
use crate::trace::{TraceEvent, emit};

/// Mean lunar radius, km.
const MOON_RADIUS_KM: f64 = 1737.4;

/// Altitude scan step for rise/set, days.
const HORIZON_STEP_DAYS: f64 = 1.0 / 24.0;

/// True and mean elongation never drift more than about a day apart in
/// time; the phase scan starts this far on the near side of the estimate.
const PHASE_SLACK_DAYS: f64 = 1.5;

const PHASE_STEP_DAYS: f64 = 0.25;

/// Twelve quarter-day steps reach 1.5 days past the estimate.
const PHASE_MAX_STEPS: usize = 12;

/// Moonrise and moonset within one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonRiseSet {
    pub date: NaiveDate,
    /// First rise of the upper limb during the day, if any.
    pub moonrise: Option<Instant>,
    /// First set of the upper limb during the day, if any.
    pub moonset: Option<Instant>,
    /// Whether the Moon was already up at local midnight.
    pub up_at_start: bool,
}

impl MoonRiseSet {
    /// Whether the Moon is above the horizon at any time during the day.
    pub fn is_visible(&self) -> bool {
        self.up_at_start || self.moonrise.is_some()
    }
}

/// A principal phase (new, first quarter, full, last quarter) and when it
/// occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseEvent {
    pub phase: LunarPhase,
    pub at: Instant,
}

/// The Moon's position in its synodic month at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarCycle {
    /// Days since the last conjunction.
    pub age_days: f64,
    pub previous_new_moon: Instant,
    pub next_phase: PhaseEvent,
}

/// Height of the Moon's upper limb above the apparent horizon, degrees.
///
/// The horizon model is the Sun's, with the lunar semidiameter at the
/// current distance standing in for the solar one.
fn upper_limb_altitude(jd: f64, location: &GeoLocation, riseset: &RiseSetConfig) -> f64 {
    let (horizontal, distance_km) = topocentric(Body::Moon, jd, location);
    let semidiameter = (MOON_RADIUS_KM / distance_km).asin().to_degrees();
    let depression =
        riseset.horizon_depression_deg(location.altitude_m) - riseset.semidiameter_arcmin / 60.0;
    horizontal.altitude_deg + semidiameter + depression
}

/// Moonrise and moonset between local midnight of `date` and the next
/// local midnight, in the context's timezone.
pub fn moon_rise_set(
    date: NaiveDate,
    location: &GeoLocation,
    riseset: &RiseSetConfig,
    ctx: &SearchContext<'_>,
) -> MoonRiseSet {
    let start = Instant::start_of_day(date, ctx.tz).julian_day();
    let end = date
        .succ_opt()
        .map_or(start + 1.0, |next| Instant::start_of_day(next, ctx.tz).julian_day());
    let f = |jd: f64| upper_limb_altitude(jd, location, riseset);

    let mut moonrise = None;
    let mut moonset = None;
    let mut t_prev = start;
    let mut f_prev = f(start);
    let up_at_start = f_prev >= 0.0;

    while t_prev < end {
        let t = (t_prev + HORIZON_STEP_DAYS).min(end);
        let f_t = f(t);
        if (f_prev < 0.0) != (f_t < 0.0) {
            let rising = f_t >= 0.0;
            let crossing = bisect(&f, t_prev, t, &ctx.search);
            if !crossing.converged {
                warn!("{date}: moon horizon crossing did not converge");
            }
            emit(
                ctx.trace,
                TraceEvent::MoonHorizon {
                    rising,
                    jd: crossing.jd,
                    iterations: crossing.iterations,
                },
            );
            let slot = if rising { &mut moonrise } else { &mut moonset };
            if slot.is_none() {
                *slot = Some(Instant::from_julian_day(crossing.jd, ctx.tz));
            }
        }
        t_prev = t;
        f_prev = f_t;
    }

    debug!("{date}: moonrise {moonrise:?}, moonset {moonset:?}, up at start {up_at_start}");
    MoonRiseSet {
        date,
        moonrise,
        moonset,
        up_at_start,
    }
}

/// Julian Date at which elongation reaches `target_deg`, starting from the
/// mean-motion estimate `estimate` and never crossing `jd`.
fn phase_time(
    target_deg: f64,
    estimate: f64,
    jd: f64,
    forward: bool,
    ctx: &SearchContext<'_>,
) -> f64 {
    let f = |t: f64| normalize_to_pm180(elongation_at(t) - target_deg);
    let (from, step) = if forward {
        ((estimate - PHASE_SLACK_DAYS).max(jd), PHASE_STEP_DAYS)
    } else {
        ((estimate + PHASE_SLACK_DAYS).min(jd), -PHASE_STEP_DAYS)
    };
    match find_zero_crossing(&f, from, step, PHASE_MAX_STEPS, &ctx.search) {
        Some(crossing) => {
            emit(
                ctx.trace,
                TraceEvent::PhaseCrossing {
                    target_deg,
                    jd: crossing.jd,
                    iterations: crossing.iterations,
                },
            );
            crossing.jd
        }
        None => {
            warn!(
                "elongation {target_deg}° not bracketed near jd {estimate:.5}; using mean estimate"
            );
            estimate
        }
    }
}

/// Age, last new moon and next principal phase at `jd`.
pub fn lunar_cycle_at(jd: f64, ctx: &SearchContext<'_>) -> LunarCycle {
    let elongation = elongation_at(jd);

    let new_moon_jd = phase_time(0.0, jd - mean_age_days(elongation), jd, false, ctx);

    let next = LunarPhase::next_principal(elongation);
    let target = next.principal_elongation_deg().unwrap_or(0.0);
    let ahead_days = normalize_360(target - elongation) / 360.0 * SYNODIC_MONTH_DAYS;
    let next_jd = phase_time(target, jd + ahead_days, jd, true, ctx);

    LunarCycle {
        age_days: jd - new_moon_jd,
        previous_new_moon: Instant::from_julian_day(new_moon_jd, ctx.tz),
        next_phase: PhaseEvent {
            phase: next,
            at: Instant::from_julian_day(next_jd, ctx.tz),
        },
    }
}
