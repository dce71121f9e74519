//! Element boundaries, sunrise-anchored day listings and the combined
//! panchang.
//!
//! Boundaries are located by scanning the element's angle function in
//! quarter-day steps and bisecting the first genuine sign change of the
//! wrapped difference to the target angle.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};

use panchang_ephem::{moon_longitude, sun_longitude};
use panchang_time::{Instant, Tz, normalize_360, normalize_to_pm180};
use panchang_vedic_base::{
    AyanamshaSystem, GeoLocation, HORA_COUNT, SolarDayWindow, Vaar, ayanamsha_deg, hora_at,
    lunar_phase_info, muhurta_windows, nakshatra_from_longitude, solar_day_window,
    tithi_from_elongation,
};

use crate::lunar::{lunar_cycle_at, moon_rise_set};
use crate::panchang_types::{
    ALL_ELEMENT_KINDS, DayElementListing, DayPanchang, ElementKind, HoraInfo, KaranaDetails,
    NakshatraDetails, PanchangInfo, PanchangOptions, PanchangaElement, TithiDetails, VaarInfo,
    yoga_quality,
};
use crate::search_util::{SearchConfig, find_zero_crossing};
use crate::trace::{TraceEvent, TraceHook, emit};

/// Scan step for boundary search, days.
const SCAN_STEP_DAYS: f64 = 0.25;

/// Scan window: 3 days either way covers the longest element.
const MAX_SCAN_STEPS: usize = 12;

/// Offset past a boundary used to land inside the following element (~0.9 s).
const STEP_PAST_BOUNDARY_DAYS: f64 = 1e-5;

/// Upper clamp so `percent_complete` stays below 100.
const MAX_PERCENT: f64 = 100.0 - 1e-9;

/// Everything an element search needs besides the instant.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub ayanamsha: AyanamshaSystem,
    pub search: SearchConfig,
    /// Zone in which result instants are shown.
    pub tz: Tz,
    pub trace: Option<&'a dyn TraceHook>,
}

impl<'a> SearchContext<'a> {
    pub fn new(options: &PanchangOptions, tz: Tz) -> Self {
        Self {
            ayanamsha: options.ayanamsha,
            search: options.search,
            tz,
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: Option<&'a dyn TraceHook>) -> Self {
        self.trace = trace;
        self
    }
}

// ---------------------------------------------------------------------------
// Angle functions
// ---------------------------------------------------------------------------

/// Moon − Sun elongation in degrees [0, 360). Ayanamsha cancels out.
pub fn elongation_at(jd: f64) -> f64 {
    normalize_360(moon_longitude(jd) - sun_longitude(jd))
}

/// Sidereal Moon longitude in degrees [0, 360).
pub fn moon_sidereal_longitude_at(jd: f64, system: AyanamshaSystem) -> f64 {
    normalize_360(moon_longitude(jd) - ayanamsha_deg(system, jd))
}

/// Sidereal Sun + sidereal Moon in degrees [0, 360).
pub fn sidereal_sum_at(jd: f64, system: AyanamshaSystem) -> f64 {
    let aya = ayanamsha_deg(system, jd);
    normalize_360(sun_longitude(jd) + moon_longitude(jd) - 2.0 * aya)
}

/// The angle whose `span`-wide segments define `kind`.
pub fn element_angle(kind: ElementKind, jd: f64, system: AyanamshaSystem) -> f64 {
    match kind {
        ElementKind::Tithi | ElementKind::Karana => elongation_at(jd),
        ElementKind::Nakshatra => moon_sidereal_longitude_at(jd, system),
        ElementKind::Yoga => sidereal_sum_at(jd, system),
    }
}

// ---------------------------------------------------------------------------
// Boundary search
// ---------------------------------------------------------------------------

/// Julian Date nearest `jd_from` (scanning backward or forward) at which the
/// element angle equals `target_deg`.
fn find_boundary(
    kind: ElementKind,
    jd_from: f64,
    target_deg: f64,
    forward: bool,
    ctx: &SearchContext<'_>,
) -> f64 {
    let f = |t: f64| normalize_to_pm180(element_angle(kind, t, ctx.ayanamsha) - target_deg);
    let step = if forward { SCAN_STEP_DAYS } else { -SCAN_STEP_DAYS };

    match find_zero_crossing(&f, jd_from, step, MAX_SCAN_STEPS, &ctx.search) {
        Some(crossing) => {
            if !crossing.converged {
                warn!(
                    "{} boundary at {target_deg:.4}°: iteration bound {} reached",
                    kind.name(),
                    ctx.search.max_iterations
                );
            }
            emit(
                ctx.trace,
                TraceEvent::Boundary {
                    kind,
                    target_deg,
                    jd: crossing.jd,
                    iterations: crossing.iterations,
                    converged: crossing.converged,
                },
            );
            crossing.jd
        }
        None => {
            let jd = jd_from - f(jd_from) / kind.mean_rate_deg_per_day();
            warn!(
                "{} boundary at {target_deg:.4}° not bracketed from jd {jd_from:.5}; extrapolated to {jd:.5}",
                kind.name()
            );
            emit(
                ctx.trace,
                TraceEvent::BoundaryExtrapolated {
                    kind,
                    target_deg,
                    jd,
                },
            );
            jd
        }
    }
}

/// The element of `kind` active at `jd`, with its start and end.
pub fn element_at(kind: ElementKind, jd: f64, ctx: &SearchContext<'_>) -> PanchangaElement {
    let angle = element_angle(kind, jd, ctx.ayanamsha);
    let span = kind.span_deg();
    let idx = ((angle / span).floor() as u8).min(kind.count() - 1);
    let start_target = f64::from(idx) * span;

    let start_jd = find_boundary(kind, jd, start_target, false, ctx);
    let end_jd = find_boundary(kind, jd, start_target + span, true, ctx);
    let index = idx + 1;

    debug!(
        "{} {} ({}) {start_jd:.5} .. {end_jd:.5}",
        kind.name(),
        index,
        kind.element_name(index)
    );

    PanchangaElement {
        kind,
        index,
        name: kind.element_name(index),
        start: Instant::from_julian_day(start_jd, ctx.tz),
        end: Instant::from_julian_day(end_jd, ctx.tz),
        percent_complete: ((angle - start_target) / span * 100.0).clamp(0.0, MAX_PERCENT),
    }
}

/// Consecutive elements of `kind` covering `[start_jd, end_jd)`, starting
/// with the one active at `start_jd`.
pub fn elements_between(
    kind: ElementKind,
    start_jd: f64,
    end_jd: f64,
    ctx: &SearchContext<'_>,
) -> Vec<PanchangaElement> {
    let mut out = Vec::new();
    let mut current = element_at(kind, start_jd, ctx);
    loop {
        let boundary = current.end.julian_day();
        out.push(current);
        if boundary >= end_jd {
            break;
        }
        let next = element_at(kind, boundary + STEP_PAST_BOUNDARY_DAYS, ctx);
        if next.end.julian_day() <= boundary {
            break;
        }
        current = next;
    }
    out
}

// ---------------------------------------------------------------------------
// Sunrise anchors
// ---------------------------------------------------------------------------

/// Sunrise of `date`, or local midnight when the date has no sunrise.
fn day_anchor(
    date: NaiveDate,
    location: &GeoLocation,
    options: &PanchangOptions,
    tz: Tz,
    trace: Option<&dyn TraceHook>,
) -> (Instant, SolarDayWindow) {
    let window = solar_day_window(date, location, tz, &options.riseset);
    emit(trace, TraceEvent::SolarDay { date, window: &window });
    let (anchor, polar) = match window.sunrise() {
        Some(sunrise) => (sunrise, false),
        None => (Instant::start_of_day(date, tz), true),
    };
    if polar {
        debug!("{date}: no sunrise, anchoring at local midnight");
    }
    emit(
        trace,
        TraceEvent::DayAnchor {
            date,
            jd: anchor.julian_day(),
            polar,
        },
    );
    (anchor, window)
}

fn next_date(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

fn previous_date(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

/// Sunrise opening and sunrise closing the Vedic day that contains
/// `instant`. Before today's sunrise the Vedic day is still yesterday's.
pub fn vedic_day_sunrises(
    instant: &Instant,
    location: &GeoLocation,
    options: &PanchangOptions,
    tz: Tz,
    trace: Option<&dyn TraceHook>,
) -> (Instant, Instant) {
    let date = instant.with_timezone(tz).date();
    let (today, _) = day_anchor(date, location, options, tz, trace);
    if *instant >= today {
        let (tomorrow, _) = day_anchor(next_date(date), location, options, tz, trace);
        (today, tomorrow)
    } else {
        let (yesterday, _) = day_anchor(previous_date(date), location, options, tz, trace);
        (yesterday, today)
    }
}

fn hora_in_day(jd: f64, vaar: Vaar, start: &Instant, end: &Instant) -> HoraInfo {
    let day_start = start.julian_day();
    let length = (end.julian_day() - day_start) / f64::from(HORA_COUNT);
    let idx = (((jd - day_start) / length).floor().max(0.0) as u8).min(HORA_COUNT - 1);
    let hora_start = day_start + f64::from(idx) * length;
    let tz = start.timezone();
    HoraInfo {
        hora: hora_at(vaar, idx),
        number: idx + 1,
        start: Instant::from_julian_day(hora_start, tz),
        end: Instant::from_julian_day(hora_start + length, tz),
    }
}

// ---------------------------------------------------------------------------
// Combined panchang
// ---------------------------------------------------------------------------

/// All elements, vaar, hora, daylight, muhurta windows, lunar phase and
/// moonrise at one moment.
///
/// Result instants are shown in the location's timezone, falling back to
/// the zone of `instant`.
pub fn compute_panchangam(
    instant: &Instant,
    location: &GeoLocation,
    options: &PanchangOptions,
    trace: Option<&dyn TraceHook>,
) -> PanchangInfo {
    let tz = location.timezone.unwrap_or(instant.timezone());
    let local = instant.with_timezone(tz);
    let jd = local.julian_day();
    let ctx = SearchContext::new(options, tz).with_trace(trace);

    let aya = ayanamsha_deg(options.ayanamsha, jd);
    let sun_trop = sun_longitude(jd);
    let moon_trop = moon_longitude(jd);
    let sun_sid = normalize_360(sun_trop - aya);
    let moon_sid = normalize_360(moon_trop - aya);
    let elongation = normalize_360(moon_trop - sun_trop);

    let tithi_pos = tithi_from_elongation(elongation);
    let tithi_details = TithiDetails {
        paksha: tithi_pos.paksha,
        tithi_in_paksha: tithi_pos.tithi_in_paksha,
        class: tithi_pos.tithi.class(),
        month_day: options.calendar_system.month_day(tithi_pos.tithi),
        calendar_system: options.calendar_system,
    };

    let (vedic_start, vedic_end) = vedic_day_sunrises(&local, location, options, tz, trace);
    let vaar = Vaar::from_weekday(vedic_start.weekday());

    let window = solar_day_window(local.date(), location, tz, &options.riseset);
    let muhurta = muhurta_windows(&window, Vaar::from_weekday(local.date().weekday()));

    let nakshatra = element_at(ElementKind::Nakshatra, jd, &ctx);
    let nakshatra_details =
        NakshatraDetails::new(nakshatra.index, nakshatra_from_longitude(moon_sid).pada);
    let yoga = element_at(ElementKind::Yoga, jd, &ctx);
    let karana = element_at(ElementKind::Karana, jd, &ctx);

    PanchangInfo {
        instant: local,
        ayanamsha: options.ayanamsha,
        ayanamsha_deg: aya,
        sun_sidereal_deg: sun_sid,
        moon_sidereal_deg: moon_sid,
        tithi: element_at(ElementKind::Tithi, jd, &ctx),
        tithi_details,
        nakshatra_details,
        nakshatra,
        yoga_quality: yoga_quality(yoga.index),
        yoga,
        karana_details: KaranaDetails::new(karana.index),
        karana,
        vaar: VaarInfo {
            vaar,
            start: vedic_start,
            end: vedic_end,
        },
        hora: hora_in_day(jd, vaar, &vedic_start, &vedic_end),
        solar_day_window: window,
        muhurta,
        lunar_phase: lunar_phase_info(elongation),
        lunar_cycle: lunar_cycle_at(jd, &ctx),
        moon: moon_rise_set(local.date(), location, &options.riseset, &ctx),
    }
}

// ---------------------------------------------------------------------------
// Day listing
// ---------------------------------------------------------------------------

fn day_listing(
    kind: ElementKind,
    previous: &Instant,
    today: &Instant,
    next: &Instant,
    ctx: &SearchContext<'_>,
) -> DayElementListing {
    let element = element_at(kind, today.julian_day(), ctx);
    let repeats_next_day = element.end > *next;
    let repeated_from_previous = element.start <= *previous;

    let mut skipped = Vec::new();
    let mut boundary = element.end.julian_day();
    while boundary < next.julian_day() {
        let candidate = element_at(kind, boundary + STEP_PAST_BOUNDARY_DAYS, ctx);
        if candidate.end > *next || candidate.end.julian_day() <= boundary {
            break;
        }
        debug!("{} {} skipped on {}", kind.name(), candidate.index, today.date());
        boundary = candidate.end.julian_day();
        skipped.push(candidate);
    }

    DayElementListing {
        element,
        repeats_next_day,
        repeated_from_previous,
        skipped,
    }
}

/// Sunrise-sampled listing of every element for a civil date.
///
/// Instants are shown in the location's timezone, or UTC when it has none.
pub fn day_panchang(
    date: NaiveDate,
    location: &GeoLocation,
    options: &PanchangOptions,
    trace: Option<&dyn TraceHook>,
) -> DayPanchang {
    let tz = location.timezone.unwrap_or(Tz::UTC);
    let ctx = SearchContext::new(options, tz).with_trace(trace);

    let (previous, _) = day_anchor(previous_date(date), location, options, tz, trace);
    let (anchor, window) = day_anchor(date, location, options, tz, trace);
    let (next_anchor, _) = day_anchor(next_date(date), location, options, tz, trace);

    // ALL_ELEMENT_KINDS order: tithi, nakshatra, yoga, karana
    let [tithi, nakshatra, yoga, karana] =
        ALL_ELEMENT_KINDS.map(|kind| day_listing(kind, &previous, &anchor, &next_anchor, &ctx));

    DayPanchang {
        date,
        solar_day_window: window,
        anchor,
        next_anchor,
        vaar: Vaar::from_weekday(anchor.weekday()),
        tithi,
        nakshatra,
        yoga,
        karana,
        moon: moon_rise_set(date, location, &options.riseset, &ctx),
    }
}
