//! Time-domain search over the panchang elements.
//!
//! This crate provides:
//! - Bracketed bisection on wrapped angle differences
//! - The element active at any instant, with its start, end and progress
//! - Sunrise-anchored day listings that flag skipped and repeated elements
//! - The combined panchang at an instant and observer sky positions
//! - Moonrise, moonset, lunar age and the next principal phase
//! - An optional [`TraceHook`] passed explicitly into each operation

pub mod lunar;
pub mod panchang;
pub mod panchang_types;
pub mod search_util;
pub mod sky;
pub mod trace;

pub use lunar::{LunarCycle, MoonRiseSet, PhaseEvent, lunar_cycle_at, moon_rise_set};
pub use panchang::{
    SearchContext, compute_panchangam, day_panchang, element_angle, element_at, elements_between,
    elongation_at, moon_sidereal_longitude_at, sidereal_sum_at, vedic_day_sunrises,
};
pub use panchang_types::{
    ALL_ELEMENT_KINDS, DayElementListing, DayPanchang, ElementKind, HoraInfo, KaranaDetails,
    NakshatraDetails, PanchangInfo, PanchangOptions, PanchangaElement, TithiDetails, VaarInfo,
    yoga_quality,
};
pub use search_util::{Crossing, SearchConfig, bisect, find_zero_crossing};
pub use sky::{SkyPosition, compute_sky_positions, compute_sky_positions_traced};
pub use trace::{LogTrace, TraceEvent, TraceHook};
