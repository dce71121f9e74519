//! Facade over the panchang workspace.
//!
//! [`Panchangam`] resolves a [`PanchangConfig`] once and exposes the
//! computations external callers need. Types are re-exported so a caller
//! can depend on this crate alone.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use panchang_rs::*;
//!
//! let config = PanchangConfig {
//!     timezone: Some("Asia/Kolkata".into()),
//!     ..PanchangConfig::default()
//! };
//! let panchangam = Panchangam::new(config)?;
//! let chennai = panchangam.location(13.0827, 80.2707, 0.0)?;
//! let now = panchangam.instant(2024, 1, 25, 18, 0, 0)?;
//! let info = panchangam.compute_panchangam(&now, &chennai, None);
//! println!("{} ({:.1}%)", info.tithi.name, info.tithi.percent_complete);
//! ```

pub mod error;
pub mod panchangam;

pub use error::PanchangError;
pub use panchangam::Panchangam;

pub use panchang_config::{ConfigError, Method, MethodTable, PanchangConfig, Profile, Region};
pub use panchang_ephem::{Body, BodyPosition};
pub use panchang_frames::{
    EclipticCoords, EquatorialCoords, HorizontalCoords, Projection, ScreenPosition,
};
pub use panchang_search::{
    DayElementListing, DayPanchang, ElementKind, HoraInfo, KaranaDetails, LogTrace, LunarCycle,
    MoonRiseSet, NakshatraDetails, PanchangInfo, PanchangOptions, PanchangaElement, PhaseEvent,
    SearchConfig, SkyPosition, TithiDetails, TraceEvent, TraceHook, VaarInfo,
};
pub use panchang_time::{Instant, TimeError, Tz};
pub use panchang_validate::{
    Expectation, ValidationCase, ValidationResult, ValidationSuite, historical_cases,
};
pub use panchang_vedic_base::{
    AyanamshaSystem, CalendarSystem, GeoLocation, Hora, Karana, KaranaType, LunarPhase,
    LunarPhaseInfo, MuhurtaWindows, Nakshatra, NakshatraLord, Paksha, RiseSetConfig,
    SolarDayWindow, TimeWindow, Vaar, VedicError, Yoga, YogaQuality,
};
