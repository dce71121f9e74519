//! Vedic calendar primitives built on the Sun and Moon models.
//!
//! This crate provides:
//! - Ayanamsha for 20 sidereal reference systems
//! - Pure classification of tithi, nakshatra, yoga, karana, vaar and hora
//! - Sunrise/sunset and twilight, with polar day and night as results
//! - Rahu Kalam, Yamagandam, Gulika Kalam and Abhijit windows
//! - Lunar phase, illumination and mean age
//!
//! Classification functions take longitudes and never search; locating the
//! start and end of an element is left to `panchang_search`.

pub mod ayanamsha;
pub mod error;
pub mod karana;
pub mod lunar_phase;
pub mod muhurta;
pub mod nakshatra;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{
    AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg, ayanamsha_true_deg, to_sidereal,
};
pub use error::VedicError;
pub use karana::{
    KARANA_COUNT, KARANA_SEGMENT_DEG, Karana, KaranaPosition, KaranaType, karana_from_elongation,
};
pub use lunar_phase::{
    LunarPhase, LunarPhaseInfo, SYNODIC_MONTH_DAYS, illuminated_fraction, lunar_phase_info,
    mean_age_days,
};
pub use muhurta::{MuhurtaWindows, TimeWindow, muhurta_windows};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_COUNT, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo, NakshatraLord,
    PADA_SPAN_DEG, nakshatra_from_longitude, nakshatra_from_tropical,
};
pub use riseset::{
    approximate_local_noon_jd, compute_all_events, compute_rise_set, local_noon_for_date,
    solar_day_window, solar_transit_jd, sun_ra_dec_deg,
};
pub use riseset_types::{
    ALL_EVENTS, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarDayWindow,
};
pub use tithi::{
    ALL_TITHIS, CalendarSystem, Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi, TithiClass,
    TithiPosition, tithi_from_elongation,
};
pub use vaar::{ALL_VAARS, CHALDEAN_SEQUENCE, HORA_COUNT, Hora, Vaar, hora_at};
pub use yoga::{
    ALL_YOGAS, YOGA_COUNT, YOGA_SEGMENT_DEG, Yoga, YogaPosition, YogaQuality, yoga_from_sum,
};
