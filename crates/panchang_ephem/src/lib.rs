//! Geocentric Sun and Moon positions from truncated analytic series.
//!
//! Both models are deterministic closed-form evaluations with no I/O and no
//! failure modes. Their truncation error is pinned by the `*_ERROR_DEG`
//! constants so validation tolerances can be derived from them rather than
//! guessed.
//!
//! The time argument is a Julian Date treated as TT. Feeding a UT Julian
//! Date shifts the Moon by less than 0.01° for present-day ΔT, well inside
//! [`MOON_LONGITUDE_ERROR_DEG`].

pub mod body;
pub mod moon;
pub mod sun;

pub use body::{ALL_BODIES, Body, BodyPosition, position};
pub use moon::{
    MOON_LATITUDE_ERROR_DEG, MOON_LONGITUDE_ERROR_DEG, MOON_MEAN_MOTION_DEG_PER_DAY,
    moon_longitude, moon_position,
};
pub use sun::{SUN_LONGITUDE_ERROR_DEG, SUN_MEAN_MOTION_DEG_PER_DAY, sun_longitude, sun_position};
