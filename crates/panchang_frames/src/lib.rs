//! Coordinate frames for the panchang core.
//!
//! The pipeline runs ecliptic → equatorial (obliquity rotation) →
//! horizontal (observer latitude and local sidereal time) → 2D screen
//! projection. Every stage except the projection has an exact inverse.

pub mod horizontal;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod projection;
pub mod rotation;
pub mod spherical;

pub use horizontal::{HorizontalCoords, equatorial_to_horizontal, horizontal_to_equatorial};
pub use nutation::{Nutation, fundamental_arguments, nutation};
pub use obliquity::{mean_obliquity_deg, true_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use projection::{Projection, ScreenPosition, project};
pub use rotation::{
    EclipticCoords, EquatorialCoords, ecliptic_to_equatorial, equatorial_to_ecliptic,
};
pub use spherical::{lon_lat_to_unit, unit_to_lon_lat};
