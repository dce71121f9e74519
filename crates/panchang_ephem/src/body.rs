//! Bodies and their ecliptic positions.

use serde::Serialize;

use panchang_frames::EclipticCoords;

use crate::moon::moon_position;
use crate::sun::sun_position;

/// Bodies covered by the position models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
}

/// All modelled bodies in display order.
pub const ALL_BODIES: [Body; 2] = [Body::Sun, Body::Moon];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }

    /// Sanskrit (graha) name.
    pub const fn graha_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
        }
    }

    pub const fn all() -> &'static [Body; 2] {
        &ALL_BODIES
    }
}

/// Apparent geocentric ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Apparent tropical longitude in degrees [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

impl BodyPosition {
    /// As frame-level ecliptic coordinates.
    pub fn ecliptic(&self) -> EclipticCoords {
        EclipticCoords {
            lon_deg: self.lon_deg,
            lat_deg: self.lat_deg,
            distance_km: self.distance_km,
        }
    }
}

/// Position of `body` at Julian Date `jd`.
pub fn position(body: Body, jd: f64) -> BodyPosition {
    match body {
        Body::Sun => sun_position(jd),
        Body::Moon => moon_position(jd),
    }
}
