//! 2D screen projections of the observer's sky.
//!
//! Screens are normalized: stereographic and orthographic discs have the
//! horizon at radius 1, with north up (+y) and east to the right (+x).
//! Mercator maps azimuth to x in [-1, 1) and altitude to y.

use serde::{Deserialize, Serialize};

use crate::horizontal::HorizontalCoords;

/// Altitude limit for Mercator, where the projection diverges.
const MERCATOR_MAX_ALT_DEG: f64 = 85.0;

/// Caller-selectable sky projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Zenith-centred conformal projection.
    #[default]
    Stereographic,
    /// Zenith-centred view of the visible hemisphere.
    Orthographic,
    /// Cylindrical: azimuth horizontally, stretched altitude vertically.
    Mercator,
}

impl Projection {
    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stereographic => "stereographic",
            Self::Orthographic => "orthographic",
            Self::Mercator => "mercator",
        }
    }

    /// Parse a projection name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "stereographic" | "stereo" => Some(Self::Stereographic),
            "orthographic" | "ortho" => Some(Self::Orthographic),
            "mercator" => Some(Self::Mercator),
            _ => None,
        }
    }
}

/// Projected screen position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScreenPosition {
    /// Drawable point.
    Visible { x: f64, y: f64 },
    /// Below the horizon under a hemisphere projection.
    OffScreen,
}

impl ScreenPosition {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }
}

/// Project horizontal coordinates onto the screen.
pub fn project(hor: &HorizontalCoords, projection: Projection) -> ScreenPosition {
    let (sin_az, cos_az) = hor.azimuth_deg.to_radians().sin_cos();
    match projection {
        Projection::Stereographic => {
            if hor.altitude_deg < 0.0 {
                return ScreenPosition::OffScreen;
            }
            let zenith_half = (90.0 - hor.altitude_deg).to_radians() / 2.0;
            let r = zenith_half.tan();
            ScreenPosition::Visible {
                x: r * sin_az,
                y: r * cos_az,
            }
        }
        Projection::Orthographic => {
            if hor.altitude_deg < 0.0 {
                return ScreenPosition::OffScreen;
            }
            let r = hor.altitude_deg.to_radians().cos();
            ScreenPosition::Visible {
                x: r * sin_az,
                y: r * cos_az,
            }
        }
        Projection::Mercator => {
            let alt = hor
                .altitude_deg
                .clamp(-MERCATOR_MAX_ALT_DEG, MERCATOR_MAX_ALT_DEG)
                .to_radians();
            let y = (std::f64::consts::FRAC_PI_4 + alt / 2.0).tan().ln() / std::f64::consts::PI;
            ScreenPosition::Visible {
                x: hor.azimuth_deg / 180.0 - 1.0,
                y,
            }
        }
    }
}
