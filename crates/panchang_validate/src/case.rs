//! Reference fixtures.

use serde::Serialize;

use panchang_search::ElementKind;
use panchang_time::Instant;
use panchang_vedic_base::GeoLocation;

/// What a case asserts about its instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    /// Apparent tropical Sun longitude, degrees.
    SunLongitude { deg: f64 },
    /// Apparent tropical Moon longitude, degrees.
    MoonLongitude { deg: f64 },
    /// Moon − Sun elongation, degrees.
    Elongation { deg: f64 },
    /// The element of `kind` active at the instant has 1-based `index`.
    Element { kind: ElementKind, index: u8 },
    /// Sunrise on the instant's civil date happens at the instant.
    Sunrise,
    /// Sunset on the instant's civil date happens at the instant.
    Sunset,
}

impl Expectation {
    pub const fn unit(&self) -> DeviationUnit {
        match self {
            Self::Sunrise | Self::Sunset => DeviationUnit::Minutes,
            _ => DeviationUnit::Degrees,
        }
    }
}

/// Unit of a deviation and its tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationUnit {
    Degrees,
    Minutes,
}

impl DeviationUnit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Degrees => "°",
            Self::Minutes => "min",
        }
    }
}

/// One reference event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationCase {
    pub name: String,
    /// Where the expected value comes from.
    pub source: String,
    pub instant: Instant,
    pub location: GeoLocation,
    pub expectation: Expectation,
    /// Largest accepted deviation, in [`Expectation::unit`].
    pub tolerance: f64,
}

impl ValidationCase {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        instant: Instant,
        location: GeoLocation,
        expectation: Expectation,
        tolerance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            instant,
            location,
            expectation,
            tolerance,
        }
    }
}
