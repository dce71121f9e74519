//! Types for sunrise/sunset and twilight calculations.

use serde::{Deserialize, Serialize, Serializer};

use panchang_time::{Instant, Tz, parse_timezone};

use crate::error::VedicError;

/// Mean Earth radius in metres, for the horizon dip of an elevated observer.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Observer position on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Height above mean sea level in metres.
    pub altitude_m: f64,
    /// Civil timezone of the place, when known.
    #[serde(serialize_with = "serialize_zone_name")]
    pub timezone: Option<Tz>,
}

fn serialize_zone_name<S: Serializer>(tz: &Option<Tz>, serializer: S) -> Result<S::Ok, S::Error> {
    match tz {
        Some(tz) => serializer.serialize_some(tz.name()),
        None => serializer.serialize_none(),
    }
}

impl GeoLocation {
    /// Validated location without a timezone.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() || !altitude_m.is_finite() {
            return Err(VedicError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            timezone: None,
        })
    }

    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Attach an IANA timezone by name, e.g. `"Asia/Kolkata"`.
    pub fn with_timezone_name(self, name: &str) -> Result<Self, VedicError> {
        Ok(self.with_timezone(parse_timezone(name)?))
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Rise/set events, including twilight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiseSetEvent {
    /// Upper limb at the apparent horizon.
    Sunrise,
    Sunset,
    /// Centre of the Sun 6° below the horizon.
    CivilDawn,
    CivilDusk,
    /// 12° below.
    NauticalDawn,
    NauticalDusk,
    /// 18° below.
    AstronomicalDawn,
    AstronomicalDusk,
}

impl RiseSetEvent {
    /// Depression of the Sun's centre below the geometric horizon for
    /// twilight events; 0 for sunrise and sunset, whose depression comes
    /// from [`RiseSetConfig`].
    pub const fn twilight_depression_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => 0.0,
            Self::CivilDawn | Self::CivilDusk => 6.0,
            Self::NauticalDawn | Self::NauticalDusk => 12.0,
            Self::AstronomicalDawn | Self::AstronomicalDusk => 18.0,
        }
    }

    /// Whether this is a morning event.
    pub const fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::CivilDawn => "civil dawn",
            Self::CivilDusk => "civil dusk",
            Self::NauticalDawn => "nautical dawn",
            Self::NauticalDusk => "nautical dusk",
            Self::AstronomicalDawn => "astronomical dawn",
            Self::AstronomicalDusk => "astronomical dusk",
        }
    }
}

/// Events in chronological order over one day.
pub const ALL_EVENTS: [RiseSetEvent; 8] = [
    RiseSetEvent::AstronomicalDawn,
    RiseSetEvent::NauticalDawn,
    RiseSetEvent::CivilDawn,
    RiseSetEvent::Sunrise,
    RiseSetEvent::Sunset,
    RiseSetEvent::CivilDusk,
    RiseSetEvent::NauticalDusk,
    RiseSetEvent::AstronomicalDusk,
];

/// Horizon model for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.
    pub refraction_arcmin: f64,
    /// Solar semidiameter in arcminutes. Default: 16.
    pub semidiameter_arcmin: f64,
    /// Lower the horizon by the geometric dip `sqrt(2h/R)` for observers
    /// above sea level. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Sunrise/sunset depression in degrees:
    /// `(refraction + semidiameter) / 60 + dip`.
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            base + (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            base
        }
    }

    /// Geometric altitude of the Sun's centre at which `event` occurs.
    pub fn target_altitude_deg(&self, event: RiseSetEvent, altitude_m: f64) -> f64 {
        match event {
            RiseSetEvent::Sunrise | RiseSetEvent::Sunset => -self.horizon_depression_deg(altitude_m),
            other => -other.twilight_depression_deg(),
        }
    }
}

/// Outcome of a single rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event at the given Julian Date (UT).
    Event { jd: f64, event: RiseSetEvent },
    /// The Sun stays below the target altitude all day.
    NeverRises,
    /// The Sun stays above the target altitude all day.
    NeverSets,
}

impl RiseSetResult {
    pub fn jd(&self) -> Option<f64> {
        match self {
            Self::Event { jd, .. } => Some(*jd),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

/// Daylight for one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolarDayWindow {
    Regular {
        sunrise: Instant,
        solar_noon: Instant,
        sunset: Instant,
    },
    /// Midnight sun: no sunset.
    PolarDay { solar_noon: Instant },
    /// The Sun never clears the horizon.
    PolarNight { solar_noon: Instant },
}

impl SolarDayWindow {
    pub fn solar_noon(&self) -> Instant {
        match self {
            Self::Regular { solar_noon, .. }
            | Self::PolarDay { solar_noon }
            | Self::PolarNight { solar_noon } => *solar_noon,
        }
    }

    pub fn sunrise(&self) -> Option<Instant> {
        match self {
            Self::Regular { sunrise, .. } => Some(*sunrise),
            _ => None,
        }
    }

    pub fn sunset(&self) -> Option<Instant> {
        match self {
            Self::Regular { sunset, .. } => Some(*sunset),
            _ => None,
        }
    }

    pub fn is_polar(&self) -> bool {
        !matches!(self, Self::Regular { .. })
    }

    /// Daylight length in days; 1 for polar day, 0 for polar night.
    pub fn day_length_days(&self) -> f64 {
        match self {
            Self::Regular { sunrise, sunset, .. } => sunset.julian_day() - sunrise.julian_day(),
            Self::PolarDay { .. } => 1.0,
            Self::PolarNight { .. } => 0.0,
        }
    }
}
