//! Result records for panchang computations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use panchang_ephem::MOON_MEAN_MOTION_DEG_PER_DAY;
use panchang_ephem::SUN_MEAN_MOTION_DEG_PER_DAY;
use panchang_time::Instant;
use panchang_vedic_base::{
    ALL_NAKSHATRAS, ALL_TITHIS, ALL_YOGAS, AyanamshaSystem, CalendarSystem, Hora, Karana,
    KARANA_SEGMENT_DEG, KaranaType, LunarPhaseInfo, MuhurtaWindows, NAKSHATRA_SPAN_DEG,
    NakshatraLord, Paksha, RiseSetConfig, SolarDayWindow, TITHI_SEGMENT_DEG, TithiClass, Vaar,
    YOGA_SEGMENT_DEG, YogaQuality,
};

use crate::lunar::{LunarCycle, MoonRiseSet};
use crate::search_util::SearchConfig;

/// Mean synodic motion of the Moon relative to the Sun, degrees per day.
const ELONGATION_MEAN_RATE: f64 = MOON_MEAN_MOTION_DEG_PER_DAY - SUN_MEAN_MOTION_DEG_PER_DAY;

/// The four angle-based panchanga elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// 12° of Moon − Sun elongation.
    Tithi,
    /// 13°20′ of sidereal Moon longitude.
    Nakshatra,
    /// 13°20′ of sidereal Sun + Moon longitude.
    Yoga,
    /// 6° of Moon − Sun elongation.
    Karana,
}

pub const ALL_ELEMENT_KINDS: [ElementKind; 4] = [
    ElementKind::Tithi,
    ElementKind::Nakshatra,
    ElementKind::Yoga,
    ElementKind::Karana,
];

impl ElementKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_ELEMENT_KINDS
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// Angular width of one element in degrees.
    pub const fn span_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_DEG,
            Self::Yoga => YOGA_SEGMENT_DEG,
            Self::Karana => KARANA_SEGMENT_DEG,
        }
    }

    /// Elements per full cycle (30, 27, 27, 60).
    pub const fn count(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => 60,
        }
    }

    /// Mean rate of the underlying angle, degrees per day.
    pub const fn mean_rate_deg_per_day(self) -> f64 {
        match self {
            Self::Tithi | Self::Karana => ELONGATION_MEAN_RATE,
            Self::Nakshatra => MOON_MEAN_MOTION_DEG_PER_DAY,
            Self::Yoga => MOON_MEAN_MOTION_DEG_PER_DAY + SUN_MEAN_MOTION_DEG_PER_DAY,
        }
    }

    /// Name of the element with 1-based `index`.
    pub fn element_name(self, index: u8) -> &'static str {
        let i = usize::from(index.clamp(1, self.count()) - 1);
        match self {
            Self::Tithi => ALL_TITHIS[i].name(),
            Self::Nakshatra => ALL_NAKSHATRAS[i].name(),
            Self::Yoga => ALL_YOGAS[i].name(),
            Self::Karana => Karana::from_number(index).name(),
        }
    }
}

/// One element occurrence with its boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangaElement {
    pub kind: ElementKind,
    /// 1-based index within the cycle.
    pub index: u8,
    pub name: &'static str,
    pub start: Instant,
    pub end: Instant,
    /// Share of the element's arc already traversed, in [0, 100).
    pub percent_complete: f64,
}

impl PanchangaElement {
    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant < self.end
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end.julian_day() - self.start.julian_day()) * 24.0
    }
}

/// Resolved computation settings.
///
/// The ayanamsha has no default at this level; it comes from the caller's
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangOptions {
    pub ayanamsha: AyanamshaSystem,
    pub calendar_system: CalendarSystem,
    pub riseset: RiseSetConfig,
    pub search: SearchConfig,
}

impl PanchangOptions {
    pub fn new(ayanamsha: AyanamshaSystem) -> Self {
        Self {
            ayanamsha,
            calendar_system: CalendarSystem::default(),
            riseset: RiseSetConfig::default(),
            search: SearchConfig::default(),
        }
    }

    pub fn with_calendar_system(mut self, calendar_system: CalendarSystem) -> Self {
        self.calendar_system = calendar_system;
        self
    }
}

/// Tithi attributes beyond the plain element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TithiDetails {
    pub paksha: Paksha,
    /// 1-based day within the paksha.
    pub tithi_in_paksha: u8,
    pub class: TithiClass,
    /// Day of the lunar month under the configured calendar system.
    pub month_day: u8,
    pub calendar_system: CalendarSystem,
}

/// Nakshatra attributes beyond the plain element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NakshatraDetails {
    /// Quarter of the nakshatra, 1-4.
    pub pada: u8,
    pub lord: NakshatraLord,
    pub deity: &'static str,
    pub symbol: &'static str,
}

impl NakshatraDetails {
    /// Attributes of the nakshatra with 1-based `index`.
    pub fn new(index: u8, pada: u8) -> Self {
        let nakshatra = ALL_NAKSHATRAS[usize::from(index.clamp(1, 27) - 1)];
        Self {
            pada,
            lord: nakshatra.lord(),
            deity: nakshatra.deity(),
            symbol: nakshatra.symbol(),
        }
    }
}

/// Karana attributes beyond the plain element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KaranaDetails {
    pub karana: Karana,
    pub karana_type: KaranaType,
    pub is_vishti: bool,
}

impl KaranaDetails {
    /// Attributes of the karana at 1-based month position `index`.
    pub fn new(index: u8) -> Self {
        let karana = Karana::from_number(index);
        Self {
            karana,
            karana_type: karana.karana_type(),
            is_vishti: karana.is_vishti(),
        }
    }
}

/// Yoga quality of the yoga with 1-based `index`.
pub fn yoga_quality(index: u8) -> YogaQuality {
    ALL_YOGAS[usize::from(index.clamp(1, 27) - 1)].quality()
}

/// Weekday of the Vedic day with its sunrise bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VaarInfo {
    pub vaar: Vaar,
    /// Sunrise opening the Vedic day.
    pub start: Instant,
    /// Next sunrise.
    pub end: Instant,
}

/// Planetary hour at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoraInfo {
    pub hora: Hora,
    /// 1-based hora number within the Vedic day (1..=24).
    pub number: u8,
    pub start: Instant,
    pub end: Instant,
}

/// Everything known about one moment at one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangInfo {
    pub instant: Instant,
    pub ayanamsha: AyanamshaSystem,
    pub ayanamsha_deg: f64,
    pub sun_sidereal_deg: f64,
    pub moon_sidereal_deg: f64,
    pub tithi: PanchangaElement,
    pub tithi_details: TithiDetails,
    pub nakshatra: PanchangaElement,
    pub nakshatra_details: NakshatraDetails,
    pub yoga: PanchangaElement,
    pub yoga_quality: YogaQuality,
    pub karana: PanchangaElement,
    pub karana_details: KaranaDetails,
    pub vaar: VaarInfo,
    pub hora: HoraInfo,
    /// Daylight of the instant's civil date.
    pub solar_day_window: SolarDayWindow,
    /// `None` on polar days and nights.
    pub muhurta: Option<MuhurtaWindows>,
    pub lunar_phase: LunarPhaseInfo,
    pub lunar_cycle: LunarCycle,
    /// Moonrise and moonset of the instant's civil date.
    pub moon: MoonRiseSet,
}

/// One element kind as listed for a civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayElementListing {
    /// The element active at the day's sunrise.
    pub element: PanchangaElement,
    /// Also active at the next day's sunrise.
    pub repeats_next_day: bool,
    /// Already active at the previous day's sunrise.
    pub repeated_from_previous: bool,
    /// Elements that begin after this sunrise and end before the next.
    pub skipped: Vec<PanchangaElement>,
}

/// The sunrise-anchored almanac of one civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPanchang {
    pub date: NaiveDate,
    pub solar_day_window: SolarDayWindow,
    /// Sunrise, or local midnight when the date has no sunrise.
    pub anchor: Instant,
    /// Anchor of the following civil date.
    pub next_anchor: Instant,
    pub vaar: Vaar,
    pub tithi: DayElementListing,
    pub nakshatra: DayElementListing,
    pub yoga: DayElementListing,
    pub karana: DayElementListing,
    pub moon: MoonRiseSet,
}

impl DayPanchang {
    pub fn listing(&self, kind: ElementKind) -> &DayElementListing {
        match kind {
            ElementKind::Tithi => &self.tithi,
            ElementKind::Nakshatra => &self.nakshatra,
            ElementKind::Yoga => &self.yoga,
            ElementKind::Karana => &self.karana,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_times_counts_make_a_circle() {
        for k in ALL_ELEMENT_KINDS {
            assert!((k.span_deg() * f64::from(k.count()) - 360.0).abs() < 1e-9, "{k:?}");
        }
    }

    #[test]
    fn element_names_by_index() {
        assert_eq!(ElementKind::Tithi.element_name(15), "Purnima");
        assert_eq!(ElementKind::Tithi.element_name(30), "Amavasya");
        assert_eq!(ElementKind::Nakshatra.element_name(20), "Purva Ashadha");
        assert_eq!(ElementKind::Yoga.element_name(1), "Vishkambha");
        assert_eq!(ElementKind::Karana.element_name(1), "Kimstughna");
        assert_eq!(ElementKind::Karana.element_name(9), "Bava");
    }

    #[test]
    fn details_from_element_index() {
        let n = NakshatraDetails::new(8, 2);
        assert_eq!(n.lord, NakshatraLord::Shani);
        assert_eq!(n.deity, "Brihaspati");
        assert_eq!(n.pada, 2);
        let k = KaranaDetails::new(29);
        assert_eq!(k.karana, Karana::Vishti);
        assert!(k.is_vishti);
        assert_eq!(KaranaDetails::new(60).karana_type, KaranaType::Fixed);
        assert_eq!(yoga_quality(17), YogaQuality::Inauspicious);
        assert_eq!(yoga_quality(16), YogaQuality::Auspicious);
    }

    #[test]
    fn kind_names() {
        assert_eq!(ElementKind::from_name("Nakshatra"), Some(ElementKind::Nakshatra));
        assert_eq!(ElementKind::from_name("vara"), None);
    }

    #[test]
    fn synodic_rate() {
        // 360 / 29.53 days
        assert!((ElementKind::Tithi.mean_rate_deg_per_day() - 12.19).abs() < 0.01);
    }
}
