//! [`Panchangam`]: a resolved configuration and the calls that use it.

use chrono::NaiveDate;
use log::debug;

use panchang_config::{MethodTable, PanchangConfig};
use panchang_search::{
    DayPanchang, LunarCycle, MoonRiseSet, PanchangInfo, PanchangOptions, SearchContext,
    SkyPosition, TraceHook, compute_panchangam, compute_sky_positions_traced, day_panchang,
    lunar_cycle_at, moon_rise_set,
};
use panchang_time::{Instant, Tz};
use panchang_validate::{ValidationCase, ValidationSuite};
use panchang_vedic_base::{GeoLocation, SolarDayWindow, solar_day_window};

use crate::error::PanchangError;

/// Request object holding a configuration resolved once through the
/// (method, region) table.
#[derive(Debug, Clone)]
pub struct Panchangam {
    config: PanchangConfig,
    options: PanchangOptions,
    default_tz: Option<Tz>,
}

impl Panchangam {
    /// Validate `config` and resolve it with the standard method table.
    pub fn new(config: PanchangConfig) -> Result<Self, PanchangError> {
        Self::with_table(config, &MethodTable::standard())
    }

    pub fn with_table(config: PanchangConfig, table: &MethodTable) -> Result<Self, PanchangError> {
        config.validate()?;
        let default_tz = config.default_timezone()?;
        let options = config.options(table);
        debug!(
            "panchangam ready: ayanamsha {}, {} months",
            options.ayanamsha.name(),
            options.calendar_system.name()
        );
        Ok(Self {
            config,
            options,
            default_tz,
        })
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    pub fn options(&self) -> &PanchangOptions {
        &self.options
    }

    /// Build a location, attaching the configured timezone.
    pub fn location(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<GeoLocation, PanchangError> {
        Ok(self.localize(&GeoLocation::new(latitude_deg, longitude_deg, altitude_m)?))
    }

    /// Civil time in the configured zone, or UTC.
    pub fn instant(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Instant, PanchangError> {
        let tz = self.default_tz.unwrap_or(Tz::UTC);
        Ok(Instant::from_civil(year, month, day, hour, minute, second, tz)?)
    }

    /// `location`, with the configured zone filled in when it has none.
    fn localize(&self, location: &GeoLocation) -> GeoLocation {
        match (location.timezone, self.default_tz) {
            (None, Some(tz)) => location.with_timezone(tz),
            _ => *location,
        }
    }

    /// Elements, vaar, hora, daylight, muhurta windows and the Moon at one
    /// moment.
    pub fn compute_panchangam(
        &self,
        instant: &Instant,
        location: &GeoLocation,
        trace: Option<&dyn TraceHook>,
    ) -> PanchangInfo {
        compute_panchangam(instant, &self.localize(location), &self.options, trace)
    }

    /// Sun and Moon in the observer's sky, in the configured projection.
    pub fn compute_sky_positions(
        &self,
        instant: &Instant,
        location: &GeoLocation,
        trace: Option<&dyn TraceHook>,
    ) -> Vec<SkyPosition> {
        compute_sky_positions_traced(instant, location, self.config.projection, trace)
    }

    /// Sunrise-anchored listing of every element for a civil date.
    pub fn day_panchang(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        trace: Option<&dyn TraceHook>,
    ) -> DayPanchang {
        day_panchang(date, &self.localize(location), &self.options, trace)
    }

    /// Sunrise, solar noon and sunset of a civil date, in the location's
    /// zone (or the configured one, or UTC).
    pub fn solar_day_window(&self, date: NaiveDate, location: &GeoLocation) -> SolarDayWindow {
        let tz = self.localize(location).timezone.unwrap_or(Tz::UTC);
        solar_day_window(date, location, tz, &self.options.riseset)
    }

    /// Moonrise and moonset over the local civil day of `date`.
    pub fn moon_rise_set(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        trace: Option<&dyn TraceHook>,
    ) -> MoonRiseSet {
        let location = self.localize(location);
        let tz = location.timezone.unwrap_or(Tz::UTC);
        let ctx = SearchContext::new(&self.options, tz).with_trace(trace);
        moon_rise_set(date, &location, &self.options.riseset, &ctx)
    }

    /// Lunar age, last new moon and next principal phase at `instant`,
    /// shown in the instant's zone.
    pub fn lunar_cycle(&self, instant: &Instant, trace: Option<&dyn TraceHook>) -> LunarCycle {
        let ctx = SearchContext::new(&self.options, instant.timezone()).with_trace(trace);
        lunar_cycle_at(instant.julian_day(), &ctx)
    }

    /// Run `cases` with the resolved ayanamsha.
    pub fn validate(&self, cases: &[ValidationCase]) -> ValidationSuite {
        ValidationSuite::run(cases, self.options.ayanamsha)
    }
}
