//! [`PanchangConfig`]: file, environment and defaults.
//!
//! Precedence is defaults < JSON file < `PANCHANG_*` environment variables.

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use panchang_frames::Projection;
use panchang_search::{PanchangOptions, SearchConfig};
use panchang_time::{Tz, parse_timezone};
use panchang_vedic_base::{AyanamshaSystem, CalendarSystem, RiseSetConfig};

use crate::error::ConfigError;
use crate::method::{Method, MethodTable, Profile, Region};

pub const ENV_METHOD: &str = "PANCHANG_METHOD";
pub const ENV_AYANAMSHA: &str = "PANCHANG_AYANAMSHA";
pub const ENV_REGION: &str = "PANCHANG_REGION";
pub const ENV_CALENDAR: &str = "PANCHANG_CALENDAR";
pub const ENV_PROJECTION: &str = "PANCHANG_PROJECTION";
pub const ENV_TIMEZONE: &str = "PANCHANG_TIMEZONE";

/// All user-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanchangConfig {
    pub method: Method,
    pub region: Region,
    /// Used unless the (method, region) profile fixes one. Default: Lahiri.
    pub ayanamsha: AyanamshaSystem,
    /// Overrides the region's customary calendar when set.
    pub calendar_system: Option<CalendarSystem>,
    /// IANA zone for locations that carry none.
    pub timezone: Option<String>,
    pub projection: Projection,
    pub riseset: RiseSetConfig,
    pub search: SearchConfig,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            region: Region::default(),
            ayanamsha: AyanamshaSystem::Lahiri,
            calendar_system: None,
            timezone: None,
            projection: Projection::default(),
            riseset: RiseSetConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl PanchangConfig {
    /// Parse and validate a JSON document. Missing keys take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Overlay `PANCHANG_*` variables from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay settings from any key lookup using the `PANCHANG_*` names.
    /// Empty values are ignored.
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_METHOD) {
            self.method = Method::from_name(&v).ok_or_else(|| invalid("method", &v))?;
        }
        if let Some(v) = get(ENV_AYANAMSHA) {
            self.ayanamsha =
                AyanamshaSystem::from_name(&v).ok_or_else(|| invalid("ayanamsha", &v))?;
        }
        if let Some(v) = get(ENV_REGION) {
            self.region = Region::from_name(&v).ok_or_else(|| invalid("region", &v))?;
        }
        if let Some(v) = get(ENV_CALENDAR) {
            let calendar =
                CalendarSystem::from_name(&v).ok_or_else(|| invalid("calendar_system", &v))?;
            self.calendar_system = Some(calendar);
        }
        if let Some(v) = get(ENV_PROJECTION) {
            self.projection = Projection::from_name(&v).ok_or_else(|| invalid("projection", &v))?;
        }
        if let Some(v) = get(ENV_TIMEZONE) {
            self.timezone = Some(v.trim().to_string());
        }
        self.validate()
    }

    /// Check every setting that serde alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_timezone()?;
        let rs = &self.riseset;
        for (key, value) in [
            ("riseset.refraction_arcmin", rs.refraction_arcmin),
            ("riseset.semidiameter_arcmin", rs.semidiameter_arcmin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(key, &value.to_string()));
            }
        }
        let s = &self.search;
        if s.max_iterations == 0 {
            return Err(invalid("search.max_iterations", "0"));
        }
        for (key, value) in [
            ("search.angle_epsilon_deg", s.angle_epsilon_deg),
            ("search.time_epsilon_days", s.time_epsilon_days),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(key, &value.to_string()));
            }
        }
        Ok(())
    }

    /// The configured fallback zone, parsed.
    pub fn default_timezone(&self) -> Result<Option<Tz>, ConfigError> {
        self.timezone
            .as_deref()
            .map(|name| parse_timezone(name).map_err(|_| invalid("timezone", name)))
            .transpose()
    }

    /// Look up this config's (method, region) profile.
    ///
    /// Pairs missing from `table` fall back to the region's customary
    /// calendar and the configured ayanamsha.
    pub fn profile(&self, table: &MethodTable) -> Profile {
        match table.get(self.method, self.region) {
            Some(profile) => *profile,
            None => {
                warn!(
                    "no profile for ({}, {}); using regional defaults",
                    self.method.name(),
                    self.region.name()
                );
                Profile {
                    calendar_system: self.region.customary_calendar(),
                    ayanamsha: None,
                }
            }
        }
    }

    /// Resolve into the options every computation takes.
    pub fn options(&self, table: &MethodTable) -> PanchangOptions {
        let profile = self.profile(table);
        let ayanamsha = profile.ayanamsha.unwrap_or(self.ayanamsha);
        let calendar_system = self.calendar_system.unwrap_or(profile.calendar_system);
        debug!(
            "resolved ({}, {}) to ayanamsha {} and {} months",
            self.method.name(),
            self.region.name(),
            ayanamsha.name(),
            calendar_system.name()
        );
        PanchangOptions {
            ayanamsha,
            calendar_system,
            riseset: self.riseset,
            search: self.search,
        }
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}
