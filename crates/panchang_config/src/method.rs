//! Calculation method and regional profile table.
//!
//! A request names a [`Method`] and a [`Region`]; the pair is looked up once
//! in a [`MethodTable`] to obtain the calendar system and ayanamsha used for
//! every computation of that request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use panchang_vedic_base::{AyanamshaSystem, CalendarSystem};

/// How sidereal positions are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Observational positions with the configured ayanamsha.
    #[default]
    Drik,
    /// Observational positions, always Lahiri (Chitrapaksha).
    Lahiri,
}

pub const ALL_METHODS: [Method; 2] = [Method::Drik, Method::Lahiri];

impl Method {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Drik => "drik",
            Self::Lahiri => "lahiri",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_METHODS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Regional convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Global,
    NorthIndia,
    SouthIndia,
    TamilNadu,
    Kerala,
    Karnataka,
    AndhraPradesh,
    Telangana,
    Maharashtra,
    Gujarat,
    Bengal,
}

pub const ALL_REGIONS: [Region; 11] = [
    Region::Global,
    Region::NorthIndia,
    Region::SouthIndia,
    Region::TamilNadu,
    Region::Kerala,
    Region::Karnataka,
    Region::AndhraPradesh,
    Region::Telangana,
    Region::Maharashtra,
    Region::Gujarat,
    Region::Bengal,
];

impl Region {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::NorthIndia => "north_india",
            Self::SouthIndia => "south_india",
            Self::TamilNadu => "tamil_nadu",
            Self::Kerala => "kerala",
            Self::Karnataka => "karnataka",
            Self::AndhraPradesh => "andhra_pradesh",
            Self::Telangana => "telangana",
            Self::Maharashtra => "maharashtra",
            Self::Gujarat => "gujarat",
            Self::Bengal => "bengal",
        }
    }

    /// Parse a region name; spaces and hyphens are accepted for underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        ALL_REGIONS.iter().copied().find(|r| r.name() == key)
    }

    /// Lunar month convention customary in the region.
    pub const fn customary_calendar(self) -> CalendarSystem {
        match self {
            Self::SouthIndia
            | Self::TamilNadu
            | Self::Kerala
            | Self::Karnataka
            | Self::AndhraPradesh
            | Self::Telangana => CalendarSystem::Amanta,
            _ => CalendarSystem::Purnimanta,
        }
    }
}

/// Settings a (method, region) pair resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub calendar_system: CalendarSystem,
    /// Fixed ayanamsha; `None` defers to the configured one.
    pub ayanamsha: Option<AyanamshaSystem>,
}

/// Lookup table from (method, region) to [`Profile`].
#[derive(Debug, Clone)]
pub struct MethodTable {
    entries: HashMap<(Method, Region), Profile>,
}

impl MethodTable {
    /// Every method paired with every region.
    pub fn standard() -> Self {
        let mut entries = HashMap::with_capacity(ALL_METHODS.len() * ALL_REGIONS.len());
        for method in ALL_METHODS {
            let ayanamsha = match method {
                Method::Drik => None,
                Method::Lahiri => Some(AyanamshaSystem::Lahiri),
            };
            for region in ALL_REGIONS {
                entries.insert(
                    (method, region),
                    Profile {
                        calendar_system: region.customary_calendar(),
                        ayanamsha,
                    },
                );
            }
        }
        Self { entries }
    }

    pub fn get(&self, method: Method, region: Region) -> Option<&Profile> {
        self.entries.get(&(method, region))
    }

    /// Replace or add one entry.
    pub fn insert(&mut self, method: Method, region: Region, profile: Profile) {
        self.entries.insert((method, region), profile);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn south_indian_states_use_amanta() {
        let table = MethodTable::standard();
        for region in [Region::TamilNadu, Region::Kerala, Region::Karnataka] {
            let p = table.get(Method::Drik, region).unwrap();
            assert_eq!(p.calendar_system, CalendarSystem::Amanta, "{region:?}");
        }
        for region in [Region::NorthIndia, Region::Gujarat, Region::Global] {
            let p = table.get(Method::Drik, region).unwrap();
            assert_eq!(p.calendar_system, CalendarSystem::Purnimanta, "{region:?}");
        }
    }

    #[test]
    fn lahiri_method_pins_ayanamsha() {
        let table = MethodTable::standard();
        assert_eq!(table.len(), ALL_METHODS.len() * ALL_REGIONS.len());
        assert_eq!(table.get(Method::Drik, Region::Bengal).unwrap().ayanamsha, None);
        assert_eq!(
            table.get(Method::Lahiri, Region::Bengal).unwrap().ayanamsha,
            Some(AyanamshaSystem::Lahiri)
        );
    }

    #[test]
    fn insert_overrides_entry() {
        let mut table = MethodTable::standard();
        let custom = Profile {
            calendar_system: CalendarSystem::Amanta,
            ayanamsha: Some(AyanamshaSystem::Raman),
        };
        table.insert(Method::Drik, Region::Maharashtra, custom);
        assert_eq!(table.get(Method::Drik, Region::Maharashtra), Some(&custom));
    }

    #[test]
    fn region_names_parse_loosely() {
        assert_eq!(Region::from_name("Tamil Nadu"), Some(Region::TamilNadu));
        assert_eq!(Region::from_name("andhra-pradesh"), Some(Region::AndhraPradesh));
        assert_eq!(Region::from_name("atlantis"), None);
        for r in ALL_REGIONS {
            assert_eq!(Region::from_name(r.name()), Some(r));
        }
        assert_eq!(Method::from_name("DRIK"), Some(Method::Drik));
    }
}
