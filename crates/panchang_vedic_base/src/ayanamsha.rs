//! Ayanamsha for 20 sidereal reference systems.
//!
//! The ayanamsha is the arc between the vernal equinox and the zero point of
//! a sidereal zodiac anchored to the fixed stars. It grows as the equinox
//! precesses westward, by roughly 50.3″ per year.
//!
//! Every system reduces to one parameter, its value at J2000.0. The value at
//! any other epoch adds the IAU 2006 general precession in longitude. The
//! true-equinox variant additionally adds nutation in longitude.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use panchang_frames::{general_precession_longitude_deg, nutation};
use panchang_time::{jd_to_centuries, normalize_360};

/// Sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AyanamshaSystem {
    /// Chitrapaksha: Spica at 0° Libra sidereal. Calendar Reform Committee,
    /// 1957; the Indian national almanac standard.
    Lahiri,
    /// Lahiri anchor measured from the true (nutated) equinox.
    TrueLahiri,
    /// Krishnamurti Paddhati.
    KP,
    /// B.V. Raman, zero year near 397 CE.
    Raman,
    /// Fagan-Bradley synetic vernal point, the main Western sidereal system.
    FaganBradley,
    /// δ Cancri (Pushya) at 106° sidereal.
    PushyaPaksha,
    /// Aldebaran at 15°47′ Taurus.
    RohiniPaksha,
    DeLuce,
    DjwalKhul,
    /// From the observations of Hipparchus, about 128 BCE.
    Hipparchos,
    Sassanian,
    DevaDutta,
    UshaShashi,
    /// Sri Yukteshwar, _The Holy Science_ (1894).
    Yukteshwar,
    JnBhasin,
    ChandraHari,
    Jagganatha,
    /// Surya Siddhanta epoch carried forward with IAU precession.
    SuryaSiddhanta,
    /// Galactic centre at 0° Sagittarius.
    GalacticCenter0Sag,
    /// Aldebaran at 15° Taurus.
    Aldebaran15Tau,
}

const ALL_SYSTEMS: [AyanamshaSystem; 20] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::TrueLahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::PushyaPaksha,
    AyanamshaSystem::RohiniPaksha,
    AyanamshaSystem::DeLuce,
    AyanamshaSystem::DjwalKhul,
    AyanamshaSystem::Hipparchos,
    AyanamshaSystem::Sassanian,
    AyanamshaSystem::DevaDutta,
    AyanamshaSystem::UshaShashi,
    AyanamshaSystem::Yukteshwar,
    AyanamshaSystem::JnBhasin,
    AyanamshaSystem::ChandraHari,
    AyanamshaSystem::Jagganatha,
    AyanamshaSystem::SuryaSiddhanta,
    AyanamshaSystem::GalacticCenter0Sag,
    AyanamshaSystem::Aldebaran15Tau,
];

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri | Self::TrueLahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::PushyaPaksha => 21.000,
            Self::RohiniPaksha => 24.087,
            Self::DeLuce => 21.619,
            Self::DjwalKhul => 22.883,
            Self::Hipparchos => 21.176,
            Self::Sassanian => 19.765,
            Self::DevaDutta => 22.474,
            Self::UshaShashi => 20.103,
            Self::Yukteshwar | Self::JnBhasin => 22.376,
            Self::ChandraHari | Self::Jagganatha => 23.250,
            Self::SuryaSiddhanta => 22.459,
            Self::GalacticCenter0Sag => 26.860,
            Self::Aldebaran15Tau => 24.870,
        }
    }

    /// Whether the system is measured from the true equinox of date.
    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Self::TrueLahiri)
    }

    /// Stable identifier used in configuration files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::TrueLahiri => "true_lahiri",
            Self::KP => "kp",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan_bradley",
            Self::PushyaPaksha => "pushya_paksha",
            Self::RohiniPaksha => "rohini_paksha",
            Self::DeLuce => "deluce",
            Self::DjwalKhul => "djwal_khul",
            Self::Hipparchos => "hipparchos",
            Self::Sassanian => "sassanian",
            Self::DevaDutta => "deva_dutta",
            Self::UshaShashi => "usha_shashi",
            Self::Yukteshwar => "yukteshwar",
            Self::JnBhasin => "jn_bhasin",
            Self::ChandraHari => "chandra_hari",
            Self::Jagganatha => "jagganatha",
            Self::SuryaSiddhanta => "surya_siddhanta",
            Self::GalacticCenter0Sag => "galactic_center_0_sag",
            Self::Aldebaran15Tau => "aldebaran_15_tau",
        }
    }

    /// Look up a system by name.
    ///
    /// Case, `-`, `_` and spaces are ignored, so `"True Lahiri"`,
    /// `"true-lahiri"` and `"TrueLahiri"` all resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = fold_name(name);
        ALL_SYSTEMS
            .iter()
            .copied()
            .find(|sys| fold_name(sys.name()) == key)
    }

    /// All 20 systems in declaration order.
    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Serialize for AyanamshaSystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AyanamshaSystem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown ayanamsha system: {name}")))
    }
}

/// Mean ayanamsha in degrees.
///
/// `t_centuries` is Julian centuries since J2000.0.
///
/// `ayanamsha(T) = reference_j2000 + p_A(T)`
pub fn ayanamsha_mean_deg(system: AyanamshaSystem, t_centuries: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_deg(t_centuries)
}

/// True ayanamsha in degrees.
///
/// Adds `delta_psi_arcsec` for true-equinox systems; every other system
/// returns the mean value.
pub fn ayanamsha_true_deg(system: AyanamshaSystem, t_centuries: f64, delta_psi_arcsec: f64) -> f64 {
    let mean = ayanamsha_mean_deg(system, t_centuries);
    if system.uses_true_equinox() {
        mean + delta_psi_arcsec / 3600.0
    } else {
        mean
    }
}

/// Ayanamsha at Julian Date `jd`, evaluating nutation when the system needs it.
pub fn ayanamsha_deg(system: AyanamshaSystem, jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let dpsi = if system.uses_true_equinox() {
        nutation(t).dpsi_arcsec
    } else {
        0.0
    };
    ayanamsha_true_deg(system, t, dpsi)
}

/// Tropical longitude to sidereal, degrees [0, 360).
pub fn to_sidereal(tropical_deg: f64, jd: f64, system: AyanamshaSystem) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg(system, jd))
}
