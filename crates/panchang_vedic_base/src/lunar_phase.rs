//! Lunar phase from Moon−Sun elongation.

use serde::Serialize;

use panchang_time::normalize_360;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Eight named phases, each a 45° bin centred on its principal elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

const ALL_PHASES: [LunarPhase; 8] = [
    LunarPhase::NewMoon,
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
    LunarPhase::FullMoon,
    LunarPhase::WaningGibbous,
    LunarPhase::LastQuarter,
    LunarPhase::WaningCrescent,
];

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn from_elongation(elongation_deg: f64) -> Self {
        let bin = (normalize_360(elongation_deg + 22.5) / 45.0).floor() as usize;
        ALL_PHASES[bin.min(7)]
    }

    /// Elongation of the four principal phases (0, 90, 180, 270);
    /// `None` for the intermediate ones.
    pub const fn principal_elongation_deg(self) -> Option<f64> {
        match self {
            Self::NewMoon => Some(0.0),
            Self::FirstQuarter => Some(90.0),
            Self::FullMoon => Some(180.0),
            Self::LastQuarter => Some(270.0),
            _ => None,
        }
    }

    /// The principal phase reached next once elongation passes
    /// `elongation_deg`.
    pub fn next_principal(elongation_deg: f64) -> Self {
        match (normalize_360(elongation_deg) / 90.0).floor() as u8 {
            0 => Self::FirstQuarter,
            1 => Self::FullMoon,
            2 => Self::LastQuarter,
            _ => Self::NewMoon,
        }
    }
}

/// Days since new moon at the mean synodic rate.
pub fn mean_age_days(elongation_deg: f64) -> f64 {
    normalize_360(elongation_deg) / 360.0 * SYNODIC_MONTH_DAYS
}

/// Phase summary at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPhaseInfo {
    pub phase: LunarPhase,
    /// Moon − Sun tropical longitude, degrees [0, 360).
    pub elongation_deg: f64,
    /// Illuminated fraction of the disc, 0-1.
    pub illumination: f64,
}

/// Illuminated fraction `(1 - cos Δ) / 2`, treating elongation as phase angle.
pub fn illuminated_fraction(elongation_deg: f64) -> f64 {
    (1.0 - elongation_deg.to_radians().cos()) / 2.0
}

pub fn lunar_phase_info(elongation_deg: f64) -> LunarPhaseInfo {
    let elongation_deg = normalize_360(elongation_deg);
    LunarPhaseInfo {
        phase: LunarPhase::from_elongation(elongation_deg),
        elongation_deg,
        illumination: illuminated_fraction(elongation_deg),
    }
}
