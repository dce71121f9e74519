//! Karana (half-tithi) classification.
//!
//! The 60 karanas of a synodic month are 6° elongation segments. Four are
//! fixed (sthira): Kimstughna opens the month and Shakuni, Chatushpada and
//! Naga close it. The 56 between them cycle through the seven movable
//! (chara) karanas eight times.

use serde::Serialize;

use panchang_time::normalize_360;

/// Elongation span of one karana in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

pub const KARANA_COUNT: u8 = 60;

/// Whether a karana recurs through the month or holds one fixed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KaranaType {
    /// Chara: one of the seven that cycle eight times a month.
    Movable,
    /// Sthira: occurs once, around the new moon.
    Fixed,
}

impl KaranaType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Movable => "movable",
            Self::Fixed => "fixed",
        }
    }
}

/// The eleven karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// Movable karanas in cycle order.
const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this karana occurs once per month at a fixed position.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    pub const fn karana_type(self) -> KaranaType {
        if self.is_fixed() {
            KaranaType::Fixed
        } else {
            KaranaType::Movable
        }
    }

    /// Vishti (Bhadra), avoided for new undertakings.
    pub const fn is_vishti(self) -> bool {
        matches!(self, Self::Vishti)
    }

    /// Karana at 1-based month position `number` (1..=60).
    pub fn from_number(number: u8) -> Self {
        match number {
            0 | 1 => Self::Kimstughna,
            58 => Self::Shakuni,
            59 => Self::Chatushpada,
            60.. => Self::Naga,
            n => MOVABLE[usize::from((n - 2) % 7)],
        }
    }
}

/// Karana position at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based position within the month (0..59).
    pub karana_index: u8,
    /// Degrees into the karana [0, 6).
    pub degrees_in_karana: f64,
}

/// Classify a Moon−Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / KARANA_SEGMENT_DEG).floor() as u8).min(KARANA_COUNT - 1);
    KaranaPosition {
        karana: Karana::from_number(idx + 1),
        karana_index: idx,
        degrees_in_karana: elong - f64::from(idx) * KARANA_SEGMENT_DEG,
    }
}
