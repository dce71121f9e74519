//! Tithi (lunar day) classification from Moon−Sun elongation.
//!
//! The synodic month is divided into 30 tithis of 12° elongation each.
//! Tithis 1-15 form the Shukla (waxing) paksha ending at Purnima, 16-30 the
//! Krishna (waning) paksha ending at Amavasya.

use serde::{Deserialize, Serialize};

use panchang_time::normalize_360;

/// Elongation span of one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day names within a paksha, 1st through 14th.
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 0-based index (Shukla Pratipada = 0 .. Amavasya = 29).
    pub fn index(self) -> u8 {
        // declaration order matches ALL_TITHIS
        self as u8
    }

    /// 1-based tithi number (1..=30).
    pub fn number(self) -> u8 {
        self.index() + 1
    }

    pub fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the paksha (1..=15).
    pub fn tithi_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Traditional name without the paksha prefix.
    pub fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            other => PAKSHA_DAY_NAMES[usize::from(other.tithi_in_paksha() - 1)],
        }
    }

    pub fn class(self) -> TithiClass {
        TithiClass::from_tithi_in_paksha(self.tithi_in_paksha())
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

/// Five-fold grouping of the days of a paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TithiClass {
    /// 1, 6, 11
    Nanda,
    /// 2, 7, 12
    Bhadra,
    /// 3, 8, 13
    Jaya,
    /// 4, 9, 14
    Rikta,
    /// 5, 10, 15
    Purna,
}

impl TithiClass {
    /// Class of the `n`th day (1..=15) of a paksha.
    pub fn from_tithi_in_paksha(n: u8) -> Self {
        match n.saturating_sub(1) % 5 {
            0 => Self::Nanda,
            1 => Self::Bhadra,
            2 => Self::Jaya,
            3 => Self::Rikta,
            _ => Self::Purna,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanda => "Nanda",
            Self::Bhadra => "Bhadra",
            Self::Jaya => "Jaya",
            Self::Rikta => "Rikta",
            Self::Purna => "Purna",
        }
    }
}

/// Lunar month convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSystem {
    /// Months end at new moon; used in South and West India.
    #[default]
    Amanta,
    /// Months end at full moon; used in North India.
    Purnimanta,
}

impl CalendarSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amanta => "amanta",
            Self::Purnimanta => "purnimanta",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "amanta" | "amavasyant" => Some(Self::Amanta),
            "purnimanta" | "purnimant" => Some(Self::Purnimanta),
            _ => None,
        }
    }

    /// Day of the lunar month (1..=30) on which `tithi` falls.
    ///
    /// Amanta months open with Shukla Pratipada. Purnimanta months open with
    /// Krishna Pratipada, so the numbering is rotated by one paksha.
    pub fn month_day(self, tithi: Tithi) -> u8 {
        match self {
            Self::Amanta => tithi.number(),
            Self::Purnimanta => (tithi.index() + 15) % TITHI_COUNT + 1,
        }
    }
}

/// Tithi position at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based day within the paksha (1..=15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation elapsed in this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify a Moon−Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(TITHI_COUNT - 1);
    let tithi = ALL_TITHIS[usize::from(idx)];
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.tithi_in_paksha(),
        degrees_in_tithi: elong - f64::from(idx) * TITHI_SEGMENT_DEG,
    }
}
