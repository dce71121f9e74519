//! Vaar (weekday) and hora (planetary hour).
//!
//! The Vedic day runs sunrise to sunrise, so the vaar is the civil weekday
//! of the sunrise. The day is divided into 24 equal horas whose lords
//! follow the Chaldean order starting from the vaar lord.

use chrono::Weekday;
use serde::Serialize;

/// Number of horas in one sunrise-to-sunrise day.
pub const HORA_COUNT: u8 = 24;

/// Weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        ALL_VAARS[weekday.num_days_from_sunday() as usize]
    }

    /// Planetary lord of the day.
    pub const fn lord(self) -> Hora {
        match self {
            Self::Ravivaar => Hora::Surya,
            Self::Somvaar => Hora::Chandra,
            Self::Mangalvaar => Hora::Mangal,
            Self::Budhvaar => Hora::Buddh,
            Self::Guruvaar => Hora::Guru,
            Self::Shukravaar => Hora::Shukra,
            Self::Shanivaar => Hora::Shani,
        }
    }
}

/// Hora lords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hora {
    Surya,
    Shukra,
    Buddh,
    Chandra,
    Shani,
    Guru,
    Mangal,
}

/// Chaldean order, each hora lord followed by the next.
pub const CHALDEAN_SEQUENCE: [Hora; 7] = [
    Hora::Surya,
    Hora::Shukra,
    Hora::Buddh,
    Hora::Chandra,
    Hora::Shani,
    Hora::Guru,
    Hora::Mangal,
];

impl Hora {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Shukra => "Shukra",
            Self::Buddh => "Buddh",
            Self::Chandra => "Chandra",
            Self::Shani => "Shani",
            Self::Guru => "Guru",
            Self::Mangal => "Mangal",
        }
    }

    /// Position in [`CHALDEAN_SEQUENCE`].
    const fn chaldean_position(self) -> usize {
        self as usize
    }
}

/// Lord of the `hora_index`th hora (0-based) of a day ruled by `vaar`.
pub fn hora_at(vaar: Vaar, hora_index: u8) -> Hora {
    let start = vaar.lord().chaldean_position();
    CHALDEAN_SEQUENCE[(start + usize::from(hora_index)) % 7]
}
