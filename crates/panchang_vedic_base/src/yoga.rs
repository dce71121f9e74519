//! Yoga from the sum of sidereal Sun and Moon longitudes.

use serde::Serialize;

use panchang_time::normalize_360;

/// Span of one yoga: 360/27 degrees of longitude sum.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

pub const YOGA_COUNT: u8 = 27;

/// Traditional standing of a yoga for starting work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaQuality {
    Auspicious,
    Inauspicious,
    Mixed,
}

impl YogaQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "auspicious",
            Self::Inauspicious => "inauspicious",
            Self::Mixed => "mixed",
        }
    }
}

/// The 27 yogas from Vishkambha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkambha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }

    pub const fn quality(self) -> YogaQuality {
        match self {
            Self::Vishkambha
            | Self::Atiganda
            | Self::Shula
            | Self::Ganda
            | Self::Vyaghata
            | Self::Vyatipata
            | Self::Parigha
            | Self::Vaidhriti => YogaQuality::Inauspicious,
            Self::Vajra | Self::Variyan => YogaQuality::Mixed,
            _ => YogaQuality::Auspicious,
        }
    }
}

/// Yoga position at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based index (0..26).
    pub yoga_index: u8,
    /// Degrees into the yoga [0, 13.333…).
    pub degrees_in_yoga: f64,
}

/// Classify a sidereal longitude sum (Sun + Moon) in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let sum = normalize_360(sum_deg);
    let idx = ((sum / YOGA_SEGMENT_DEG).floor() as u8).min(YOGA_COUNT - 1);
    YogaPosition {
        yoga: ALL_YOGAS[usize::from(idx)],
        yoga_index: idx,
        degrees_in_yoga: sum - f64::from(idx) * YOGA_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(359.99).yoga, Yoga::Vaidhriti);
    }

    #[test]
    fn sum_wraps_modulo_360() {
        // 300 + 100.5 = 400.5, i.e. 40.5, half a degree into Saubhagya
        let p = yoga_from_sum(400.5);
        assert_eq!(p.yoga, Yoga::Saubhagya);
        assert!((p.degrees_in_yoga - 0.5).abs() < 1e-9);
    }

    #[test]
    fn quality_table() {
        let count = |q| Yoga::all().iter().filter(|y| y.quality() == q).count();
        assert_eq!(count(YogaQuality::Inauspicious), 8);
        assert_eq!(count(YogaQuality::Mixed), 2);
        assert_eq!(count(YogaQuality::Auspicious), 17);
        assert_eq!(Yoga::Siddhi.quality(), YogaQuality::Auspicious);
        assert_eq!(Yoga::Vaidhriti.quality(), YogaQuality::Inauspicious);
        assert_eq!(Yoga::Vajra.quality().name(), "mixed");
    }

    #[test]
    fn vyatipata_segment() {
        let p = yoga_from_sum(16.0 * YOGA_SEGMENT_DEG + 5.0);
        assert_eq!(p.yoga, Yoga::Vyatipata);
        assert_eq!(p.yoga.number(), 17);
    }
}
