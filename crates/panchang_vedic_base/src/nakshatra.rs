//! Nakshatra (lunar mansion) classification.
//!
//! The sidereal ecliptic is cut into 27 equal nakshatras of 13°20′, each
//! split into 4 padas of 3°20′. Classification always uses the Moon's
//! sidereal longitude.

use serde::Serialize;

use panchang_time::normalize_360;

use crate::ayanamsha::{AyanamshaSystem, to_sidereal};

/// Span of one nakshatra: 360/27 = 13.333… degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: 3.333… degrees.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// Number of nakshatras.
pub const NAKSHATRA_COUNT: u8 = 27;

/// Grahas ruling the nakshatras in Vimshottari order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NakshatraLord {
    Ketu,
    Shukra,
    Surya,
    Chandra,
    Mangal,
    Rahu,
    Guru,
    Shani,
    Buddh,
}

/// Lordship repeats every nine nakshatras, starting from Ashwini.
const VIMSHOTTARI_ORDER: [NakshatraLord; 9] = [
    NakshatraLord::Ketu,
    NakshatraLord::Shukra,
    NakshatraLord::Surya,
    NakshatraLord::Chandra,
    NakshatraLord::Mangal,
    NakshatraLord::Rahu,
    NakshatraLord::Guru,
    NakshatraLord::Shani,
    NakshatraLord::Buddh,
];

impl NakshatraLord {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ketu => "Ketu",
            Self::Shukra => "Shukra",
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Rahu => "Rahu",
            Self::Guru => "Guru",
            Self::Shani => "Shani",
            Self::Buddh => "Buddh",
        }
    }
}

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (1..=27).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }

    /// Ruling graha.
    pub const fn lord(self) -> NakshatraLord {
        VIMSHOTTARI_ORDER[(self.index() % 9) as usize]
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashvini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitrs",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Tvashtar",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indragni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirriti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishvedevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishtha => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Aja Ekapada",
            Self::UttaraBhadrapada => "Ahirbudhnya",
            Self::Revati => "Pushan",
        }
    }

    /// Traditional symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ashwini => "horse head",
            Self::Bharani => "yoni",
            Self::Krittika => "razor",
            Self::Rohini => "chariot",
            Self::Mrigashira => "deer head",
            Self::Ardra => "teardrop",
            Self::Punarvasu => "quiver of arrows",
            Self::Pushya => "cow udder",
            Self::Ashlesha => "coiled serpent",
            Self::Magha => "royal throne",
            Self::PurvaPhalguni => "front legs of a bed",
            Self::UttaraPhalguni => "back legs of a bed",
            Self::Hasta => "open hand",
            Self::Chitra => "pearl",
            Self::Swati => "sprouting shoot",
            Self::Vishakha => "triumphal gateway",
            Self::Anuradha => "lotus",
            Self::Jyeshtha => "earring",
            Self::Mula => "tied roots",
            Self::PurvaAshadha => "winnowing fan",
            Self::UttaraAshadha => "elephant tusk",
            Self::Shravana => "three footprints",
            Self::Dhanishtha => "drum",
            Self::Shatabhisha => "empty circle",
            Self::PurvaBhadrapada => "front of a funeral cot",
            Self::UttaraBhadrapada => "back of a funeral cot",
            Self::Revati => "pair of fish",
        }
    }
}

/// Nakshatra position at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Quarter within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees into the nakshatra [0, 13.333…).
    pub degrees_in_nakshatra: f64,
    /// Degrees into the pada [0, 3.333…).
    pub degrees_in_pada: f64,
}

/// Nakshatra and pada from a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(NAKSHATRA_COUNT - 1);
    let degrees_in_nakshatra = lon - f64::from(idx) * NAKSHATRA_SPAN_DEG;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN_DEG).floor() as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[usize::from(idx)],
        nakshatra_index: idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada: degrees_in_nakshatra - f64::from(pada_idx) * PADA_SPAN_DEG,
    }
}

/// Nakshatra from a tropical longitude, applying the ayanamsha at `jd`.
pub fn nakshatra_from_tropical(
    tropical_lon_deg: f64,
    jd: f64,
    system: AyanamshaSystem,
) -> NakshatraInfo {
    nakshatra_from_longitude(to_sidereal(tropical_lon_deg, jd, system))
}
