//! Nakshatra (lunar mansion) and pada lookup.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20', each with
//! 4 padas of 3 deg 20'. Lookups go through the 108 pada units so that the
//! nakshatra and pada of a longitude always agree, including on boundaries.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::{normalize_360, segment_index, signed_delta};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN: f64 = 360.0 / 108.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

/// All 27 nakshatras in order.
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
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

/// Vimshottari lords in nakshatra order, repeating every 9.
const NAKSHATRA_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
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

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS_27[(index % 27) as usize]
    }

    /// Vimshottari dasha lord.
    pub const fn lord(self) -> Graha {
        NAKSHATRA_LORDS[(self.index() % 9) as usize]
    }

    /// Starting sidereal longitude.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_27
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, in [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        (self.degrees_in_nakshatra / NAKSHATRA_SPAN_27).clamp(0.0, 1.0)
    }
}

/// Start of the given pada (0..108) in degrees.
pub fn pada_start_deg(pada_index: u8) -> f64 {
    // multiply before dividing so that pada 4k lands exactly on the nakshatra start
    pada_index as f64 * 10.0 / 3.0
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let pada_index = segment_index(lon, PADA_SPAN, 108) as u8;
    let nakshatra = Nakshatra::from_index(pada_index / 4);
    let pada = pada_index % 4 + 1;
    let degrees_in_nakshatra =
        signed_delta(nakshatra.start_deg(), lon).clamp(0.0, NAKSHATRA_SPAN_27);
    let degrees_in_pada = signed_delta(pada_start_deg(pada_index), lon).clamp(0.0, PADA_SPAN);

    NakshatraInfo {
        nakshatra,
        pada,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}
