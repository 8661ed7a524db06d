//! Pure-math Vedic astrology core.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra tables and sidereal classification
//! - Ayanamsha, lagna/MC and house (bhava) division strategies
//! - Dignities, combustion and divisional charts
//! - Aspects (geometric and graha drishti)
//! - Shadbala, yoga detection, Vimshottari dasha and ashtakavarga
//!
//! No I/O and no logging: every function is deterministic over its inputs.

pub mod ashtakavarga;
pub mod ayanamsha;
pub mod bhava;
pub mod classify;
pub mod combustion;
pub mod dasha;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod varga;
pub mod yoga;

pub use ashtakavarga::{
    ALL_ASHTAKA_BODIES, AshtakaBody, AshtakavargaResult, AshtakavargaRules, BhinnaAshtakavarga,
    SarvaAshtakavarga, ashtakavarga, calculate_all_bav, calculate_bav, calculate_sav,
};
pub use ayanamsha::{AyanamshaSystem, J2000_JD, ayanamsha_deg, jd_to_centuries};
pub use bhava::{ALL_BHAVA_SYSTEMS, BhavaSystem, HouseSystem, MAX_LATITUDE_DEG};
pub use classify::{Classification, classify, classify_sidereal, house_of, whole_sign_cusps};
pub use combustion::{combustion_threshold, is_combust};
pub use drishti::{
    Aspect, AspectInput, AspectKind, AspectTable, Drishti, OrbTable, aspects, aspects_sign,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Body, Graha, OuterBody, SAPTA_GRAHAS, ketu_from_rahu};
pub use graha_relationships::{BeneficNature, Dignity, dignity_in_rashi, dignity_with_positions};
pub use lagna::{lagna_and_mc_deg, lagna_longitude_rad, mc_longitude_rad};
pub use nakshatra::{Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{Element, Modality, Rashi, RashiInfo, rashi_from_longitude};
pub use shadbala::{
    DayNight, NEUTRAL_VIRUPA, ShadbalaComponent, ShadbalaConstants, ShadbalaInputs, ShadbalaResult,
    StrengthBands, StrengthRating, all_shadbalas, shadbala,
};
pub use util::normalize_360;
pub use varga::{SAPTAVARGA, Varga, varga_rashi};
pub use yoga::{Placement, YOGA_RULES, Yoga, YogaCategory, YogaContext, detect_yogas};
