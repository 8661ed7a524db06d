//! Sidereal classification: sign, nakshatra, pada and house of a longitude.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{BOUNDARY_SNAP, arc_forward, normalize_360};

/// Where a longitude falls in the sidereal zodiac and the house frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Sidereal longitude in [0, 360).
    pub sidereal_lon: f64,
    pub sign: Rashi,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// 1..=4
    pub pada: u8,
    /// 1..=12
    pub house: u8,
}

/// House (1..=12) whose circular cusp interval contains `lon`.
///
/// House i spans `[cusps[i], cusps[i+1])`; a longitude exactly on a cusp
/// belongs to the house starting there. Longitudes within the snapping
/// tolerance below a cusp are treated as on it.
pub fn house_of(lon: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(lon);
    let mut best = 0usize;
    let mut best_offset = f64::INFINITY;
    for (i, &cusp) in cusps.iter().enumerate() {
        let mut offset = arc_forward(cusp, lon);
        if 360.0 - offset < BOUNDARY_SNAP {
            offset = 0.0;
        }
        // the containing house is the one whose cusp is nearest behind lon
        if offset < best_offset {
            best_offset = offset;
            best = i;
        }
    }
    best as u8 + 1
}

/// Classify an already-sidereal longitude.
pub fn classify_sidereal(sidereal_lon: f64, cusps: &[f64; 12]) -> Classification {
    let lon = normalize_360(sidereal_lon);
    let rashi = rashi_from_longitude(lon);
    let nak = nakshatra_from_longitude(lon);
    Classification {
        sidereal_lon: lon,
        sign: rashi.rashi,
        degree_in_sign: rashi.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        house: house_of(lon, cusps),
    }
}

/// Classify a tropical longitude: subtract the ayanamsa, then look up sign,
/// nakshatra, pada and house against sidereal `cusps`.
pub fn classify(
    tropical_lon: f64,
    ayanamsa_deg: f64,
    cusps: &[f64; 12],
) -> Result<Classification, VedicError> {
    if !tropical_lon.is_finite() || !ayanamsa_deg.is_finite() {
        return Err(VedicError::InvalidInput("longitude and ayanamsa must be finite"));
    }
    if cusps.iter().any(|c| !c.is_finite()) {
        return Err(VedicError::InvalidInput("house cusps must be finite"));
    }
    Ok(classify_sidereal(tropical_lon - ayanamsa_deg, cusps))
}

/// Whole-sign cusps for a sidereal ascendant: each house is one sign,
/// starting with the ascendant's sign.
pub fn whole_sign_cusps(ascendant_sidereal: f64) -> [f64; 12] {
    let first = rashi_from_longitude(ascendant_sidereal).rashi.start_deg();
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = normalize_360(first + i as f64 * 30.0);
    }
    cusps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aries_cusps() -> [f64; 12] {
        whole_sign_cusps(0.0)
    }

    #[test]
    fn whole_sign_cusps_start_at_lagna_sign() {
        let cusps = whole_sign_cusps(95.0);
        assert!((cusps[0] - 90.0).abs() < 1e-12);
        assert!((cusps[9] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn exact_cusp_belongs_to_house_starting_there() {
        let cusps = aries_cusps();
        assert_eq!(house_of(30.0, &cusps), 2);
        assert_eq!(house_of(29.999_999, &cusps), 1);
        assert_eq!(house_of(0.0, &cusps), 1);
        assert_eq!(house_of(359.999, &cusps), 12);
    }

    #[test]
    fn unequal_cusps_wrap() {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_360(350.0 + i as f64 * 31.0 - if i > 6 { 12.0 } else { 0.0 });
        }
        assert_eq!(house_of(355.0, &cusps), 1);
        assert_eq!(house_of(5.0, &cusps), 1);
        assert_eq!(house_of(cusps[5], &cusps), 6);
    }

    #[test]
    fn classify_subtracts_ayanamsa() {
        let c = classify(280.5, 23.7, &aries_cusps()).unwrap();
        assert!((c.sidereal_lon - 256.8).abs() < 1e-9);
        assert_eq!(c.sign, Rashi::Dhanu);
        assert_eq!(c.house, 9);
        assert_eq!(c.nakshatra, Nakshatra::PurvaAshadha);
    }

    #[test]
    fn classify_rejects_nan() {
        assert!(classify(f64::NAN, 23.0, &aries_cusps()).is_err());
    }

    #[test]
    fn sign_boundary_literal() {
        let c = classify(54.0, 24.0, &aries_cusps()).unwrap();
        assert_eq!(c.sign, Rashi::Vrishabha);
        assert_eq!(c.house, 2);
        assert!(c.degree_in_sign.abs() < 1e-9);
    }
}
