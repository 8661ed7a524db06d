//! Golden values and properties for sidereal classification.

use kundali_base::{
    Nakshatra, Rashi, classify, classify_sidereal, nakshatra_from_longitude,
    rashi_from_longitude, whole_sign_cusps,
};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

#[test]
fn lahiri_offset_moves_sign_back() {
    // 20 deg tropical Aries with a 24 deg ayanamsa is 356 deg sidereal
    let cusps = whole_sign_cusps(0.0);
    let c = classify(20.0, 24.0, &cusps).unwrap();
    assert!((c.sidereal_lon - 356.0).abs() < EPS);
    assert_eq!(c.sign, Rashi::Meena);
    assert_eq!(c.nakshatra, Nakshatra::Revati);
    assert_eq!(c.house, 12);
}

#[test]
fn sign_boundaries_belong_to_upper_sign() {
    for i in 0..12u8 {
        let info = rashi_from_longitude(i as f64 * 30.0);
        assert_eq!(info.rashi.index(), i);
        assert!(info.degrees_in_rashi.abs() < EPS);
    }
}

#[test]
fn classify_splits_adjacent_signs_at_each_start() {
    // Well above the snapping tolerance, so the lower side stays lower.
    const DELTA: f64 = 1e-6;
    let ayanamsa = 23.853_1;
    let cusps = whole_sign_cusps(0.0);
    for i in 0..12u8 {
        let start = i as f64 * 30.0;
        let below = classify(start - DELTA + ayanamsa, ayanamsa, &cusps).unwrap();
        let at = classify(start + ayanamsa, ayanamsa, &cusps).unwrap();
        assert_eq!(below.sign.index(), (i + 11) % 12, "below sign start {i}");
        assert_eq!(at.sign.index(), i, "at sign start {i}");
        assert_eq!(at.house, i + 1);
        assert_eq!(below.house, (i + 11) % 12 + 1);
        assert!(at.degree_in_sign < 1e-6, "{}", at.degree_in_sign);
    }
}

#[test]
fn rounding_below_boundary_snaps_up() {
    let lon = 30.0 - 1e-12;
    assert_eq!(rashi_from_longitude(lon).rashi, Rashi::Vrishabha);
    let nak = nakshatra_from_longitude(40.0 - 1e-12);
    assert_eq!(nak.nakshatra, Nakshatra::Rohini);
    assert_eq!(nak.pada, 1);
}

#[test]
fn golden_nakshatra_padas() {
    let cases = [
        (0.0, Nakshatra::Ashwini, 1),
        (3.5, Nakshatra::Ashwini, 2),
        (13.0, Nakshatra::Ashwini, 4),
        (100.0, Nakshatra::Pushya, 3),
        (200.0, Nakshatra::Vishakha, 1),
        (359.9, Nakshatra::Revati, 4),
    ];
    for (lon, nak, pada) in cases {
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra, nak, "lon {lon}");
        assert_eq!(info.pada, pada, "lon {lon}");
    }
}

#[test]
fn exact_cusp_belongs_to_house_it_starts() {
    let cusps = whole_sign_cusps(95.0);
    let c = classify_sidereal(120.0, &cusps);
    assert_eq!(c.house, 2);
    let c = classify_sidereal(89.999, &cusps);
    assert_eq!(c.house, 12);
}

#[test]
fn non_finite_input_rejected() {
    let cusps = whole_sign_cusps(0.0);
    assert!(classify(f64::NAN, 24.0, &cusps).is_err());
    assert!(classify(10.0, f64::INFINITY, &cusps).is_err());
}

proptest! {
    #[test]
    fn classification_is_periodic(lon in 0.0f64..360.0, k in -3i32..4) {
        let cusps = whole_sign_cusps(123.0);
        let a = classify_sidereal(lon, &cusps);
        let b = classify_sidereal(lon + 360.0 * k as f64, &cusps);
        prop_assert_eq!(a.sign, b.sign);
        prop_assert_eq!(a.nakshatra, b.nakshatra);
        prop_assert_eq!(a.pada, b.pada);
        prop_assert_eq!(a.house, b.house);
    }

    #[test]
    fn padas_partition_the_circle(lon in 0.0f64..360.0) {
        let info = nakshatra_from_longitude(lon);
        let pada_index = info.nakshatra.index() as u32 * 4 + info.pada as u32 - 1;
        let start = pada_index as f64 * 10.0 / 3.0;
        prop_assert!(lon >= start - 1e-6);
        prop_assert!(lon < start + 10.0 / 3.0 + 1e-6);
        prop_assert!((1..=4).contains(&info.pada));
    }

    #[test]
    fn sign_and_degree_recompose(lon in 0.0f64..360.0) {
        let info = rashi_from_longitude(lon);
        let back = info.rashi.index() as f64 * 30.0 + info.degrees_in_rashi;
        prop_assert!((back - lon).abs() < 1e-6);
    }
}
