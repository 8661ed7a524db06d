//! Integration tests for the Vimshottari dasha engine.

use kundali_base::Graha;
use kundali_base::dasha::{
    DAYS_PER_YEAR, DashaLevel, TOTAL_DAYS, active_periods, birth_balance, sandhi_windows,
    vimshottari_hierarchy, vimshottari_snapshot,
};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

const BIRTH_JD: f64 = 2_451_545.0;

/// Moon at the start of Rohini's second pada: Chandra, a quarter elapsed.
#[test]
fn rohini_moon_starts_with_chandra() {
    let h = vimshottari_hierarchy(BIRTH_JD, 40.0 + 10.0 / 3.0, 2).unwrap();
    let maha = h.level(DashaLevel::Mahadasha).unwrap();
    assert_eq!(maha.len(), 9);
    assert_eq!(maha[0].entity, Graha::Chandra);
    assert_eq!(maha[1].entity, Graha::Mangal);

    let remaining = 10.0 * DAYS_PER_YEAR * 0.75;
    assert!((maha[0].end_jd - (BIRTH_JD + remaining)).abs() < EPS);
    assert!((h.balance.elapsed_fraction - 0.25).abs() < 1e-9);
}

#[test]
fn antardashas_follow_rotation_from_parent() {
    let h = vimshottari_hierarchy(BIRTH_JD, 0.0, 2).unwrap();
    let children = h.children_of(0, 1);
    assert_eq!(children.len(), 9);
    assert_eq!(children[0].entity, Graha::Shukra);
    assert_eq!(children[1].entity, Graha::Surya);
    assert_eq!(children[8].entity, Graha::Ketu);
    // Shukra-Shukra: 20 * 20 / 120 years
    let expected = 20.0 * 20.0 / 120.0 * DAYS_PER_YEAR;
    assert!((children[0].duration_days() - expected).abs() < EPS);
}

#[test]
fn snapshot_matches_hierarchy_walk() {
    let h = vimshottari_hierarchy(BIRTH_JD, 123.4, 3).unwrap();
    let now = BIRTH_JD + 12_345.6;
    let walked = active_periods(&h, now);
    let direct = vimshottari_snapshot(BIRTH_JD, 123.4, now, 3).unwrap();
    assert_eq!(walked.periods.len(), 3);
    assert_eq!(walked.periods, direct.periods);
}

#[test]
fn outside_timeline_has_no_active_period() {
    let h = vimshottari_hierarchy(BIRTH_JD, 200.0, 2).unwrap();
    let last_end = h.levels[0].last().unwrap().end_jd;
    assert!(active_periods(&h, last_end + 1.0).periods.is_empty());
}

#[test]
fn sandhi_window_spans_boundary() {
    let h = vimshottari_hierarchy(BIRTH_JD, 77.0, 1).unwrap();
    let windows = sandhi_windows(&h, DashaLevel::Mahadasha);
    assert_eq!(windows.len(), 8);
    for w in &windows {
        assert!(w.start_jd < w.boundary_jd && w.boundary_jd < w.end_jd);
        assert_ne!(w.outgoing, w.incoming);
    }
}

#[test]
fn invalid_depth_rejected() {
    assert!(vimshottari_hierarchy(BIRTH_JD, 10.0, 0).is_err());
    assert!(vimshottari_hierarchy(BIRTH_JD, 10.0, 7).is_err());
}

proptest! {
    #[test]
    fn mahadashas_cover_120_years(moon in 0.0f64..360.0) {
        let h = vimshottari_hierarchy(BIRTH_JD, moon, 1).unwrap();
        let maha = &h.levels[0];
        let span = maha[8].end_jd - maha[0].start_jd;
        prop_assert!((span - TOTAL_DAYS).abs() < 1e-3);
        let balance = birth_balance(moon);
        prop_assert!((maha[0].end_jd - BIRTH_JD - balance.remaining_days).abs() < 1e-6);
    }

    #[test]
    fn children_tile_parent(moon in 0.0f64..360.0, pick in 0usize..9) {
        let h = vimshottari_hierarchy(BIRTH_JD, moon, 2).unwrap();
        let parent = h.levels[0][pick];
        let children = h.children_of(0, pick);
        prop_assert_eq!(children.len(), 9);
        prop_assert!((children[0].start_jd - parent.start_jd).abs() < 1e-9);
        prop_assert!((children[8].end_jd - parent.end_jd).abs() < 1e-9);
        for pair in children.windows(2) {
            prop_assert!((pair[0].end_jd - pair[1].start_jd).abs() < 1e-9);
        }
        let total: f64 = children.iter().map(|c| c.duration_days()).sum();
        prop_assert!((total - parent.duration_days()).abs() < 1e-6);
    }
}
