//! Vimshottari dasha: nine lords over a 120-year cycle, rooted at the
//! Moon's nakshatra lord.

use crate::error::VedicError;
use crate::graha::Graha;

use super::balance::birth_balance;
use super::query::find_active_period;
use super::subperiod::proportional_children;
use super::types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL,
    MAX_PERIODS_PER_LEVEL,
};

/// Lords and their years, in rotation order.
pub const VIMSHOTTARI_YEARS: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

pub const TOTAL_YEARS: f64 = 120.0;

pub const TOTAL_DAYS: f64 = TOTAL_YEARS * DAYS_PER_YEAR;

/// Position of `graha` in the rotation.
pub fn sequence_position(graha: Graha) -> u8 {
    VIMSHOTTARI_YEARS
        .iter()
        .position(|(g, _)| *g == graha)
        .unwrap_or(0) as u8
}

/// Full mahadasha length of `graha` in days.
pub fn period_days(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_position(graha) as usize].1 * DAYS_PER_YEAR
}

fn sequence_days() -> [(Graha, f64); 9] {
    VIMSHOTTARI_YEARS.map(|(g, y)| (g, y * DAYS_PER_YEAR))
}

/// The nine mahadashas. The first starts before birth by the elapsed part
/// of its period, so the level always spans the full 120 years.
pub fn mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = birth_balance(moon_sidereal_lon);
    let first_end = birth_jd + balance.remaining_days;
    let first_start = first_end - period_days(balance.lord);

    let mut periods = Vec::with_capacity(9);
    let mut cursor = first_start;
    for i in 0..9 {
        let (graha, years) = VIMSHOTTARI_YEARS[(balance.sequence_index as usize + i) % 9];
        let end = if i == 0 { first_end } else { cursor + years * DAYS_PER_YEAR };
        periods.push(DashaPeriod {
            entity: graha,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: i as u16 + 1,
            parent_idx: 0,
        });
        cursor = end;
    }
    periods
}

/// All children of one parent period.
pub fn children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    match parent.level.child_level() {
        Some(level) => proportional_children(parent, &sequence_days(), TOTAL_DAYS, level, parent_idx),
        None => Vec::new(),
    }
}

/// Complete level N from all periods at level N-1.
pub fn complete_level(parent_level: &[DashaPeriod]) -> Result<Vec<DashaPeriod>, VedicError> {
    let estimated = parent_level.len() * VIMSHOTTARI_YEARS.len();
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(VedicError::InvalidInput(
            "dasha level would exceed MAX_PERIODS_PER_LEVEL",
        ));
    }
    let mut result = Vec::with_capacity(estimated);
    for (pidx, parent) in parent_level.iter().enumerate() {
        result.extend(children(parent, pidx as u32));
    }
    Ok(result)
}

fn check_level(max_level: u8) -> Result<(), VedicError> {
    if max_level == 0 || max_level > MAX_DASHA_LEVEL {
        return Err(VedicError::InvalidInput("dasha level must be 1-6"));
    }
    Ok(())
}

/// Birth balance, then every level from 1 to `max_level`.
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    check_level(max_level)?;
    if !birth_jd.is_finite() || !moon_sidereal_lon.is_finite() {
        return Err(VedicError::InvalidInput("non-finite birth jd or moon longitude"));
    }
    let mut levels = vec![mahadashas(birth_jd, moon_sidereal_lon)];
    for depth in 1..max_level as usize {
        let next = complete_level(&levels[depth - 1])?;
        levels.push(next);
    }
    Ok(DashaHierarchy {
        birth_jd,
        balance: birth_balance(moon_sidereal_lon),
        levels,
    })
}

/// Active chain at `query_jd` without materializing the full hierarchy.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    max_level: u8,
) -> Result<DashaSnapshot, VedicError> {
    check_level(max_level)?;
    let mut periods = Vec::with_capacity(max_level as usize);
    let mut siblings = mahadashas(birth_jd, moon_sidereal_lon);
    // Index of the first sibling within its full level.
    let mut level_offset = 0usize;
    for _ in 0..max_level {
        let Some(idx) = find_active_period(&siblings, query_jd) else {
            break;
        };
        let active = siblings[idx];
        let global = level_offset + idx;
        periods.push(active);
        siblings = children(&active, global as u32);
        level_offset = global * VIMSHOTTARI_YEARS.len();
    }
    Ok(DashaSnapshot { query_jd, periods })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;
    const BIRTH: f64 = 2447892.5;

    #[test]
    fn years_sum_to_cycle() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().map(|(_, y)| y).sum();
        assert!((total - TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn mahadashas_span_full_cycle() {
        for moon in [0.0, 47.3, 133.0, 359.9] {
            let p = mahadashas(BIRTH, moon);
            let span = p[8].end_jd - p[0].start_jd;
            assert!((span - TOTAL_DAYS).abs() < EPS, "moon {moon}");
        }
    }

    #[test]
    fn first_period_elapsed_matches_moon() {
        let moon = 45.0; // Rohini, 5 deg in
        let p = mahadashas(BIRTH, moon);
        assert_eq!(p[0].entity, Graha::Chandra);
        let elapsed = (BIRTH - p[0].start_jd) / p[0].duration_days();
        assert!((elapsed - 5.0 / (40.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn rotation_wraps() {
        let p = mahadashas(BIRTH, 350.0); // Revati, Mercury
        assert_eq!(p[0].entity, Graha::Buddh);
        assert_eq!(p[1].entity, Graha::Ketu);
        assert_eq!(p[8].entity, Graha::Shani);
    }

    #[test]
    fn hierarchy_levels_nest() {
        let h = vimshottari_hierarchy(BIRTH, 100.0, 3).unwrap();
        assert_eq!(h.depth(), 3);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
        for (pidx, parent) in h.levels[0].iter().enumerate() {
            let kids = h.children_of(0, pidx);
            assert_eq!(kids.len(), 9);
            assert_eq!(kids[0].entity, parent.entity);
            assert!((kids[0].start_jd - parent.start_jd).abs() < EPS);
            assert!((kids[8].end_jd - parent.end_jd).abs() < EPS);
        }
    }

    #[test]
    fn rejects_bad_level() {
        assert!(vimshottari_hierarchy(BIRTH, 10.0, 0).is_err());
        assert!(vimshottari_hierarchy(BIRTH, 10.0, 7).is_err());
    }

    #[test]
    fn snapshot_matches_hierarchy() {
        let h = vimshottari_hierarchy(BIRTH, 200.0, 4).unwrap();
        let now = BIRTH + 9000.0;
        let snap = vimshottari_snapshot(BIRTH, 200.0, now, 4).unwrap();
        assert_eq!(snap.periods.len(), 4);
        for (level, active) in snap.periods.iter().enumerate() {
            let found = h.levels[level].iter().find(|p| p.contains(now)).unwrap();
            assert_eq!(found.entity, active.entity);
            assert_eq!(found.parent_idx, active.parent_idx, "level {}", level + 1);
            assert!((found.start_jd - active.start_jd).abs() < EPS);
        }
    }

    #[test]
    fn snapshot_parent_idx_indexes_full_level() {
        let h = vimshottari_hierarchy(BIRTH, 311.7, 5).unwrap();
        let now = BIRTH + 21_000.25;
        let snap = vimshottari_snapshot(BIRTH, 311.7, now, 5).unwrap();
        assert_eq!(snap.periods.len(), 5);
        for pair in snap.periods.windows(2) {
            let (parent, child) = (&pair[0], &pair[1]);
            let parent_level = parent.level.number() as usize - 1;
            let owner = &h.levels[parent_level][child.parent_idx as usize];
            assert_eq!(owner.entity, parent.entity);
            assert!((owner.start_jd - parent.start_jd).abs() < EPS);
        }
    }
}
