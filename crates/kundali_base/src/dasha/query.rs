//! Active-period lookup. The caller supplies "now"; nothing here reads a clock.

use super::types::{DashaHierarchy, DashaPeriod, DashaSnapshot};

/// Index of the period containing `jd` in a sorted, contiguous slice.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Chain of active periods from level 1 down to the deepest level held.
pub fn active_periods(hierarchy: &DashaHierarchy, now_jd: f64) -> DashaSnapshot {
    let mut periods = Vec::with_capacity(hierarchy.levels.len());
    let Some(top) = hierarchy.levels.first() else {
        return DashaSnapshot {
            query_jd: now_jd,
            periods,
        };
    };
    let Some(mut idx) = find_active_period(top, now_jd) else {
        return DashaSnapshot {
            query_jd: now_jd,
            periods,
        };
    };
    periods.push(top[idx]);

    for level_idx in 0..hierarchy.levels.len().saturating_sub(1) {
        let range = hierarchy.children_range(level_idx, idx);
        let kids = &hierarchy.levels[level_idx + 1][range.clone()];
        let Some(local) = find_active_period(kids, now_jd) else {
            break;
        };
        periods.push(kids[local]);
        idx = range.start + local;
    }

    DashaSnapshot {
        query_jd: now_jd,
        periods,
    }
}
