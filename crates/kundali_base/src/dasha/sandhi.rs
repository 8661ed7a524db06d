//! Sandhi (junction) windows between consecutive periods.
//!
//! A window straddles each boundary: it covers the last sub-period of the
//! outgoing period and the first sub-period of the incoming one, as the
//! proportional split would cut them.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

use super::types::{DashaHierarchy, DashaLevel};
use super::vimshottari::{TOTAL_DAYS, VIMSHOTTARI_YEARS, period_days, sequence_position};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SandhiWindow {
    pub level: DashaLevel,
    pub outgoing: Graha,
    pub incoming: Graha,
    pub boundary_jd: f64,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Share of a period taken by its last proportional sub-period.
fn last_share(lord: Graha) -> f64 {
    let n = VIMSHOTTARI_YEARS.len();
    let prev = (sequence_position(lord) as usize + n - 1) % n;
    period_days(VIMSHOTTARI_YEARS[prev].0) / TOTAL_DAYS
}

/// Share of a period taken by its first proportional sub-period.
fn first_share(lord: Graha) -> f64 {
    period_days(lord) / TOTAL_DAYS
}

/// Windows around every boundary at `level`. Empty if the hierarchy does
/// not reach that level.
pub fn sandhi_windows(hierarchy: &DashaHierarchy, level: DashaLevel) -> Vec<SandhiWindow> {
    let Some(periods) = hierarchy.level(level) else {
        return Vec::new();
    };
    periods
        .windows(2)
        .map(|pair| {
            let (out, inc) = (&pair[0], &pair[1]);
            let boundary_jd = inc.start_jd;
            SandhiWindow {
                level,
                outgoing: out.entity,
                incoming: inc.entity,
                boundary_jd,
                start_jd: boundary_jd - out.duration_days() * last_share(out.entity),
                end_jd: boundary_jd + inc.duration_days() * first_share(inc.entity),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::vimshottari::vimshottari_hierarchy;

    const EPS: f64 = 1e-6;

    #[test]
    fn one_window_per_boundary() {
        let h = vimshottari_hierarchy(2451545.0, 10.0, 2).unwrap();
        assert_eq!(sandhi_windows(&h, DashaLevel::Mahadasha).len(), 8);
        assert_eq!(sandhi_windows(&h, DashaLevel::Antardasha).len(), 80);
        assert!(sandhi_windows(&h, DashaLevel::Pratyantardasha).is_empty());
    }

    #[test]
    fn window_matches_sub_periods() {
        let h = vimshottari_hierarchy(2451545.0, 10.0, 2).unwrap();
        let windows = sandhi_windows(&h, DashaLevel::Mahadasha);
        let w = windows[0];
        let outgoing_kids = h.children_of(0, 0);
        let incoming_kids = h.children_of(0, 1);
        assert!((w.start_jd - outgoing_kids[8].start_jd).abs() < EPS);
        assert!((w.end_jd - incoming_kids[0].end_jd).abs() < EPS);
        assert!(w.start_jd < w.boundary_jd && w.boundary_jd < w.end_jd);
    }
}
