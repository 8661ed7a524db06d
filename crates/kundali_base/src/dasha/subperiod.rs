//! Proportional sub-period generation.
//!
//! child duration = (child full period / total cycle) * parent duration,
//! with the rotation starting at the parent's own lord.

use crate::graha::Graha;

use super::types::{DashaLevel, DashaPeriod};

/// Snap the last child's end to the parent's end to absorb floating drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// The cyclic `sequence` rotated to start at `first`.
pub fn rotated_from(sequence: &[(Graha, f64)], first: Graha) -> Vec<(Graha, f64)> {
    let n = sequence.len();
    let start = sequence.iter().position(|(g, _)| *g == first).unwrap_or(0);
    (0..n).map(|i| sequence[(start + i) % n]).collect()
}

/// Proportional children of `parent`, starting from the parent's lord.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_period_days: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, (entity, full_period)) in rotated_from(sequence, parent.entity).into_iter().enumerate() {
        let end = cursor + full_period / total_period_days * parent_duration;
        children.push(DashaPeriod {
            entity,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: order_0 as u16 + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}
