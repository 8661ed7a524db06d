//! Core types for Vimshottari dasha periods.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

use super::balance::BirthBalance;

/// Year length used for every period.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest supported level (Dehadasha).
pub const MAX_DASHA_LEVEL: u8 = 6;

/// Depth used when the caller does not choose one.
pub const DEFAULT_DASHA_LEVEL: u8 = 3;

/// Hard cap on periods per level. Level 6 holds 9^6 periods.
pub const MAX_PERIODS_PER_LEVEL: usize = 600_000;

/// Six hierarchical levels, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 1,
    Antardasha = 2,
    Pratyantardasha = 3,
    Sookshmadasha = 4,
    Pranadasha = 5,
    Dehadasha = 6,
}

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Mahadasha),
            2 => Some(Self::Antardasha),
            3 => Some(Self::Pratyantardasha),
            4 => Some(Self::Sookshmadasha),
            5 => Some(Self::Pranadasha),
            6 => Some(Self::Dehadasha),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
            Self::Dehadasha => "Dehadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => Some(Self::Dehadasha),
            Self::Dehadasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub entity: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into the parent level's array (0 for level 1).
    pub parent_idx: u32,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Start inclusive, end exclusive.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Complete hierarchy as a flat arena: `levels[0]` holds the mahadashas,
/// `levels[n]` the children of `levels[n - 1]` in parent order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaHierarchy {
    /// Birth JD UTC.
    pub birth_jd: f64,
    pub balance: BirthBalance,
    pub levels: Vec<Vec<DashaPeriod>>,
}

impl DashaHierarchy {
    pub fn depth(&self) -> u8 {
        self.levels.len() as u8
    }

    /// Periods at a 1-based level.
    pub fn level(&self, level: DashaLevel) -> Option<&[DashaPeriod]> {
        self.levels
            .get(level.number() as usize - 1)
            .map(Vec::as_slice)
    }

    /// Index range, within `levels[level_idx + 1]`, of the children of
    /// `levels[level_idx][parent_idx]`. Children are contiguous.
    pub fn children_range(&self, level_idx: usize, parent_idx: usize) -> Range<usize> {
        let Some(next) = self.levels.get(level_idx + 1) else {
            return 0..0;
        };
        let lo = next.partition_point(|p| (p.parent_idx as usize) < parent_idx);
        let hi = next.partition_point(|p| (p.parent_idx as usize) <= parent_idx);
        lo..hi
    }

    pub fn children_of(&self, level_idx: usize, parent_idx: usize) -> &[DashaPeriod] {
        match self.levels.get(level_idx + 1) {
            Some(next) => &next[self.children_range(level_idx, parent_idx)],
            None => &[],
        }
    }
}

/// Active periods at one instant, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}
