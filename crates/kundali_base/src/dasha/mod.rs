//! Vimshottari dasha (planetary periods).
//!
//! Nine lords rotate through a fixed 120-year cycle. The first mahadasha is
//! the Moon's nakshatra lord, with its elapsed part set by the Moon's
//! position inside the nakshatra. Each level splits its parent
//! proportionally in the same rotation, down to six levels.
//!
//! The hierarchy is a flat arena: one `Vec` per level, children addressed
//! through `parent_idx`.

pub mod balance;
pub mod query;
pub mod sandhi;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use query::{active_periods, find_active_period};
pub use sandhi::{SandhiWindow, sandhi_windows};
pub use subperiod::{proportional_children, rotated_from, snap_last_child_end};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};
pub use vimshottari::{
    TOTAL_DAYS, TOTAL_YEARS, VIMSHOTTARI_YEARS, complete_level, mahadashas, vimshottari_hierarchy,
    vimshottari_snapshot,
};
