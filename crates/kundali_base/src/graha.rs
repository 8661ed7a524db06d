//! Celestial bodies: the 9 grahas, the optional outer planets, and rashi
//! lordship.
//!
//! Ketu has no ephemeris query of its own; its longitude is always
//! `(Rahu + 180) mod 360`.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter chart abbreviation.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Surya => "Su",
            Self::Chandra => "Mo",
            Self::Mangal => "Ma",
            Self::Buddh => "Me",
            Self::Guru => "Ju",
            Self::Shukra => "Ve",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Stable ephemeris body id. Ketu returns None: it is derived from Rahu.
    ///
    /// Numbering: Sun 0, Moon 1, Mercury 2, Venus 3, Mars 4, Jupiter 5,
    /// Saturn 6, lunar node 10.
    pub const fn ephemeris_id(self) -> Option<u16> {
        match self {
            Self::Surya => Some(0),
            Self::Chandra => Some(1),
            Self::Buddh => Some(2),
            Self::Shukra => Some(3),
            Self::Mangal => Some(4),
            Self::Guru => Some(5),
            Self::Shani => Some(6),
            Self::Rahu => Some(10),
            Self::Ketu => None,
        }
    }

    /// True for Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

/// Optional outer bodies, outside the classical graha set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OuterBody {
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_OUTER_BODIES: [OuterBody; 3] =
    [OuterBody::Uranus, OuterBody::Neptune, OuterBody::Pluto];

impl OuterBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Uranus => "Ur",
            Self::Neptune => "Ne",
            Self::Pluto => "Pl",
        }
    }

    pub const fn ephemeris_id(self) -> u16 {
        match self {
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }
}

/// Any body that can appear in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Classical(Graha),
    Outer(OuterBody),
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classical(g) => g.english_name(),
            Self::Outer(o) => o.name(),
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Classical(g) => g.symbol(),
            Self::Outer(o) => o.symbol(),
        }
    }

    pub const fn ephemeris_id(self) -> Option<u16> {
        match self {
            Self::Classical(g) => g.ephemeris_id(),
            Self::Outer(o) => Some(o.ephemeris_id()),
        }
    }

    /// The classical graha, if this is one.
    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Classical(g) => Some(g),
            Self::Outer(_) => None,
        }
    }
}

impl From<Graha> for Body {
    fn from(g: Graha) -> Self {
        Self::Classical(g)
    }
}

impl From<OuterBody> for Body {
    fn from(o: OuterBody) -> Self {
        Self::Outer(o)
    }
}

/// Ketu's longitude from Rahu's: always the opposite point.
pub fn ketu_from_rahu(rahu_lon_deg: f64) -> f64 {
    normalize_360(rahu_lon_deg + 180.0)
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Lord of a rashi by 0-based index. None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(crate::rashi::ALL_RASHIS[rashi_index as usize]))
}

/// The n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 12)` = 11.
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}

/// 1-based count from one sign to another: same sign is 1, next is 2.
pub fn rashi_distance(from_index: u8, to_index: u8) -> u8 {
    ((to_index as i16 - from_index as i16).rem_euclid(12) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn ephemeris_ids_unique() {
        let mut ids: Vec<u16> = ALL_GRAHAS.iter().filter_map(|g| g.ephemeris_id()).collect();
        ids.extend(ALL_OUTER_BODIES.iter().map(|o| o.ephemeris_id()));
        let n = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), n);
        assert_eq!(n, 11);
    }

    #[test]
    fn ketu_is_never_queried() {
        assert!(Graha::Ketu.ephemeris_id().is_none());
        assert!(Graha::Rahu.ephemeris_id().is_some());
    }

    #[test]
    fn ketu_opposite_rahu() {
        assert!((ketu_from_rahu(100.0) - 280.0).abs() < 1e-12);
        assert!((ketu_from_rahu(270.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn body_symbols() {
        assert_eq!(Body::from(Graha::Guru).symbol(), "Ju");
        assert_eq!(Body::from(OuterBody::Pluto).symbol(), "Pl");
        assert_eq!(Body::from(OuterBody::Pluto).graha(), None);
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Dhanu), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lord_by_index_invalid() {
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn nth_rashi_wrap() {
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(0, 12), 11);
        assert_eq!(nth_rashi_from(0, 8), 7);
    }

    #[test]
    fn rashi_distance_counts_inclusively() {
        assert_eq!(rashi_distance(3, 3), 1);
        assert_eq!(rashi_distance(11, 0), 2);
        assert_eq!(rashi_distance(0, 6), 7);
    }
}
