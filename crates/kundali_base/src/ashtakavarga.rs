//! Ashtakavarga (bindu) tables.
//!
//! Eight reference bodies (Sun through Saturn plus the lagna) each get a
//! Bhinna Ashtakavarga: the eight contributors vote for signs counted from
//! their own sign, per a fixed rules table. Every reference body's 12 bindus
//! sum to a constant regardless of the chart.
//!
//! Totals: Sun 48, Moon 49, Mars 39, Mercury 54, Jupiter 56, Venus 52,
//! Saturn 39, Lagna 49. The classical Sarvashtakavarga (seven grahas) is 337;
//! the combined table over all eight is 386.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::rashi_from_longitude;

// ---------------------------------------------------------------------------
// Bodies and rules
// ---------------------------------------------------------------------------

/// A reference body or contributor: one of the seven grahas or the lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AshtakaBody {
    Graha(Graha),
    Lagna,
}

pub const ALL_ASHTAKA_BODIES: [AshtakaBody; 8] = [
    AshtakaBody::Graha(Graha::Surya),
    AshtakaBody::Graha(Graha::Chandra),
    AshtakaBody::Graha(Graha::Mangal),
    AshtakaBody::Graha(Graha::Buddh),
    AshtakaBody::Graha(Graha::Guru),
    AshtakaBody::Graha(Graha::Shukra),
    AshtakaBody::Graha(Graha::Shani),
    AshtakaBody::Lagna,
];

impl AshtakaBody {
    /// 0..7 for Sun..Saturn, 7 for the lagna.
    pub fn index(self) -> usize {
        match self {
            Self::Graha(g) => (g.index() as usize).min(6),
            Self::Lagna => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Lagna => "Lagna",
        }
    }
}

/// Bitmask of 1-based sign offsets (bit i set for offset i).
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// Classical rules: `[reference][contributor]`, contributors in
/// [`ALL_ASHTAKA_BODIES`] order.
const CLASSICAL_RULES: [[u16; 8]; 8] = [
    // Sun (48)
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 6, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 9, 10, 11, 12]),
        bits(&[5, 6, 9, 11]),
        bits(&[6, 7, 12]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 4, 6, 10, 11, 12]),
    ],
    // Moon (49)
    [
        bits(&[3, 6, 7, 8, 10, 11]),
        bits(&[1, 3, 6, 7, 10, 11]),
        bits(&[2, 3, 5, 6, 9, 10, 11]),
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
        bits(&[1, 4, 7, 8, 10, 11, 12]),
        bits(&[3, 4, 5, 7, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[3, 6, 10, 11]),
    ],
    // Mars (39)
    [
        bits(&[3, 5, 6, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[6, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 6, 10, 11]),
    ],
    // Mercury (54)
    [
        bits(&[5, 6, 9, 11, 12]),
        bits(&[2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 2, 4, 6, 8, 10, 11]),
    ],
    // Jupiter (56)
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
        bits(&[2, 5, 7, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
        bits(&[2, 5, 6, 9, 10, 11]),
        bits(&[3, 5, 6, 12]),
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
    ],
    // Venus (52)
    [
        bits(&[8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 4, 6, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11]),
        bits(&[5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),
        bits(&[3, 4, 5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
    ],
    // Saturn (39)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[6, 8, 9, 10, 11, 12]),
        bits(&[5, 6, 11, 12]),
        bits(&[6, 11, 12]),
        bits(&[3, 5, 6, 11]),
        bits(&[1, 3, 4, 6, 10, 11]),
    ],
    // Lagna (49)
    [
        bits(&[3, 4, 6, 10, 11, 12]),
        bits(&[3, 6, 10, 11, 12]),
        bits(&[1, 3, 6, 10, 11]),
        bits(&[1, 2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9]),
        bits(&[1, 3, 4, 6, 10, 11]),
        bits(&[3, 6, 10, 11]),
    ],
];

/// Expected classical BAV totals, reference bodies in order.
pub const BAV_TOTALS: [u8; 8] = [48, 49, 39, 54, 56, 52, 39, 49];

/// Classical Sarvashtakavarga total over the seven grahas.
pub const SAV_TOTAL: u16 = 337;

/// Vote table: `masks[reference][contributor]` holds the favourable 1-based
/// offsets as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AshtakavargaRules {
    masks: [[u16; 8]; 8],
}

impl Default for AshtakavargaRules {
    fn default() -> Self {
        Self {
            masks: CLASSICAL_RULES,
        }
    }
}

impl AshtakavargaRules {
    /// Rules from explicit offset lists. Offsets must be 1-12.
    pub fn from_offsets(offsets: &[[&[u8]; 8]; 8]) -> Result<Self, VedicError> {
        let mut masks = [[0u16; 8]; 8];
        for (row, src) in masks.iter_mut().zip(offsets) {
            for (mask, list) in row.iter_mut().zip(src) {
                if list.iter().any(|&o| o == 0 || o > 12) {
                    return Err(VedicError::InvalidInput("ashtakavarga offset must be 1-12"));
                }
                *mask = bits(list);
            }
        }
        Ok(Self { masks })
    }

    /// Whether `contributor` votes for a sign `offset` (1-based) from itself.
    pub fn votes(&self, reference: AshtakaBody, contributor: AshtakaBody, offset: u8) -> bool {
        (self.masks[reference.index()][contributor.index()] >> offset) & 1 == 1
    }

    /// Chart-independent total for one reference body.
    pub fn expected_total(&self, reference: AshtakaBody) -> u32 {
        self.masks[reference.index()]
            .iter()
            .map(|m| m.count_ones())
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Bhinna Ashtakavarga
// ---------------------------------------------------------------------------

/// Bindus for one reference body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BhinnaAshtakavarga {
    pub reference: AshtakaBody,
    /// Bindus per rashi, 0-8.
    pub points: [u8; 12],
    /// Each contributor's vote per rashi, contributors in
    /// [`ALL_ASHTAKA_BODIES`] order.
    pub votes: [[bool; 12]; 8],
}

impl BhinnaAshtakavarga {
    pub fn total(&self) -> u32 {
        self.points.iter().map(|&p| p as u32).sum()
    }
}

/// Sign occupied by each body, in [`ALL_ASHTAKA_BODIES`] order.
fn body_rashis(graha_rashis: &[u8; 7], lagna_rashi: u8) -> [u8; 8] {
    let mut out = [lagna_rashi % 12; 8];
    for (slot, r) in out.iter_mut().zip(graha_rashis) {
        *slot = r % 12;
    }
    out
}

/// 1-based count from `from` to `to`.
fn offset(from: u8, to: u8) -> u8 {
    ((to as i16 - from as i16 + 12) % 12 + 1) as u8
}

/// BAV of one reference body.
///
/// `graha_rashis` holds the 0-based rashi of Sun..Saturn.
pub fn calculate_bav(
    reference: AshtakaBody,
    graha_rashis: &[u8; 7],
    lagna_rashi: u8,
    rules: &AshtakavargaRules,
) -> BhinnaAshtakavarga {
    let rashis = body_rashis(graha_rashis, lagna_rashi);
    let mut points = [0u8; 12];
    let mut votes = [[false; 12]; 8];
    for rashi in 0u8..12 {
        for (ci, contributor) in ALL_ASHTAKA_BODIES.iter().enumerate() {
            if rules.votes(reference, *contributor, offset(rashis[ci], rashi)) {
                votes[ci][rashi as usize] = true;
                points[rashi as usize] += 1;
            }
        }
    }
    BhinnaAshtakavarga {
        reference,
        points,
        votes,
    }
}

/// BAV for all eight reference bodies.
pub fn calculate_all_bav(
    graha_rashis: &[u8; 7],
    lagna_rashi: u8,
    rules: &AshtakavargaRules,
) -> Vec<BhinnaAshtakavarga> {
    ALL_ASHTAKA_BODIES
        .iter()
        .map(|&r| calculate_bav(r, graha_rashis, lagna_rashi, rules))
        .collect()
}

// ---------------------------------------------------------------------------
// Sarvashtakavarga and sodhana
// ---------------------------------------------------------------------------

/// Sums and reductions over the BAVs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarvaAshtakavarga {
    /// Sum over all eight reference bodies, 0-64 per rashi.
    pub combined: [u16; 12],
    /// Classical SAV over the seven grahas.
    pub total_points: [u16; 12],
    /// After trikona sodhana.
    pub after_trikona: [u16; 12],
    /// After ekadhipatya sodhana.
    pub after_ekadhipatya: [u16; 12],
}

impl SarvaAshtakavarga {
    pub fn combined_total(&self) -> u32 {
        self.combined.iter().map(|&p| p as u32).sum()
    }
}

const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Same-lord sign pairs not already in one trikona group: Mercury's
/// Mithuna/Kanya and Jupiter's Dhanu/Meena.
const EKADHIPATYA_PAIRS: [[usize; 2]; 2] = [[2, 5], [8, 11]];

/// Subtract the minimum of each trikona group from its members.
pub fn trikona_sodhana(totals: &[u16; 12]) -> [u16; 12] {
    let mut result = *totals;
    for group in &TRIKONA_GROUPS {
        let min_val = group.iter().map(|&i| result[i]).min().unwrap_or(0);
        for &i in group {
            result[i] -= min_val;
        }
    }
    result
}

/// Subtract the minimum of each same-lord pair.
pub fn ekadhipatya_sodhana(after_trikona: &[u16; 12]) -> [u16; 12] {
    let mut result = *after_trikona;
    for pair in &EKADHIPATYA_PAIRS {
        let min_val = result[pair[0]].min(result[pair[1]]);
        result[pair[0]] -= min_val;
        result[pair[1]] -= min_val;
    }
    result
}

pub fn calculate_sav(bavs: &[BhinnaAshtakavarga]) -> SarvaAshtakavarga {
    let mut combined = [0u16; 12];
    let mut total_points = [0u16; 12];
    for bav in bavs {
        let classical = matches!(bav.reference, AshtakaBody::Graha(_));
        for (i, &p) in bav.points.iter().enumerate() {
            combined[i] += p as u16;
            if classical {
                total_points[i] += p as u16;
            }
        }
    }
    let after_trikona = trikona_sodhana(&total_points);
    let after_ekadhipatya = ekadhipatya_sodhana(&after_trikona);
    SarvaAshtakavarga {
        combined,
        total_points,
        after_trikona,
        after_ekadhipatya,
    }
}

/// All BAVs plus the combined tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AshtakavargaResult {
    pub bavs: Vec<BhinnaAshtakavarga>,
    pub sav: SarvaAshtakavarga,
}

impl AshtakavargaResult {
    pub fn bav(&self, reference: AshtakaBody) -> Option<&BhinnaAshtakavarga> {
        self.bavs.iter().find(|b| b.reference == reference)
    }
}

/// Complete ashtakavarga for the given sign placements.
pub fn ashtakavarga(
    graha_rashis: &[u8; 7],
    lagna_rashi: u8,
    rules: &AshtakavargaRules,
) -> AshtakavargaResult {
    let bavs = calculate_all_bav(graha_rashis, lagna_rashi, rules);
    let sav = calculate_sav(&bavs);
    AshtakavargaResult { bavs, sav }
}

/// Rashis of Sun..Saturn from sidereal longitudes.
pub fn graha_rashis_from_lons(sidereal_lons: &[f64; 7]) -> [u8; 7] {
    sidereal_lons.map(|lon| rashi_from_longitude(lon).rashi.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_table_totals() {
        let rules = AshtakavargaRules::default();
        for (body, &expected) in ALL_ASHTAKA_BODIES.iter().zip(&BAV_TOTALS) {
            assert_eq!(rules.expected_total(*body), expected as u32, "{}", body.name());
        }
    }

    #[test]
    fn bav_totals_any_position() {
        let rules = AshtakavargaRules::default();
        let rashis = [3, 7, 0, 11, 5, 9, 2];
        for bav in calculate_all_bav(&rashis, 4, &rules) {
            let i = bav.reference.index();
            assert_eq!(bav.total(), BAV_TOTALS[i] as u32);
            assert!(bav.points.iter().all(|&p| p <= 8));
        }
    }

    #[test]
    fn sav_totals() {
        let result = ashtakavarga(&[1, 1, 6, 2, 10, 3, 8], 5, &AshtakavargaRules::default());
        let classical: u16 = result.sav.total_points.iter().sum();
        assert_eq!(classical, SAV_TOTAL);
        let expected: u32 = BAV_TOTALS.iter().map(|&t| t as u32).sum();
        assert_eq!(result.sav.combined_total(), expected);
    }

    #[test]
    fn trikona_sodhana_zeroes_minimum() {
        let totals = [5, 1, 2, 3, 7, 4, 6, 9, 6, 8, 2, 3];
        let t = trikona_sodhana(&totals);
        for group in &TRIKONA_GROUPS {
            assert_eq!(group.iter().map(|&i| t[i]).min(), Some(0));
        }
        assert_eq!(t[4], 2);
    }

    #[test]
    fn ekadhipatya_reduces_pairs() {
        let mut t = [0u16; 12];
        t[2] = 4;
        t[5] = 6;
        t[8] = 3;
        let e = ekadhipatya_sodhana(&t);
        assert_eq!((e[2], e[5]), (0, 2));
        assert_eq!((e[8], e[11]), (3, 0));
    }

    #[test]
    fn conjunct_in_lagna_sums_individual_votes() {
        let empty: &[u8] = &[];
        let mut table = [[empty; 8]; 8];
        table[0][0] = &[1, 7];
        table[0][3] = &[1];
        table[2][7] = &[1, 2];
        table[5][1] = &[1, 11];
        table[7][7] = &[1];
        table[7][4] = &[4];
        let rules = AshtakavargaRules::from_offsets(&table).unwrap();

        let lagna = 9;
        let result = ashtakavarga(&[lagna; 7], lagna, &rules);
        let mut expected = 0u16;
        for reference in ALL_ASHTAKA_BODIES {
            for contributor in ALL_ASHTAKA_BODIES {
                if rules.votes(reference, contributor, 1) {
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, 5);
        assert_eq!(result.sav.combined[lagna as usize], expected);
        let lagna_bav = result.bav(AshtakaBody::Lagna).unwrap();
        assert_eq!(lagna_bav.points[lagna as usize], 1);
        assert!(lagna_bav.votes[7][lagna as usize]);
        assert!(!lagna_bav.votes[4][lagna as usize]);
    }

    #[test]
    fn offsets_validated() {
        let empty: &[u8] = &[];
        let mut table = [[empty; 8]; 8];
        table[0][0] = &[13];
        assert!(AshtakavargaRules::from_offsets(&table).is_err());
    }
}
