//! Dignity and relationship tables.
//!
//! Exaltation and debilitation degrees, moolatrikona ranges, own signs,
//! natural (naisargika), temporal (tatkalika) and compound (panchadha)
//! friendship, and the benefic/malefic split. Node exaltation follows the
//! common convention of Rahu in Vrishabha and Ketu in Vrischika.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord_by_index};
use crate::rashi::rashi_from_longitude;
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Exaltation & debilitation
// ---------------------------------------------------------------------------

/// Exaltation degree (sidereal).
///
/// Sun 10 Ari, Moon 3 Tau, Mars 28 Cap, Mercury 15 Vir, Jupiter 5 Can,
/// Venus 27 Pis, Saturn 20 Lib, Rahu 20 Tau, Ketu 20 Sco.
pub const fn exaltation_degree(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 10.0,
        Graha::Chandra => 33.0,
        Graha::Mangal => 298.0,
        Graha::Buddh => 165.0,
        Graha::Guru => 95.0,
        Graha::Shukra => 357.0,
        Graha::Shani => 200.0,
        Graha::Rahu => 50.0,
        Graha::Ketu => 230.0,
    }
}

/// Debilitation degree = exaltation + 180 mod 360.
pub fn debilitation_degree(graha: Graha) -> f64 {
    normalize_360(exaltation_degree(graha) + 180.0)
}

/// Moolatrikona range: (rashi_index, start_deg_in_rashi, end_deg_in_rashi).
/// None for Rahu/Ketu.
pub const fn moolatrikone_range(graha: Graha) -> Option<(u8, f64, f64)> {
    match graha {
        Graha::Surya => Some((4, 0.0, 20.0)),
        Graha::Chandra => Some((1, 4.0, 20.0)),
        Graha::Mangal => Some((0, 0.0, 12.0)),
        Graha::Buddh => Some((5, 16.0, 20.0)),
        Graha::Guru => Some((8, 0.0, 10.0)),
        Graha::Shukra => Some((6, 0.0, 15.0)),
        Graha::Shani => Some((10, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashi indices. Empty for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[4],
        Graha::Chandra => &[3],
        Graha::Mangal => &[0, 7],
        Graha::Buddh => &[2, 5],
        Graha::Guru => &[8, 11],
        Graha::Shukra => &[1, 6],
        Graha::Shani => &[9, 10],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn exaltation_rashi(graha: Graha) -> u8 {
    (exaltation_degree(graha) / 30.0) as u8
}

pub fn debilitation_rashi(graha: Graha) -> u8 {
    (debilitation_degree(graha) / 30.0) as u8
}

// ---------------------------------------------------------------------------
// Friendship
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural friendship between two grahas (BPHS table).
/// Pairings involving Rahu/Ketu are Neutral.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;
    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,
        (Chandra, Surya | Buddh) => Friend,
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,
        _ => Neutral,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TatkalikaMaitri {
    Friend,
    Enemy,
}

/// Temporal friendship: friend if other is 2nd/3rd/4th/10th/11th/12th from graha.
pub fn tatkalika_maitri(graha_rashi_idx: u8, other_rashi_idx: u8) -> TatkalikaMaitri {
    let dist = (other_rashi_idx as i16 - graha_rashi_idx as i16).rem_euclid(12);
    match dist {
        1 | 2 | 3 | 9 | 10 | 11 => TatkalikaMaitri::Friend,
        _ => TatkalikaMaitri::Enemy,
    }
}

/// Five-fold compound relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanchadhaMaitri {
    AdhiShatru,
    Shatru,
    Sama,
    Mitra,
    AdhiMitra,
}

pub fn panchadha_maitri(
    naisargika: NaisargikaMaitri,
    tatkalika: TatkalikaMaitri,
) -> PanchadhaMaitri {
    use NaisargikaMaitri as N;
    use PanchadhaMaitri as P;
    use TatkalikaMaitri as T;
    match (naisargika, tatkalika) {
        (N::Friend, T::Friend) => P::AdhiMitra,
        (N::Friend, T::Enemy) => P::Sama,
        (N::Neutral, T::Friend) => P::Mitra,
        (N::Neutral, T::Enemy) => P::Shatru,
        (N::Enemy, T::Friend) => P::Sama,
        (N::Enemy, T::Enemy) => P::AdhiShatru,
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Dignity of a graha in a rashi, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Moolatrikone,
    OwnSign,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
    Debilitated,
}

impl Dignity {
    /// Relative quality in [0, 1], used to weight yoga strength.
    pub const fn quality(self) -> f64 {
        match self {
            Self::Exalted => 1.0,
            Self::Moolatrikone => 0.9,
            Self::OwnSign => 0.8,
            Self::AdhiMitra => 0.7,
            Self::Mitra => 0.6,
            Self::Sama => 0.5,
            Self::Shatru => 0.35,
            Self::AdhiShatru => 0.2,
            Self::Debilitated => 0.1,
        }
    }
}

fn is_in_moolatrikone(graha: Graha, sidereal_lon: f64) -> bool {
    let Some((mt_rashi, start, end)) = moolatrikone_range(graha) else {
        return false;
    };
    let info = rashi_from_longitude(sidereal_lon);
    info.rashi.index() == mt_rashi
        && info.degrees_in_rashi >= start
        && info.degrees_in_rashi < end
}

/// Sign-level checks shared by both dignity flavours.
fn fixed_dignity(graha: Graha, sidereal_lon: f64) -> Option<Dignity> {
    let rashi = rashi_from_longitude(sidereal_lon).rashi.index();
    if rashi == exaltation_rashi(graha) {
        return Some(Dignity::Exalted);
    }
    if rashi == debilitation_rashi(graha) {
        return Some(Dignity::Debilitated);
    }
    if is_in_moolatrikone(graha, sidereal_lon) {
        return Some(Dignity::Moolatrikone);
    }
    if own_signs(graha).contains(&rashi) {
        return Some(Dignity::OwnSign);
    }
    None
}

/// Naisargika-only dignity.
///
/// Priority: exaltation > debilitation > moolatrikona > own sign > natural
/// friendship with the sign lord. Nodes outside their exaltation and
/// debilitation signs are Sama.
pub fn dignity_in_rashi(graha: Graha, sidereal_lon: f64) -> Dignity {
    if let Some(d) = fixed_dignity(graha, sidereal_lon) {
        return d;
    }
    if graha.is_node() {
        return Dignity::Sama;
    }
    let rashi = rashi_from_longitude(sidereal_lon).rashi.index();
    let Some(lord) = rashi_lord_by_index(rashi) else {
        return Dignity::Sama;
    };
    match naisargika_maitri(graha, lord) {
        NaisargikaMaitri::Friend => Dignity::Mitra,
        NaisargikaMaitri::Enemy => Dignity::Shatru,
        NaisargikaMaitri::Neutral => Dignity::Sama,
    }
}

/// Dignity with compound (natural + temporal) friendship.
///
/// `rashi_indices` holds the 7 sapta graha rashis in graha order.
pub fn dignity_with_positions(graha: Graha, sidereal_lon: f64, rashi_indices: &[u8; 7]) -> Dignity {
    if let Some(d) = fixed_dignity(graha, sidereal_lon) {
        return d;
    }
    if graha.is_node() {
        return Dignity::Sama;
    }
    let rashi = rashi_from_longitude(sidereal_lon).rashi.index();
    let Some(lord) = rashi_lord_by_index(rashi) else {
        return Dignity::Sama;
    };
    let nais = naisargika_maitri(graha, lord);
    let tatk = tatkalika_maitri(
        rashi_indices[graha.index() as usize],
        rashi_indices[lord.index() as usize],
    );
    match panchadha_maitri(nais, tatk) {
        PanchadhaMaitri::AdhiMitra => Dignity::AdhiMitra,
        PanchadhaMaitri::Mitra => Dignity::Mitra,
        PanchadhaMaitri::Sama => Dignity::Sama,
        PanchadhaMaitri::Shatru => Dignity::Shatru,
        PanchadhaMaitri::AdhiShatru => Dignity::AdhiShatru,
    }
}

// ---------------------------------------------------------------------------
// Benefic / malefic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Natural benefic/malefic for each graha. Moon defaults Benefic.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

/// Moon is benefic when at least 72 deg from the Sun on either side.
pub fn moon_benefic_nature(moon_sun_elongation: f64) -> BeneficNature {
    let elong = normalize_360(moon_sun_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    if phase >= 72.0 {
        BeneficNature::Benefic
    } else {
        BeneficNature::Malefic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exaltation_and_debilitation_opposite() {
        for g in crate::graha::ALL_GRAHAS {
            let d = (debilitation_degree(g) - exaltation_degree(g)).rem_euclid(360.0);
            assert!((d - 180.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sun_exalted_in_mesha() {
        assert_eq!(dignity_in_rashi(Graha::Surya, 5.0), Dignity::Exalted);
        assert_eq!(dignity_in_rashi(Graha::Surya, 185.0), Dignity::Debilitated);
    }

    #[test]
    fn moolatrikona_precedes_own_sign() {
        assert_eq!(dignity_in_rashi(Graha::Surya, 125.0), Dignity::Moolatrikone);
        assert_eq!(dignity_in_rashi(Graha::Surya, 145.0), Dignity::OwnSign);
    }

    #[test]
    fn moon_exaltation_sign_beats_moolatrikona() {
        // Moon's moolatrikona lies inside its exaltation sign
        assert_eq!(dignity_in_rashi(Graha::Chandra, 40.0), Dignity::Exalted);
    }

    #[test]
    fn natural_friendship_in_enemy_sign() {
        // Saturn in Simha (Sun's sign)
        assert_eq!(dignity_in_rashi(Graha::Shani, 130.0), Dignity::Shatru);
    }

    #[test]
    fn node_dignity() {
        assert_eq!(dignity_in_rashi(Graha::Rahu, 45.0), Dignity::Exalted);
        assert_eq!(dignity_in_rashi(Graha::Ketu, 45.0), Dignity::Debilitated);
        assert_eq!(dignity_in_rashi(Graha::Rahu, 100.0), Dignity::Sama);
    }

    #[test]
    fn compound_friendship() {
        // Jupiter in Mesha (Mars' sign), Mars two signs ahead: natural friend + temporal friend
        let mut rashis = [0u8; 7];
        rashis[Graha::Guru.index() as usize] = 0;
        rashis[Graha::Mangal.index() as usize] = 2;
        assert_eq!(dignity_with_positions(Graha::Guru, 15.0, &rashis), Dignity::AdhiMitra);
        // Mars in the 7th from Jupiter: temporal enemy
        rashis[Graha::Mangal.index() as usize] = 6;
        assert_eq!(dignity_with_positions(Graha::Guru, 15.0, &rashis), Dignity::Sama);
    }

    #[test]
    fn tatkalika_distances() {
        assert_eq!(tatkalika_maitri(0, 1), TatkalikaMaitri::Friend);
        assert_eq!(tatkalika_maitri(0, 0), TatkalikaMaitri::Enemy);
        assert_eq!(tatkalika_maitri(11, 0), TatkalikaMaitri::Friend);
        assert_eq!(tatkalika_maitri(0, 6), TatkalikaMaitri::Enemy);
    }

    #[test]
    fn moon_nature_by_phase() {
        assert_eq!(moon_benefic_nature(10.0), BeneficNature::Malefic);
        assert_eq!(moon_benefic_nature(180.0), BeneficNature::Benefic);
        assert_eq!(moon_benefic_nature(300.0), BeneficNature::Malefic);
    }

    #[test]
    fn dignity_quality_ordered() {
        assert!(Dignity::Exalted.quality() > Dignity::OwnSign.quality());
        assert!(Dignity::Sama.quality() > Dignity::Debilitated.quality());
    }
}
