//! Aspect engine.
//!
//! Two views of the angular relationship between bodies:
//! - geometric aspects (conjunction, sextile, square, trine, opposition)
//!   with body-specific orbs and an applying/separating flag;
//! - classical graha drishti in virupas, the piecewise Parashari curve plus
//!   the full special aspects of Mars (4th/8th), Jupiter (5th/9th) and
//!   Saturn (3rd/10th). Drik bala consumes these.

use serde::{Deserialize, Serialize};

use crate::graha::{Body, Graha};
use crate::util::{normalize_360, signed_delta};

/// Classified aspect by target separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact separation in degrees.
    pub const fn target_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }
}

/// Orb half-widths ("moieties") per body. The orb for a pair is the mean
/// of the two moieties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbTable {
    /// Indexed by `Graha::index()`.
    pub classical: [f64; 9],
    /// Uranus, Neptune and Pluto.
    pub outer: f64,
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            classical: [10.0, 10.0, 8.0, 7.0, 9.0, 7.0, 9.0, 5.0, 5.0],
            outer: 5.0,
        }
    }
}

impl OrbTable {
    pub fn moiety(&self, body: Body) -> f64 {
        match body {
            Body::Classical(g) => self.classical[g.index() as usize],
            Body::Outer(_) => self.outer,
        }
    }

    pub fn pair_orb(&self, a: Body, b: Body) -> f64 {
        (self.moiety(a) + self.moiety(b)) / 2.0
    }
}

/// Longitude and daily motion of one body, as fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectInput {
    pub body: Body,
    /// Sidereal longitude in degrees.
    pub lon: f64,
    /// Degrees per day; negative when retrograde.
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub from: Body,
    pub to: Body,
    pub kind: AspectKind,
    /// Shorter angular separation in [0, 180].
    pub separation: f64,
    /// |separation - target|.
    pub exact_orb: f64,
    /// The deviation from exact is shrinking.
    pub is_applying: bool,
}

/// Virupa aspect strength for a single ordered graha pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drishti {
    pub from: Graha,
    pub to: Graha,
    /// Forward distance from source to target in [0, 360).
    pub angular_distance: f64,
    pub base_virupa: f64,
    pub special_virupa: f64,
    pub total_virupa: f64,
}

/// Output of [`aspects`]: both views over all ordered pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectTable {
    pub aspects: Vec<Aspect>,
    pub drishti: Vec<Drishti>,
}

impl AspectTable {
    /// Geometric aspect from `from` to `to`, if any.
    pub fn between(&self, from: Body, to: Body) -> Option<&Aspect> {
        self.aspects.iter().find(|a| a.from == from && a.to == to)
    }

    /// Virupa drishti cast by `from` on `to`.
    pub fn drishti_on(&self, from: Graha, to: Graha) -> Option<&Drishti> {
        self.drishti.iter().find(|d| d.from == from && d.to == to)
    }

    /// All drishti entries received by `target`.
    pub fn received_by(&self, target: Graha) -> impl Iterator<Item = &Drishti> {
        self.drishti.iter().filter(move |d| d.to == target)
    }
}

/// Piecewise base virupa for a forward angular distance.
///
/// - `[0, 30)`:    0
/// - `[30, 90)`:   `(A - 30) * 0.75`
/// - `[90, 150)`:  `45 - (A - 90) * 0.75`
/// - `[150, 180)`: `(A - 150) * 2`
/// - `[180, 300)`: `60 - (A - 180) * 0.5`
/// - `[300, 360)`: 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Bonus virupa lifting the special aspects to full strength.
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    let within = |lo: f64, hi: f64| (lo..hi).contains(&a);
    match graha {
        Graha::Mangal if within(90.0, 120.0) || within(210.0, 240.0) => 15.0,
        Graha::Guru if within(120.0, 150.0) || within(240.0, 270.0) => 30.0,
        Graha::Shani if within(60.0, 90.0) || within(270.0, 300.0) => 45.0,
        _ => 0.0,
    }
}

/// Drishti from one graha at `source_lon` onto `target_lon`.
pub fn graha_drishti(from: Graha, to: Graha, source_lon: f64, target_lon: f64) -> Drishti {
    let angular_distance = normalize_360(target_lon - source_lon);
    let base = base_virupa(angular_distance);
    let special = special_virupa(from, angular_distance);
    Drishti {
        from,
        to,
        angular_distance,
        base_virupa: base,
        special_virupa: special,
        total_virupa: base + special,
    }
}

/// Sign distances (1-based) that a graha aspects fully.
///
/// Every graha aspects the 7th; Mars adds 4th/8th, Jupiter 5th/9th and
/// Saturn 3rd/10th.
pub fn full_aspect_houses(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        _ => &[7],
    }
}

/// Whether a graha in `from_rashi` casts a full sign aspect on `to_rashi`.
pub fn aspects_sign(graha: Graha, from_rashi: u8, to_rashi: u8) -> bool {
    let distance = crate::graha::rashi_distance(from_rashi, to_rashi);
    full_aspect_houses(graha).contains(&distance)
}

/// Closest aspect kind within the pair orb, if any.
fn classify_separation(separation: f64, orb: f64) -> Option<(AspectKind, f64)> {
    ALL_ASPECT_KINDS
        .iter()
        .map(|&k| (k, (separation - k.target_deg()).abs()))
        .filter(|&(_, dev)| dev <= orb)
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Aspect from `a` to `b`, if one is within orb.
pub fn aspect_between(a: &AspectInput, b: &AspectInput, orbs: &OrbTable) -> Option<Aspect> {
    let diff = signed_delta(a.lon, b.lon);
    let separation = diff.abs();
    let (kind, exact_orb) = classify_separation(separation, orbs.pair_orb(a.body, b.body))?;

    // d(separation)/dt follows the sign of the signed difference
    let relative = b.speed - a.speed;
    let dsep = if diff >= 0.0 { relative } else { -relative };
    let deviation = separation - kind.target_deg();
    let is_applying = deviation * dsep < 0.0;

    Some(Aspect {
        from: a.body,
        to: b.body,
        kind,
        separation,
        exact_orb,
        is_applying,
    })
}

/// Full aspect table over all ordered pairs of distinct bodies.
pub fn aspects(inputs: &[AspectInput], orbs: &OrbTable) -> AspectTable {
    let mut table = AspectTable::default();
    for a in inputs {
        for b in inputs {
            if a.body == b.body {
                continue;
            }
            if let Some(aspect) = aspect_between(a, b, orbs) {
                table.aspects.push(aspect);
            }
            if let (Body::Classical(ga), Body::Classical(gb)) = (a.body, b.body) {
                table.drishti.push(graha_drishti(ga, gb, a.lon, b.lon));
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn input(g: Graha, lon: f64, speed: f64) -> AspectInput {
        AspectInput { body: g.into(), lon, speed }
    }

    #[test]
    fn base_virupa_curve() {
        assert!(base_virupa(15.0).abs() < EPS);
        assert!((base_virupa(60.0) - 22.5).abs() < EPS);
        assert!((base_virupa(90.0) - 45.0).abs() < EPS);
        assert!((base_virupa(165.0) - 30.0).abs() < EPS);
        assert!((base_virupa(180.0) - 60.0).abs() < EPS);
        assert!((base_virupa(240.0) - 30.0).abs() < EPS);
        assert!(base_virupa(330.0).abs() < EPS);
    }

    #[test]
    fn special_aspects_reach_full_strength() {
        // Jupiter 5th: 120 deg forward
        let d = graha_drishti(Graha::Guru, Graha::Surya, 0.0, 125.0);
        assert!((d.total_virupa - (base_virupa(125.0) + 30.0)).abs() < EPS);
        assert_eq!(special_virupa(Graha::Shukra, 125.0), 0.0);
        assert_eq!(special_virupa(Graha::Shani, 75.0), 45.0);
        assert_eq!(special_virupa(Graha::Mangal, 215.0), 15.0);
    }

    #[test]
    fn trine_with_zero_orb() {
        let a = input(Graha::Surya, 10.0, 1.0);
        let b = input(Graha::Guru, 130.0, 0.1);
        let asp = aspect_between(&a, &b, &OrbTable::default()).unwrap();
        assert_eq!(asp.kind, AspectKind::Trine);
        assert!(asp.exact_orb < 1e-9);
        assert!(!asp.is_applying);
    }

    #[test]
    fn applying_when_closing() {
        // Saturn 85 deg behind the Moon; the Moon pulls away towards the square
        let a = input(Graha::Chandra, 0.0, 13.0);
        let b = input(Graha::Shani, 275.0, 0.05);
        let asp = aspect_between(&a, &b, &OrbTable::default()).unwrap();
        assert_eq!(asp.kind, AspectKind::Square);
        assert!((asp.exact_orb - 5.0).abs() < 1e-9);
        assert!(asp.is_applying);
        // past exact, the same motion widens the square
        let b = input(Graha::Shani, 265.0, 0.05);
        let asp = aspect_between(&a, &b, &OrbTable::default()).unwrap();
        assert_eq!(asp.kind, AspectKind::Square);
        assert!(!asp.is_applying);
    }

    #[test]
    fn applying_is_symmetric_for_pair() {
        let a = input(Graha::Chandra, 350.0, 13.0);
        let b = input(Graha::Mangal, 355.0, 0.7);
        let ab = aspect_between(&a, &b, &OrbTable::default()).unwrap();
        let ba = aspect_between(&b, &a, &OrbTable::default()).unwrap();
        assert_eq!(ab.kind, AspectKind::Conjunction);
        assert_eq!(ab.is_applying, ba.is_applying);
        assert!(ab.is_applying);
    }

    #[test]
    fn retrograde_opposition_applying() {
        // Saturn retrograde moving back towards exact opposition with the Sun
        let a = input(Graha::Surya, 0.0, 1.0);
        let b = input(Graha::Shani, 184.0, -0.05);
        let asp = aspect_between(&a, &b, &OrbTable::default()).unwrap();
        assert_eq!(asp.kind, AspectKind::Opposition);
        // separation is 176, growing towards 180
        assert!(asp.is_applying);
    }

    #[test]
    fn out_of_orb_is_none() {
        let a = input(Graha::Rahu, 0.0, -0.05);
        let b = input(Graha::Ketu, 40.0, -0.05);
        assert!(aspect_between(&a, &b, &OrbTable::default()).is_none());
    }

    #[test]
    fn table_lists_ordered_pairs() {
        let inputs = [input(Graha::Surya, 10.0, 1.0), input(Graha::Guru, 130.0, 0.1)];
        let table = aspects(&inputs, &OrbTable::default());
        assert_eq!(table.aspects.len(), 2);
        assert_eq!(table.drishti.len(), 2);
        assert!(table.between(Graha::Guru.into(), Graha::Surya.into()).is_some());
        let d = table.drishti_on(Graha::Guru, Graha::Surya).unwrap();
        assert!((d.angular_distance - 240.0).abs() < EPS);
        // Jupiter's 9th aspect
        assert!((d.special_virupa - 30.0).abs() < EPS);
    }

    #[test]
    fn sign_aspects() {
        assert!(aspects_sign(Graha::Guru, 0, 4));
        assert!(aspects_sign(Graha::Guru, 0, 8));
        assert!(aspects_sign(Graha::Surya, 0, 6));
        assert!(!aspects_sign(Graha::Surya, 0, 4));
        assert!(aspects_sign(Graha::Shani, 0, 9));
        assert!(aspects_sign(Graha::Mangal, 0, 3));
    }
}
