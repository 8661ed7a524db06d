//! Yoga (planetary combination) detection.
//!
//! Each yoga is a pure predicate over a read-only [`YogaContext`]. The
//! detector walks [`YOGA_RULES`] once and keeps every match; rules are
//! independent, so one placement may satisfy several yogas at once.
//!
//! House occupancy comes from the chart's houses. Lordship and
//! Moon/Sun-relative counts use signs counted from the lagna sign.

use serde::{Deserialize, Serialize};

use crate::combustion::is_combust;
use crate::drishti::{AspectKind, AspectTable, aspects_sign};
use crate::graha::{Body, Graha, SAPTA_GRAHAS, rashi_distance, rashi_lord};
use crate::graha_relationships::{
    BeneficNature, Dignity, debilitation_rashi, dignity_in_rashi, exaltation_rashi,
    natural_benefic_malefic, own_signs,
};
use crate::rashi::Rashi;
use crate::shadbala::{StrengthBands, StrengthRating};
use crate::util::arc_forward;

/// Mars, Mercury, Jupiter, Venus and Saturn.
const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

const KENDRAS: [u8; 4] = [1, 4, 7, 10];
const TRIKONAS: [u8; 3] = [1, 5, 9];
const DUSTHANAS: [u8; 3] = [6, 8, 12];

/// Percentage given to a yoga whose bodies are all exalted and unaspected.
const FULL_DIGNITY_PERCENT: f64 = 125.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaCategory {
    Mahapurusha,
    Lunar,
    Solar,
    Raja,
    Dhana,
    Special,
    Arishta,
    Exchange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    pub name: String,
    pub category: YogaCategory,
    pub bodies: Vec<Graha>,
    pub houses: Vec<u8>,
    pub is_auspicious: bool,
    pub strength_percentage: f64,
    pub rating: StrengthRating,
    pub effects: String,
    /// Classical factors that may cancel a negative yoga. Descriptive only;
    /// the yoga is still reported.
    pub cancellation_factors: Vec<String>,
}

/// Where one graha sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Sidereal longitude in degrees.
    pub lon: f64,
    pub speed: f64,
    /// Chart house, 1-12.
    pub house: u8,
}

impl Placement {
    pub fn rashi(&self) -> u8 {
        crate::rashi::rashi_from_longitude(self.lon).rashi.index()
    }
}

/// Read-only view the rules evaluate.
#[derive(Debug, Clone, Copy)]
pub struct YogaContext<'a> {
    /// Indexed by `Graha::index()`; None when unavailable.
    pub placements: [Option<Placement>; 9],
    pub lagna_rashi: u8,
    pub aspects: &'a AspectTable,
    pub bands: StrengthBands,
}

impl YogaContext<'_> {
    pub fn placement(&self, graha: Graha) -> Option<&Placement> {
        self.placements[graha.index() as usize].as_ref()
    }

    pub fn rashi(&self, graha: Graha) -> Option<u8> {
        self.placement(graha).map(Placement::rashi)
    }

    pub fn house(&self, graha: Graha) -> Option<u8> {
        self.placement(graha).map(|p| p.house)
    }

    /// Lord of the sign on the given house counted from the lagna sign.
    pub fn house_lord(&self, house: u8) -> Graha {
        rashi_lord(Rashi::from_index(self.lagna_rashi + house - 1))
    }

    /// Sign distance (1-based) from `from` to `to`.
    pub fn sign_distance(&self, from: Graha, to: Graha) -> Option<u8> {
        Some(rashi_distance(self.rashi(from)?, self.rashi(to)?))
    }

    /// Sign house (1-based) of `graha` counted from the lagna sign.
    pub fn sign_house(&self, graha: Graha) -> Option<u8> {
        Some(rashi_distance(self.lagna_rashi, self.rashi(graha)?))
    }

    fn in_house_set(&self, graha: Graha, set: &[u8]) -> bool {
        self.house(graha).is_some_and(|h| set.contains(&h))
    }

    /// Same sign, mutual sign aspect, or sign exchange.
    pub fn associated(&self, a: Graha, b: Graha) -> bool {
        let (Some(ra), Some(rb)) = (self.rashi(a), self.rashi(b)) else {
            return false;
        };
        ra == rb
            || (aspects_sign(a, ra, rb) && aspects_sign(b, rb, ra))
            || self.exchanged(a, b)
    }

    /// Each graha occupies a sign owned by the other.
    pub fn exchanged(&self, a: Graha, b: Graha) -> bool {
        if a == b || a.is_node() || b.is_node() {
            return false;
        }
        let (Some(ra), Some(rb)) = (self.rashi(a), self.rashi(b)) else {
            return false;
        };
        own_signs(b).contains(&ra) && own_signs(a).contains(&rb)
    }

    fn is_combust(&self, graha: Graha) -> bool {
        let (Some(p), Some(sun)) = (self.placement(graha), self.placement(Graha::Surya)) else {
            return false;
        };
        is_combust(graha, p.lon, sun.lon, p.speed < 0.0)
    }

    /// Net support from geometric aspects received: benefic harmonious
    /// aspects add, malefic hard aspects subtract.
    fn aspect_support(&self, graha: Graha) -> f64 {
        let target = Body::Classical(graha);
        let mut support: f64 = 0.0;
        for aspect in self.aspects.aspects.iter().filter(|a| a.to == target) {
            let Some(src) = aspect.from.graha() else {
                continue;
            };
            let harmonious = matches!(
                aspect.kind,
                AspectKind::Conjunction | AspectKind::Sextile | AspectKind::Trine
            );
            match (natural_benefic_malefic(src), harmonious) {
                (BeneficNature::Benefic, true) => support += 0.1,
                (BeneficNature::Malefic, false) => support -= 0.1,
                _ => {}
            }
        }
        support.clamp(-0.2, 0.2)
    }

    /// Support factor for one graha: dignity quality, halved when combust,
    /// adjusted by aspects.
    fn body_factor(&self, graha: Graha) -> f64 {
        let Some(p) = self.placement(graha) else {
            return 0.0;
        };
        let mut factor = dignity_in_rashi(graha, p.lon).quality();
        if self.is_combust(graha) {
            factor *= 0.5;
        }
        (factor + self.aspect_support(graha)).max(0.0)
    }

    /// Strength percentage from the mean support of the triggering bodies.
    pub fn strength_of(&self, bodies: &[Graha]) -> f64 {
        if bodies.is_empty() {
            return 0.0;
        }
        let mean = bodies.iter().map(|&g| self.body_factor(g)).sum::<f64>() / bodies.len() as f64;
        mean * FULL_DIGNITY_PERCENT
    }

    fn yoga(
        &self,
        name: &str,
        category: YogaCategory,
        mut bodies: Vec<Graha>,
        is_auspicious: bool,
        effects: &str,
        cancellation_factors: Vec<String>,
    ) -> Yoga {
        bodies.sort();
        bodies.dedup();
        let mut houses: Vec<u8> = bodies.iter().filter_map(|&g| self.house(g)).collect();
        houses.sort_unstable();
        houses.dedup();
        let strength_percentage = self.strength_of(&bodies);
        Yoga {
            name: name.to_string(),
            category,
            bodies,
            houses,
            is_auspicious,
            strength_percentage,
            rating: self.bands.rate(strength_percentage),
            effects: effects.to_string(),
            cancellation_factors,
        }
    }
}

/// One named predicate.
#[derive(Debug, Clone, Copy)]
pub struct YogaRule {
    pub name: &'static str,
    pub detect: fn(&YogaContext<'_>) -> Option<Yoga>,
}

/// Every rule, in reporting order.
pub const YOGA_RULES: &[YogaRule] = &[
    YogaRule { name: "Ruchaka", detect: ruchaka },
    YogaRule { name: "Bhadra", detect: bhadra },
    YogaRule { name: "Hamsa", detect: hamsa },
    YogaRule { name: "Malavya", detect: malavya },
    YogaRule { name: "Sasa", detect: sasa },
    YogaRule { name: "Gajakesari", detect: gajakesari },
    YogaRule { name: "Budhaditya", detect: budhaditya },
    YogaRule { name: "Chandra-Mangala", detect: chandra_mangala },
    YogaRule { name: "Sunapha", detect: sunapha },
    YogaRule { name: "Anapha", detect: anapha },
    YogaRule { name: "Durudhara", detect: durudhara },
    YogaRule { name: "Kemadruma", detect: kemadruma },
    YogaRule { name: "Vesi", detect: vesi },
    YogaRule { name: "Vasi", detect: vasi },
    YogaRule { name: "Ubhayachari", detect: ubhayachari },
    YogaRule { name: "Adhi", detect: adhi },
    YogaRule { name: "Amala", detect: amala },
    YogaRule { name: "Raja", detect: raja },
    YogaRule { name: "Dhana", detect: dhana },
    YogaRule { name: "Viparita Raja", detect: viparita_raja },
    YogaRule { name: "Neecha Bhanga", detect: neecha_bhanga },
    YogaRule { name: "Parivartana", detect: parivartana },
    YogaRule { name: "Kala Sarpa", detect: kala_sarpa },
    YogaRule { name: "Guru-Chandala", detect: guru_chandala },
];

/// Run every rule against the context.
pub fn detect_yogas(ctx: &YogaContext<'_>) -> Vec<Yoga> {
    YOGA_RULES.iter().filter_map(|rule| (rule.detect)(ctx)).collect()
}

// ---------------------------------------------------------------------------
// Pancha Mahapurusha
// ---------------------------------------------------------------------------

/// Graha in a kendra and in its own or exaltation sign.
fn mahapurusha(ctx: &YogaContext<'_>, graha: Graha, name: &str, effects: &str) -> Option<Yoga> {
    let rashi = ctx.rashi(graha)?;
    let dignified = rashi == exaltation_rashi(graha) || own_signs(graha).contains(&rashi);
    (dignified && ctx.in_house_set(graha, &KENDRAS)).then(|| {
        ctx.yoga(name, YogaCategory::Mahapurusha, vec![graha], true, effects, Vec::new())
    })
}

fn ruchaka(ctx: &YogaContext<'_>) -> Option<Yoga> {
    mahapurusha(ctx, Graha::Mangal, "Ruchaka", "courage, command and physical vigour")
}

fn bhadra(ctx: &YogaContext<'_>) -> Option<Yoga> {
    mahapurusha(ctx, Graha::Buddh, "Bhadra", "intellect, eloquence and skill in trade")
}

fn hamsa(ctx: &YogaContext<'_>) -> Option<Yoga> {
    mahapurusha(ctx, Graha::Guru, "Hamsa", "wisdom, virtue and respect of the learned")
}

fn malavya(ctx: &YogaContext<'_>) -> Option<Yoga> {
    mahapurusha(ctx, Graha::Shukra, "Malavya", "comfort, refinement and artistic taste")
}

fn sasa(ctx: &YogaContext<'_>) -> Option<Yoga> {
    mahapurusha(ctx, Graha::Shani, "Sasa", "authority over people and perseverance")
}

// ---------------------------------------------------------------------------
// Lunar and solar
// ---------------------------------------------------------------------------

fn gajakesari(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let d = ctx.sign_distance(Graha::Chandra, Graha::Guru)?;
    KENDRAS.contains(&d).then(|| {
        ctx.yoga(
            "Gajakesari",
            YogaCategory::Lunar,
            vec![Graha::Chandra, Graha::Guru],
            true,
            "lasting reputation, intelligence and prosperity",
            Vec::new(),
        )
    })
}

fn budhaditya(ctx: &YogaContext<'_>) -> Option<Yoga> {
    (ctx.sign_distance(Graha::Surya, Graha::Buddh)? == 1).then(|| {
        ctx.yoga(
            "Budhaditya",
            YogaCategory::Solar,
            vec![Graha::Surya, Graha::Buddh],
            true,
            "sharp intellect and skill in communication",
            Vec::new(),
        )
    })
}

fn chandra_mangala(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let d = ctx.sign_distance(Graha::Chandra, Graha::Mangal)?;
    (d == 1 || d == 7).then(|| {
        ctx.yoga(
            "Chandra-Mangala",
            YogaCategory::Dhana,
            vec![Graha::Chandra, Graha::Mangal],
            true,
            "earnings through enterprise",
            Vec::new(),
        )
    })
}

/// Tara grahas in the given sign distance from `from`.
fn tara_at(ctx: &YogaContext<'_>, from: Graha, distance: u8, exclude: Graha) -> Vec<Graha> {
    TARA_GRAHAS
        .iter()
        .copied()
        .filter(|&g| g != exclude && ctx.sign_distance(from, g) == Some(distance))
        .collect()
}

fn sunapha(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let second = tara_at(ctx, Graha::Chandra, 2, Graha::Chandra);
    (!second.is_empty()).then(|| {
        let mut bodies = second;
        bodies.push(Graha::Chandra);
        ctx.yoga(
            "Sunapha",
            YogaCategory::Lunar,
            bodies,
            true,
            "self-earned wealth and good standing",
            Vec::new(),
        )
    })
}

fn anapha(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let twelfth = tara_at(ctx, Graha::Chandra, 12, Graha::Chandra);
    (!twelfth.is_empty()).then(|| {
        let mut bodies = twelfth;
        bodies.push(Graha::Chandra);
        ctx.yoga(
            "Anapha",
            YogaCategory::Lunar,
            bodies,
            true,
            "good health, poise and renown",
            Vec::new(),
        )
    })
}

fn durudhara(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let second = tara_at(ctx, Graha::Chandra, 2, Graha::Chandra);
    let twelfth = tara_at(ctx, Graha::Chandra, 12, Graha::Chandra);
    (!second.is_empty() && !twelfth.is_empty()).then(|| {
        let mut bodies = second;
        bodies.extend(twelfth);
        bodies.push(Graha::Chandra);
        ctx.yoga(
            "Durudhara",
            YogaCategory::Lunar,
            bodies,
            true,
            "wealth, vehicles and a generous nature",
            Vec::new(),
        )
    })
}

fn kemadruma(ctx: &YogaContext<'_>) -> Option<Yoga> {
    ctx.rashi(Graha::Chandra)?;
    // An empty sign next to the Moon only counts when every tara graha is placed.
    for g in TARA_GRAHAS {
        ctx.rashi(g)?;
    }
    let flanked = !tara_at(ctx, Graha::Chandra, 2, Graha::Chandra).is_empty()
        || !tara_at(ctx, Graha::Chandra, 12, Graha::Chandra).is_empty();
    let accompanied = !tara_at(ctx, Graha::Chandra, 1, Graha::Chandra).is_empty();
    if flanked || accompanied {
        return None;
    }

    let mut factors = Vec::new();
    let kendra_from_moon: Vec<&str> = TARA_GRAHAS
        .iter()
        .filter(|&&g| {
            ctx.sign_distance(Graha::Chandra, g)
                .is_some_and(|d| KENDRAS.contains(&d))
        })
        .map(|g| g.name())
        .collect();
    if !kendra_from_moon.is_empty() {
        factors.push(format!("kendra from the Moon occupied by {}", kendra_from_moon.join(", ")));
    }
    if ctx.in_house_set(Graha::Chandra, &KENDRAS) {
        factors.push("Moon in a kendra from the lagna".to_string());
    }
    let jupiter_aspects_moon = match (ctx.rashi(Graha::Guru), ctx.rashi(Graha::Chandra)) {
        (Some(jr), Some(mr)) => aspects_sign(Graha::Guru, jr, mr),
        _ => false,
    };
    if jupiter_aspects_moon {
        factors.push("Jupiter aspects the Moon".to_string());
    }

    Some(ctx.yoga(
        "Kemadruma",
        YogaCategory::Arishta,
        vec![Graha::Chandra],
        false,
        "isolation and fluctuating fortunes",
        factors,
    ))
}

fn vesi(ctx: &YogaContext<'_>) -> Option<Yoga> {
    ctx.rashi(Graha::Surya)?;
    let second = tara_at(ctx, Graha::Surya, 2, Graha::Surya);
    (!second.is_empty()).then(|| {
        let mut bodies = second;
        bodies.push(Graha::Surya);
        ctx.yoga("Vesi", YogaCategory::Solar, bodies, true, "balanced outlook and truthfulness", Vec::new())
    })
}

fn vasi(ctx: &YogaContext<'_>) -> Option<Yoga> {
    ctx.rashi(Graha::Surya)?;
    let twelfth = tara_at(ctx, Graha::Surya, 12, Graha::Surya);
    (!twelfth.is_empty()).then(|| {
        let mut bodies = twelfth;
        bodies.push(Graha::Surya);
        ctx.yoga("Vasi", YogaCategory::Solar, bodies, true, "prosperity and charitable disposition", Vec::new())
    })
}

fn ubhayachari(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let second = tara_at(ctx, Graha::Surya, 2, Graha::Surya);
    let twelfth = tara_at(ctx, Graha::Surya, 12, Graha::Surya);
    (!second.is_empty() && !twelfth.is_empty()).then(|| {
        let mut bodies = second;
        bodies.extend(twelfth);
        bodies.push(Graha::Surya);
        ctx.yoga(
            "Ubhayachari",
            YogaCategory::Solar,
            bodies,
            true,
            "eloquence, stature and royal favour",
            Vec::new(),
        )
    })
}

/// At least two of Mercury, Jupiter and Venus in the 6th, 7th or 8th from
/// the Moon.
fn adhi(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let placed: Vec<Graha> = [Graha::Buddh, Graha::Guru, Graha::Shukra]
        .into_iter()
        .filter(|&g| {
            ctx.sign_distance(Graha::Chandra, g)
                .is_some_and(|d| (6..=8).contains(&d))
        })
        .collect();
    (placed.len() >= 2).then(|| {
        ctx.yoga("Adhi", YogaCategory::Lunar, placed, true, "leadership, comfort and long life", Vec::new())
    })
}

/// A natural benefic in the 10th from the lagna or from the Moon.
fn amala(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let benefics: Vec<Graha> = [Graha::Buddh, Graha::Guru, Graha::Shukra]
        .into_iter()
        .filter(|&g| ctx.house(g) == Some(10) || ctx.sign_distance(Graha::Chandra, g) == Some(10))
        .collect();
    (!benefics.is_empty()).then(|| {
        ctx.yoga("Amala", YogaCategory::Special, benefics, true, "spotless reputation and ethical conduct", Vec::new())
    })
}

// ---------------------------------------------------------------------------
// Lordship combinations
// ---------------------------------------------------------------------------

/// Distinct lord pairs from two house sets that are associated.
fn associated_lords(ctx: &YogaContext<'_>, first: &[u8], second: &[u8]) -> Vec<Graha> {
    let mut bodies = Vec::new();
    for &h1 in first {
        for &h2 in second {
            let (a, b) = (ctx.house_lord(h1), ctx.house_lord(h2));
            if a != b && ctx.associated(a, b) {
                bodies.push(a);
                bodies.push(b);
            }
        }
    }
    bodies
}

fn raja(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let bodies = associated_lords(ctx, &KENDRAS, &TRIKONAS);
    (!bodies.is_empty()).then(|| {
        ctx.yoga(
            "Raja",
            YogaCategory::Raja,
            bodies,
            true,
            "rise in status, power and recognition",
            Vec::new(),
        )
    })
}

fn dhana(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let bodies = associated_lords(ctx, &[2, 11], &[5, 9]);
    (!bodies.is_empty()).then(|| {
        ctx.yoga("Dhana", YogaCategory::Dhana, bodies, true, "accumulation of wealth", Vec::new())
    })
}

fn viparita_raja(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let bodies: Vec<Graha> = DUSTHANAS
        .iter()
        .map(|&h| ctx.house_lord(h))
        .filter(|&lord| ctx.in_house_set(lord, &DUSTHANAS))
        .collect();
    (!bodies.is_empty()).then(|| {
        ctx.yoga(
            "Viparita Raja",
            YogaCategory::Raja,
            bodies,
            true,
            "success arising out of adversity",
            Vec::new(),
        )
    })
}

/// A debilitated graha whose debilitation or exaltation sign lord stands in
/// a kendra from the lagna or the Moon.
fn neecha_bhanga(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let moon_rashi = ctx.rashi(Graha::Chandra);
    let in_kendra = |g: Graha| {
        let from_lagna = ctx.sign_house(g).is_some_and(|h| KENDRAS.contains(&h));
        let from_moon = match (moon_rashi, ctx.rashi(g)) {
            (Some(m), Some(r)) => KENDRAS.contains(&rashi_distance(m, r)),
            _ => false,
        };
        from_lagna || from_moon
    };
    let mut bodies = Vec::new();
    for g in SAPTA_GRAHAS {
        let Some(p) = ctx.placement(g) else {
            continue;
        };
        if dignity_in_rashi(g, p.lon) != Dignity::Debilitated {
            continue;
        }
        let neecha_lord = rashi_lord(Rashi::from_index(debilitation_rashi(g)));
        let uchcha_lord = rashi_lord(Rashi::from_index(exaltation_rashi(g)));
        if let Some(&canceller) = [neecha_lord, uchcha_lord].iter().find(|&&l| in_kendra(l)) {
            bodies.push(g);
            bodies.push(canceller);
        }
    }
    (!bodies.is_empty()).then(|| {
        ctx.yoga(
            "Neecha Bhanga",
            YogaCategory::Raja,
            bodies,
            true,
            "debilitation cancelled; rise after early struggle",
            Vec::new(),
        )
    })
}

fn parivartana(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let mut bodies = Vec::new();
    for (i, &a) in SAPTA_GRAHAS.iter().enumerate() {
        for &b in &SAPTA_GRAHAS[i + 1..] {
            if ctx.exchanged(a, b) {
                bodies.push(a);
                bodies.push(b);
            }
        }
    }
    (!bodies.is_empty()).then(|| {
        ctx.yoga(
            "Parivartana",
            YogaCategory::Exchange,
            bodies,
            true,
            "the exchanged houses support each other",
            Vec::new(),
        )
    })
}

// ---------------------------------------------------------------------------
// Negative
// ---------------------------------------------------------------------------

/// All seven grahas on one side of the Rahu-Ketu axis.
fn kala_sarpa(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let rahu = ctx.placement(Graha::Rahu)?.lon;
    let mut arcs = Vec::with_capacity(7);
    for g in SAPTA_GRAHAS {
        arcs.push(arc_forward(rahu, ctx.placement(g)?.lon));
    }
    let one_side = arcs.iter().all(|&a| a > 0.0 && a < 180.0)
        || arcs.iter().all(|&a| a > 180.0);
    if !one_side {
        return None;
    }

    let mut factors = Vec::new();
    let rahu_rashi = ctx.rashi(Graha::Rahu);
    let ketu_rashi = ctx.rashi(Graha::Ketu);
    for g in SAPTA_GRAHAS {
        let r = ctx.rashi(g);
        if r.is_some() && (r == rahu_rashi || r == ketu_rashi) {
            factors.push(format!("{} shares a sign with a node", g.name()));
        }
    }
    let mut bodies = SAPTA_GRAHAS.to_vec();
    bodies.extend([Graha::Rahu, Graha::Ketu]);
    Some(ctx.yoga(
        "Kala Sarpa",
        YogaCategory::Arishta,
        bodies,
        false,
        "obstacles and delays until the nodes mature",
        factors,
    ))
}

fn guru_chandala(ctx: &YogaContext<'_>) -> Option<Yoga> {
    let guru = ctx.rashi(Graha::Guru)?;
    let node = [Graha::Rahu, Graha::Ketu]
        .into_iter()
        .find(|&n| ctx.rashi(n) == Some(guru))?;

    let mut factors = Vec::new();
    if guru == exaltation_rashi(Graha::Guru) || own_signs(Graha::Guru).contains(&guru) {
        factors.push("Jupiter exalted or in its own sign".to_string());
    }
    if ctx.in_house_set(Graha::Guru, &KENDRAS) {
        factors.push("Jupiter in a kendra".to_string());
    }
    Some(ctx.yoga(
        "Guru-Chandala",
        YogaCategory::Arishta,
        vec![Graha::Guru, node],
        false,
        "unorthodox views and friction with teachers",
        factors,
    ))
}
