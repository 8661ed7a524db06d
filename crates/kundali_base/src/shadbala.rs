//! Shadbala (six-fold planetary strength).
//!
//! Pure math over a prepared [`ShadbalaInputs`]. All values are virupas
//! (shashtiamsas, 1/60 rupa) unless the name says rupas.
//!
//! The six components:
//! 1. Sthana (positional): uchcha + saptavargaja + ojhayugma + kendradi + drekkana
//! 2. Dig (directional)
//! 3. Kala (temporal): nathonnatha + paksha + tribhaga + vara + hora + ayana + yuddha
//! 4. Cheshta (motional)
//! 5. Naisargika (natural)
//! 6. Drik (aspectual)
//!
//! Rahu and Ketu are scored with the tables of Saturn and Mars respectively.
//! Their cheshta is a fixed 30.

use serde::{Deserialize, Serialize};

use crate::drishti::AspectTable;
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::graha_relationships::{
    BeneficNature, Dignity, dignity_with_positions, exaltation_degree, moon_benefic_nature,
    natural_benefic_malefic,
};
use crate::rashi::rashi_from_longitude;
use crate::util::{normalize_360, separation};
use crate::varga::{SAPTAVARGA, Varga, varga_rashi};

/// Substitute value for a sub-component whose prerequisite is undefined.
pub const NEUTRAL_VIRUPA: f64 = 30.0;

/// Fixed cheshta for Rahu and Ketu.
pub const NODE_CHESHTA: f64 = 30.0;

// ---------------------------------------------------------------------------
// Constant tables
// ---------------------------------------------------------------------------

/// Classical constant tables, indexed Sun..Saturn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadbalaConstants {
    /// Natural strength in virupas.
    pub naisargika: [f64; 7],
    /// House whose cusp gives full directional strength.
    pub dig_bala_bhava: [u8; 7],
    /// Daily speed giving full cheshta.
    pub max_speed: [f64; 7],
    /// Minimum total (virupas) for a graha to count as strong.
    pub required_virupas: [f64; 7],
}

impl Default for ShadbalaConstants {
    fn default() -> Self {
        Self {
            naisargika: [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57],
            dig_bala_bhava: [10, 4, 10, 1, 1, 4, 7],
            max_speed: [1.0, 15.0, 0.8, 2.2, 0.25, 1.6, 0.13],
            required_virupas: [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0],
        }
    }
}

impl ShadbalaConstants {
    /// Row used for `graha`; nodes borrow Saturn (Rahu) and Mars (Ketu).
    pub const fn table_index(graha: Graha) -> usize {
        match graha {
            Graha::Rahu => 6,
            Graha::Ketu => 2,
            g => g.index() as usize,
        }
    }

    pub fn naisargika_for(&self, graha: Graha) -> f64 {
        self.naisargika[Self::table_index(graha)]
    }

    pub fn dig_bhava_for(&self, graha: Graha) -> u8 {
        self.dig_bala_bhava[Self::table_index(graha)]
    }

    pub fn required_rupas_for(&self, graha: Graha) -> f64 {
        self.required_virupas[Self::table_index(graha)] / 60.0
    }

    pub fn validate(&self) -> Result<(), VedicError> {
        if self.dig_bala_bhava.iter().any(|&b| b == 0 || b > 12) {
            return Err(VedicError::InvalidInput("dig bala house must be 1-12"));
        }
        if self.max_speed.iter().any(|&s| !(s > 0.0)) {
            return Err(VedicError::InvalidInput("max speed must be positive"));
        }
        if self.required_virupas.iter().any(|&r| !(r > 0.0)) {
            return Err(VedicError::InvalidInput("required strength must be positive"));
        }
        Ok(())
    }
}

/// Qualitative rating of a percentage of the required strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthRating {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

/// Lower band edges in percent, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthBands {
    pub very_strong: f64,
    pub strong: f64,
    pub moderate: f64,
    pub weak: f64,
}

impl Default for StrengthBands {
    fn default() -> Self {
        Self {
            very_strong: 125.0,
            strong: 100.0,
            moderate: 75.0,
            weak: 50.0,
        }
    }
}

impl StrengthBands {
    pub fn rate(&self, percentage: f64) -> StrengthRating {
        if percentage >= self.very_strong {
            StrengthRating::VeryStrong
        } else if percentage >= self.strong {
            StrengthRating::Strong
        } else if percentage >= self.moderate {
            StrengthRating::Moderate
        } else if percentage >= self.weak {
            StrengthRating::Weak
        } else {
            StrengthRating::VeryWeak
        }
    }

    /// Edges must be finite and strictly descending.
    pub fn validate(&self) -> Result<(), VedicError> {
        let edges = [self.very_strong, self.strong, self.moderate, self.weak];
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(VedicError::InvalidInput("band edges must be finite"));
        }
        if edges.windows(2).any(|w| w[0] <= w[1]) {
            return Err(VedicError::InvalidInput("band edges must be strictly descending"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// Birth within the day or the night, and the elapsed fraction of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayNight {
    pub is_daytime: bool,
    /// 0.0 at sunrise (day) or sunset (night), 1.0 at the next one.
    pub fraction: f64,
}

/// Everything the six components read, for all 9 grahas in graha order.
#[derive(Debug, Clone, Copy)]
pub struct ShadbalaInputs<'a> {
    pub sidereal_lons: [f64; 9],
    /// Degrees per day; negative when retrograde.
    pub speeds: [f64; 9],
    /// Tropical declinations in degrees.
    pub declinations: [f64; 9],
    /// House (1-12) per graha.
    pub houses: [u8; 9],
    /// Sidereal house cusps.
    pub cusps: [f64; 12],
    /// Grahas with a known position. Unavailable ones cast no drishti and
    /// fight no war.
    pub available: [bool; 9],
    /// Moon longitude minus Sun longitude. None when either luminary is
    /// unavailable; phase-dependent values then fall back to
    /// [`NEUTRAL_VIRUPA`].
    pub moon_sun_elongation: Option<f64>,
    /// None when sunrise or sunset is undefined at the location.
    pub day_night: Option<DayNight>,
    pub weekday_lord: Graha,
    /// None when the planetary hour cannot be located.
    pub hora_lord: Option<Graha>,
    pub drishti: &'a AspectTable,
}

/// The six top-level components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadbalaComponent {
    Sthana,
    Dig,
    Kala,
    Cheshta,
    Naisargika,
    Drik,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SthanaBreakdown {
    pub uchcha: f64,
    pub saptavargaja: f64,
    pub ojhayugma: f64,
    pub kendradi: f64,
    pub drekkana: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KalaBreakdown {
    pub nathonnatha: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub vara: f64,
    pub hora: f64,
    pub ayana: f64,
    pub yuddha: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadbalaResult {
    pub body: Graha,
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub cheshta: f64,
    pub naisargika: f64,
    /// Aspectual strength floored at zero.
    pub drik: f64,
    /// Raw benefic-minus-malefic aspectual value, may be negative.
    pub drik_net: f64,
    pub sthana_parts: SthanaBreakdown,
    pub kala_parts: KalaBreakdown,
    pub total_virupas: f64,
    pub total_rupas: f64,
    pub required_rupas: f64,
    pub percentage_of_required: f64,
    pub rating: StrengthRating,
    /// Components that used [`NEUTRAL_VIRUPA`] or a partial body set.
    pub degraded_components: Vec<ShadbalaComponent>,
}

impl ShadbalaResult {
    pub fn is_degraded(&self) -> bool {
        !self.degraded_components.is_empty()
    }

    pub fn is_strong(&self) -> bool {
        self.total_rupas >= self.required_rupas
    }
}

// ---------------------------------------------------------------------------
// Sthana bala
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Male,
    Female,
    Neuter,
}

fn gender(graha: Graha) -> Gender {
    match ALL_GRAHAS[ShadbalaConstants::table_index(graha)] {
        Graha::Surya | Graha::Mangal | Graha::Guru => Gender::Male,
        Graha::Chandra | Graha::Shukra => Gender::Female,
        _ => Gender::Neuter,
    }
}

fn saptavargaja_points(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 30.0,
        Dignity::Moolatrikone => 22.5,
        Dignity::OwnSign => 20.0,
        Dignity::AdhiMitra => 15.0,
        Dignity::Mitra => 10.0,
        Dignity::Sama => 7.5,
        Dignity::Shatru => 5.0,
        Dignity::AdhiShatru => 2.5,
        Dignity::Debilitated => 1.25,
    }
}

/// Uchcha bala: 60 at the exaltation degree falling to 0 at debilitation.
pub fn uchcha_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    60.0 * (1.0 - separation(sidereal_lon, exaltation_degree(graha)) / 180.0)
}

/// Rashi of every sapta graha in `varga`.
fn varga_positions(sidereal_lons: &[f64; 9], varga: Varga) -> [u8; 7] {
    let mut out = [0u8; 7];
    for (slot, g) in out.iter_mut().zip(SAPTA_GRAHAS) {
        *slot = varga_rashi(sidereal_lons[g.index() as usize], varga).index();
    }
    out
}

/// Saptavargaja bala: dignity points summed over the seven vargas, with
/// compound friendship taken from each varga's own positions.
pub fn saptavargaja_bala(graha: Graha, sidereal_lons: &[f64; 9]) -> f64 {
    let lon = sidereal_lons[graha.index() as usize];
    SAPTAVARGA
        .iter()
        .map(|&varga| {
            let positions = varga_positions(sidereal_lons, varga);
            // longitude in the varga sign, so sign-level dignity checks see it
            let varga_lon = varga_rashi(lon, varga).start_deg()
                + rashi_from_longitude(lon).degrees_in_rashi;
            let dignity = dignity_with_positions(graha, varga_lon, &positions);
            saptavargaja_points(dignity)
        })
        .sum()
}

/// Ojhayugma bala: 15 each for rashi and navamsha parity matching gender.
/// Neuter grahas score like males.
pub fn ojhayugma_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    let rashi_odd = rashi_from_longitude(sidereal_lon).rashi.is_odd();
    let navamsha_odd = varga_rashi(sidereal_lon, Varga::D9).is_odd();
    let wants_odd = gender(graha) != Gender::Female;
    [rashi_odd, navamsha_odd]
        .iter()
        .filter(|&&odd| odd == wants_odd)
        .count() as f64
        * 15.0
}

/// Kendradi bala: kendra 60, panaphara 30, apoklima 15.
pub fn kendradi_bala(house: u8) -> f64 {
    match house {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        3 | 6 | 9 | 12 => 15.0,
        _ => 0.0,
    }
}

/// Drekkana bala: male in the 1st decanate, female in the 2nd, neuter in
/// the 3rd score 15.
pub fn drekkana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    let deg = rashi_from_longitude(sidereal_lon).degrees_in_rashi;
    let decanate = ((deg / 10.0) as u8).min(2);
    match (gender(graha), decanate) {
        (Gender::Male, 0) | (Gender::Female, 1) | (Gender::Neuter, 2) => 15.0,
        _ => 0.0,
    }
}

pub fn sthana_bala(graha: Graha, inputs: &ShadbalaInputs<'_>) -> SthanaBreakdown {
    let gi = graha.index() as usize;
    let lon = inputs.sidereal_lons[gi];
    let uchcha = uchcha_bala(graha, lon);
    let saptavargaja = saptavargaja_bala(graha, &inputs.sidereal_lons);
    let ojhayugma = ojhayugma_bala(graha, lon);
    let kendradi = kendradi_bala(inputs.houses[gi]);
    let drekkana = drekkana_bala(graha, lon);
    SthanaBreakdown {
        uchcha,
        saptavargaja,
        ojhayugma,
        kendradi,
        drekkana,
        total: uchcha + saptavargaja + ojhayugma + kendradi + drekkana,
    }
}

// ---------------------------------------------------------------------------
// Dig bala
// ---------------------------------------------------------------------------

/// Dig bala: 60 on the cusp of the strong house, 0 opposite it.
pub fn dig_bala(graha: Graha, sidereal_lon: f64, cusps: &[f64; 12], constants: &ShadbalaConstants) -> f64 {
    let strong_cusp = cusps[(constants.dig_bhava_for(graha) - 1) as usize];
    60.0 * (1.0 - separation(sidereal_lon, strong_cusp) / 180.0)
}

// ---------------------------------------------------------------------------
// Kala bala
// ---------------------------------------------------------------------------

/// Benefic nature as used by the temporal sub-components: Moon and Mercury
/// follow the lunar phase, so they have none without an elongation.
fn temporal_nature(graha: Graha, moon_sun_elongation: Option<f64>) -> Option<BeneficNature> {
    match graha {
        Graha::Chandra | Graha::Buddh => moon_sun_elongation.map(moon_benefic_nature),
        g => Some(natural_benefic_malefic(g)),
    }
}

/// Nathonnatha bala: malefics strong by day, benefics by night.
/// Mercury is strong at all times. None for the Moon without a phase.
pub fn nathonnatha_bala(
    graha: Graha,
    is_daytime: bool,
    moon_sun_elongation: Option<f64>,
) -> Option<f64> {
    if graha == Graha::Buddh {
        return Some(60.0);
    }
    let strong = match (temporal_nature(graha, moon_sun_elongation)?, is_daytime) {
        (BeneficNature::Malefic, true) | (BeneficNature::Benefic, false) => true,
        _ => false,
    };
    Some(if strong { 60.0 } else { 0.0 })
}

/// Paksha bala of the Moon: 0 at new moon rising to 60 at full moon.
pub fn paksha_bala(moon_sun_elongation: f64) -> f64 {
    separation(moon_sun_elongation, 0.0) / 3.0
}

/// Tribhaga bala: the lord of the current third of day or night scores 60.
/// Jupiter always scores 60.
pub fn tribhaga_bala(graha: Graha, day_night: DayNight) -> f64 {
    if graha == Graha::Guru {
        return 60.0;
    }
    let third = ((day_night.fraction.clamp(0.0, 1.0) * 3.0) as u8).min(2);
    let lord = match (day_night.is_daytime, third) {
        (true, 0) => Graha::Buddh,
        (true, 1) => Graha::Surya,
        (true, _) => Graha::Shani,
        (false, 0) => Graha::Chandra,
        (false, 1) => Graha::Shukra,
        (false, _) => Graha::Mangal,
    };
    if graha == lord { 60.0 } else { 0.0 }
}

pub fn vara_bala(graha: Graha, weekday_lord: Graha) -> f64 {
    if graha == weekday_lord { 45.0 } else { 0.0 }
}

pub fn hora_bala(graha: Graha, hora_lord: Graha) -> f64 {
    if graha == hora_lord { 60.0 } else { 0.0 }
}

/// Ayana bala from declination: benefics gain with north declination,
/// malefics with south. The Sun is doubled. None for Moon and Mercury
/// without a phase.
pub fn ayana_bala(
    graha: Graha,
    declination_deg: f64,
    moon_sun_elongation: Option<f64>,
) -> Option<f64> {
    let kranti = declination_deg.clamp(-24.0, 24.0);
    let base = match temporal_nature(graha, moon_sun_elongation)? {
        BeneficNature::Benefic => (24.0 + kranti) / 48.0 * 60.0,
        BeneficNature::Malefic => (24.0 - kranti) / 48.0 * 60.0,
    };
    Some(if graha == Graha::Surya { base * 2.0 } else { base })
}

/// Yuddha bala: Mars through Saturn within 1 deg are at war; the one
/// further north wins 60 from each loser.
pub fn yuddha_bala(graha: Graha, inputs: &ShadbalaInputs<'_>) -> f64 {
    let at_war = |g: Graha| (2..7).contains(&g.index()) && inputs.available[g.index() as usize];
    if !at_war(graha) {
        return 0.0;
    }
    let gi = graha.index() as usize;
    SAPTA_GRAHAS
        .iter()
        .filter(|&&other| other != graha && at_war(other))
        .map(|&other| {
            let oi = other.index() as usize;
            if separation(inputs.sidereal_lons[gi], inputs.sidereal_lons[oi]) >= 1.0 {
                return 0.0;
            }
            let (mine, theirs) = (inputs.declinations[gi], inputs.declinations[oi]);
            if mine > theirs {
                60.0
            } else if mine < theirs {
                -60.0
            } else {
                0.0
            }
        })
        .sum()
}

/// Kala bala and whether it used a neutral substitute.
pub fn kala_bala(graha: Graha, inputs: &ShadbalaInputs<'_>) -> (KalaBreakdown, bool) {
    let gi = graha.index() as usize;
    let elong = inputs.moon_sun_elongation;
    let mut degraded = false;

    let mut or_neutral = |value: Option<f64>| match value {
        Some(v) => v,
        None => {
            degraded = true;
            NEUTRAL_VIRUPA
        }
    };

    let (nathonnatha, tribhaga) = match inputs.day_night {
        Some(dn) => (
            or_neutral(nathonnatha_bala(graha, dn.is_daytime, elong)),
            tribhaga_bala(graha, dn),
        ),
        None => (or_neutral(None), or_neutral(None)),
    };
    let hora = or_neutral(inputs.hora_lord.map(|lord| hora_bala(graha, lord)));
    let paksha = if graha == Graha::Chandra {
        or_neutral(elong.map(paksha_bala))
    } else {
        0.0
    };
    let ayana = or_neutral(ayana_bala(graha, inputs.declinations[gi], elong));
    let vara = vara_bala(graha, inputs.weekday_lord);
    let yuddha = yuddha_bala(graha, inputs);

    let total = (nathonnatha + paksha + tribhaga + vara + hora + ayana + yuddha).max(0.0);
    let parts = KalaBreakdown {
        nathonnatha,
        paksha,
        tribhaga,
        vara,
        hora,
        ayana,
        yuddha,
        total,
    };
    (parts, degraded)
}

// ---------------------------------------------------------------------------
// Cheshta, naisargika, drik
// ---------------------------------------------------------------------------

/// Cheshta bala and whether it used a neutral substitute. The Sun takes
/// its ayana bala, the Moon its paksha bala, nodes a fixed value; others
/// 60 when retrograde, else speed over the reference speed capped at 60.
pub fn cheshta_bala(
    graha: Graha,
    inputs: &ShadbalaInputs<'_>,
    constants: &ShadbalaConstants,
) -> (f64, bool) {
    let gi = graha.index() as usize;
    let from_phase = match graha {
        Graha::Surya => ayana_bala(graha, inputs.declinations[gi], inputs.moon_sun_elongation),
        Graha::Chandra => inputs.moon_sun_elongation.map(paksha_bala),
        Graha::Rahu | Graha::Ketu => Some(NODE_CHESHTA),
        _ => {
            let speed = inputs.speeds[gi];
            if speed < 0.0 {
                Some(60.0)
            } else {
                Some((speed / constants.max_speed[gi] * 60.0).min(60.0))
            }
        }
    };
    match from_phase {
        Some(v) => (v, false),
        None => (NEUTRAL_VIRUPA, true),
    }
}

/// Raw drik bala: (benefic virupas - malefic virupas) / 4 over the
/// drishti received by `graha`. Drishti from a body of unknown nature is
/// left out and reported through the flag.
pub fn drik_bala_net(
    graha: Graha,
    drishti: &AspectTable,
    moon_sun_elongation: Option<f64>,
) -> (f64, bool) {
    let mut skipped = false;
    let (benefic, malefic) = drishti
        .received_by(graha)
        .fold((0.0, 0.0), |(b, m), d| {
            match temporal_nature(d.from, moon_sun_elongation) {
                Some(BeneficNature::Benefic) => (b + d.total_virupa, m),
                Some(BeneficNature::Malefic) => (b, m + d.total_virupa),
                None => {
                    skipped = true;
                    (b, m)
                }
            }
        });
    ((benefic - malefic) / 4.0, skipped)
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

/// Complete shadbala for one graha.
pub fn shadbala(
    graha: Graha,
    inputs: &ShadbalaInputs<'_>,
    constants: &ShadbalaConstants,
    bands: &StrengthBands,
) -> ShadbalaResult {
    let gi = graha.index() as usize;
    let lon = normalize_360(inputs.sidereal_lons[gi]);
    let mut degraded_components = Vec::new();

    let sthana_parts = sthana_bala(graha, inputs);
    let dig = dig_bala(graha, lon, &inputs.cusps, constants);
    let (kala_parts, kala_degraded) = kala_bala(graha, inputs);
    if kala_degraded {
        degraded_components.push(ShadbalaComponent::Kala);
    }
    let (cheshta, cheshta_degraded) = cheshta_bala(graha, inputs, constants);
    if cheshta_degraded {
        degraded_components.push(ShadbalaComponent::Cheshta);
    }
    let cheshta = cheshta.max(0.0);
    let naisargika = constants.naisargika_for(graha);
    let (drik_net, drik_skipped) = drik_bala_net(graha, inputs.drishti, inputs.moon_sun_elongation);
    let drik = drik_net.max(0.0);
    let others_missing = ALL_GRAHAS
        .iter()
        .any(|&g| g != graha && !inputs.available[g.index() as usize]);
    if others_missing || drik_skipped {
        degraded_components.push(ShadbalaComponent::Drik);
    }

    let sthana = sthana_parts.total.max(0.0);
    let dig = dig.max(0.0);
    let kala = kala_parts.total;
    let total_virupas = sthana + dig + kala + cheshta + naisargika + drik;
    let total_rupas = total_virupas / 60.0;
    let required_rupas = constants.required_rupas_for(graha);
    let percentage_of_required = total_rupas / required_rupas * 100.0;

    ShadbalaResult {
        body: graha,
        sthana,
        dig,
        kala,
        cheshta,
        naisargika,
        drik,
        drik_net,
        sthana_parts,
        kala_parts,
        total_virupas,
        total_rupas,
        required_rupas,
        percentage_of_required,
        rating: bands.rate(percentage_of_required),
        degraded_components,
    }
}

/// Shadbala for every available graha, in graha order.
pub fn all_shadbalas(
    inputs: &ShadbalaInputs<'_>,
    constants: &ShadbalaConstants,
    bands: &StrengthBands,
) -> Vec<ShadbalaResult> {
    ALL_GRAHAS
        .iter()
        .filter(|g| inputs.available[g.index() as usize])
        .map(|&g| shadbala(g, inputs, constants, bands))
        .collect()
}
