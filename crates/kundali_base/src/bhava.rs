//! House (bhava) division strategies.
//!
//! Every strategy implements [`HouseSystem`]: twelve cusp longitudes from the
//! Ascendant, geographic latitude and local sidereal time. Quadrant systems
//! follow the usual oblique-ascension construction: Placidus trisects
//! semi-arcs in time, Koch divides the MC's ascensional difference,
//! Regiomontanus the equator, and Campanus the prime vertical.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::lagna::{
    OBLIQUITY_J2000_RAD, mc_longitude_rad, oblique_ascension_longitude_rad, ramc_rad,
};
use crate::rashi::rashi_from_longitude;
use crate::util::{arc_forward, normalize_360};

/// Latitude limit beyond which time-based systems are undefined.
pub const MAX_LATITUDE_DEG: f64 = 66.5;

const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_DEG: f64 = 1e-9;

/// A house division strategy.
///
/// `ascendant_deg` is tropical for ecliptic-geometric systems. Sign-based
/// systems ([`HouseSystem::is_sign_based`]) divide the sidereal zodiac, so
/// callers pass the sidereal ascendant and use the cusps as returned.
pub trait HouseSystem {
    fn name(&self) -> &'static str;

    fn cusps(
        &self,
        ascendant_deg: f64,
        latitude_deg: f64,
        lst_rad: f64,
    ) -> Result<[f64; 12], VedicError>;

    /// True when cusps are sign boundaries of the sidereal zodiac.
    fn is_sign_based(&self) -> bool {
        false
    }

    /// True when the construction breaks down at high latitude.
    fn latitude_dependent(&self) -> bool {
        false
    }
}

/// Selectable house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BhavaSystem {
    /// Each house is one whole sign, starting with the Lagna's sign.
    #[default]
    WholeSign,
    /// Equal 30 deg houses starting at the Lagna degree.
    Equal,
    /// Porphyry midpoints as bhava madhyas, sandhis halfway between.
    Sripati,
    /// Trisected quadrants between Asc, IC, Desc and MC.
    Porphyry,
    /// Placidus semi-arc trisection (used by KP).
    Placidus,
    Koch,
    Regiomontanus,
    Campanus,
}

pub const ALL_BHAVA_SYSTEMS: [BhavaSystem; 8] = [
    BhavaSystem::WholeSign,
    BhavaSystem::Equal,
    BhavaSystem::Sripati,
    BhavaSystem::Porphyry,
    BhavaSystem::Placidus,
    BhavaSystem::Koch,
    BhavaSystem::Regiomontanus,
    BhavaSystem::Campanus,
];

impl BhavaSystem {
    pub const fn all() -> &'static [BhavaSystem] {
        &ALL_BHAVA_SYSTEMS
    }
}

impl HouseSystem for BhavaSystem {
    fn name(&self) -> &'static str {
        match self {
            Self::WholeSign => WholeSign.name(),
            Self::Equal => Equal.name(),
            Self::Sripati => Sripati.name(),
            Self::Porphyry => Porphyry.name(),
            Self::Placidus => Placidus.name(),
            Self::Koch => Koch.name(),
            Self::Regiomontanus => Regiomontanus.name(),
            Self::Campanus => Campanus.name(),
        }
    }

    fn cusps(&self, asc: f64, lat: f64, lst: f64) -> Result<[f64; 12], VedicError> {
        match self {
            Self::WholeSign => WholeSign.cusps(asc, lat, lst),
            Self::Equal => Equal.cusps(asc, lat, lst),
            Self::Sripati => Sripati.cusps(asc, lat, lst),
            Self::Porphyry => Porphyry.cusps(asc, lat, lst),
            Self::Placidus => Placidus.cusps(asc, lat, lst),
            Self::Koch => Koch.cusps(asc, lat, lst),
            Self::Regiomontanus => Regiomontanus.cusps(asc, lat, lst),
            Self::Campanus => Campanus.cusps(asc, lat, lst),
        }
    }

    fn is_sign_based(&self) -> bool {
        matches!(self, Self::WholeSign)
    }

    fn latitude_dependent(&self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }
}

// ---------------------------------------------------------------------------
// Latitude-independent systems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct WholeSign;

impl HouseSystem for WholeSign {
    fn name(&self) -> &'static str {
        "Whole Sign"
    }

    fn cusps(&self, asc: f64, _lat: f64, _lst: f64) -> Result<[f64; 12], VedicError> {
        check_ascendant(asc)?;
        Ok(equal_from(rashi_from_longitude(asc).rashi.start_deg()))
    }

    fn is_sign_based(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Equal;

impl HouseSystem for Equal {
    fn name(&self) -> &'static str {
        "Equal"
    }

    fn cusps(&self, asc: f64, _lat: f64, _lst: f64) -> Result<[f64; 12], VedicError> {
        check_ascendant(asc)?;
        Ok(equal_from(asc))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Porphyry;

impl HouseSystem for Porphyry {
    fn name(&self) -> &'static str {
        "Porphyry"
    }

    fn cusps(&self, asc: f64, lat: f64, lst: f64) -> Result<[f64; 12], VedicError> {
        check_ascendant(asc)?;
        check_latitude_finite(lat)?;
        Ok(trisect_quadrants(normalize_360(asc), mc_longitude_rad(lst).to_degrees()))
    }
}

/// Sripati: Porphyry points are bhava madhyas; each cusp (sandhi) lies
/// halfway between consecutive madhyas.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sripati;

impl HouseSystem for Sripati {
    fn name(&self) -> &'static str {
        "Sripati"
    }

    fn cusps(&self, asc: f64, lat: f64, lst: f64) -> Result<[f64; 12], VedicError> {
        let madhya = Porphyry.cusps(asc, lat, lst)?;
        let mut cusps = [0.0; 12];
        for i in 0..12 {
            let prev = madhya[(i + 11) % 12];
            cusps[i] = normalize_360(prev + arc_forward(prev, madhya[i]) / 2.0);
        }
        Ok(cusps)
    }
}

// ---------------------------------------------------------------------------
// Quadrant systems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct Placidus;

impl HouseSystem for Placidus {
    fn name(&self) -> &'static str {
        "Placidus"
    }

    fn cusps(&self, asc: f64, lat: f64, lst: f64) -> Result<[f64; 12], VedicError> {
        check_ascendant(asc)?;
        check_latitude_limit(lat)?;
        let phi = lat.to_radians();
        let ramc = ramc_rad(lst);
        let mut cusps = quadrant_frame(asc, lst);
        // (cusp index, equator offset from RAMC, semi-arc fraction)
        let plan = [
            (10, 30.0, 1.0 / 3.0),
            (11, 60.0, 2.0 / 3.0),
            (1, 120.0, 2.0 / 3.0),
            (2, 150.0, 1.0 / 3.0),
        ];
        for (idx, offset, fraction) in plan {
            cusps[idx] = placidus_cusp(ramc + f64::to_radians(offset), phi, fraction)?;
        }
        Ok(fill_opposites(cusps))
    }

    fn latitude_dependent(&self) -> bool {
        true
    }
}

fn placidus_cusp(x: f64, phi: f64, fraction: f64) -> Result<f64, VedicError> {
    let eps = OBLIQUITY_J2000_RAD;
    let mut lon = oblique_ascension_longitude_rad(x, phi * fraction, eps);
    for _ in 0..MAX_ITERATIONS {
        let tan_dec = (eps.sin() * lon.sin()).asin().tan();
        if tan_dec.abs() < 1e-12 {
            return Ok(normalize_360(x.to_degrees()));
        }
        let ad = (phi.tan() * tan_dec).clamp(-1.0, 1.0).asin();
        let pole = ((ad * fraction).sin() / tan_dec).atan();
        let next = oblique_ascension_longitude_rad(x, pole, eps);
        let delta = (next - lon).to_degrees().abs();
        lon = next;
        if delta.min(360.0 - delta) < CONVERGENCE_DEG {
            return Ok(normalize_360(lon.to_degrees()));
        }
    }
    Err(VedicError::NoConvergence("placidus cusp iteration"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Koch;

impl HouseSystem for Koch {
    fn name(&self) -> &'static str {
        "Koch"
    }

    fn cusps(&self, asc: f64, lat: f64, lst: f64) -> Result<[f64; 12], VedicError> {
        check_ascendant(asc)?;
        check_latitude_limit(lat)?;
        let eps = OBLIQUITY_J2000_RAD;
        let phi = lat.to_radians();
        let ramc = ramc_rad(lst);
        let mc = mc_longitude_rad(lst);

        // ascensional difference of the MC degree, in thirds
        let sin_a = (mc.sin() * eps.sin() / phi.cos()).clamp(-1.0, 1.0);
        let cos_a = (1.0 - sin_a * sin_a).sqrt();
        let c = (phi.tan() / cos_a).atan();
        let ad3 = (c.sin() * sin_a).asin() / 3.0;

        let mut cusps = quadrant_frame(asc, lst);
        let rad = f64::to_radians;
        cusps[10] = oblique_deg(ramc + rad(30.0) - 2.0 * ad3, phi);
        cusps[11] = oblique_deg(ramc + rad(60.0) - ad3, phi);
        cusps[1] = oblique_deg(ramc + rad(120.0) + ad3, phi);
        cusps[2] = oblique_deg(ramc + rad(150.0) + 2.0 * ad3, phi);
        Ok(fill_opposites(cusps))
    }

    fn latitude_dependent(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Regiomontanus;

impl HouseSystem for Regiomontanus {
    fn name(&self) -> &'static str {
        "Regiomontanus"
    }

    fn cusps(&self, asc: f64, lat: f64, lst: f64) -> Result<[f64; 12], VedicError> {
        check_ascendant(asc)?;
        check_latitude_finite(lat)?;
        let phi = lat.to_radians();
        let ramc = ramc_rad(lst);
        let mut cusps = quadrant_frame(asc, lst);
        for (idx, h) in [(10, 30.0), (11, 60.0), (1, 120.0), (2, 150.0)] {
            let h = f64::to_radians(h);
            let pole = (phi.tan() * h.sin()).atan();
            cusps[idx] = oblique_deg(ramc + h, pole);
        }
        Ok(fill_opposites(cusps))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Campanus;

impl HouseSystem for Campanus {
    fn name(&self) -> &'static str {
        "Campanus"
    }

    fn cusps(&self, asc: f64, lat: f64, lst: f64) -> Result<[f64; 12], VedicError> {
        check_ascendant(asc)?;
        check_latitude_finite(lat)?;
        let phi = lat.to_radians();
        let ramc = ramc_rad(lst);
        let sqrt3 = 3.0_f64.sqrt();
        let pole1 = (phi.sin() / 2.0).asin();
        let pole2 = (sqrt3 / 2.0 * phi.sin()).asin();
        let x1 = (sqrt3 / phi.cos()).atan();
        let x2 = (1.0 / sqrt3 / phi.cos()).atan();
        let east = ramc + PI / 2.0;

        let mut cusps = quadrant_frame(asc, lst);
        cusps[10] = oblique_deg(east - x1, pole1);
        cusps[11] = oblique_deg(east - x2, pole2);
        cusps[1] = oblique_deg(east + x2, pole2);
        cusps[2] = oblique_deg(east + x1, pole1);
        Ok(fill_opposites(cusps))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_ascendant(asc: f64) -> Result<(), VedicError> {
    if asc.is_finite() {
        Ok(())
    } else {
        Err(VedicError::InvalidInput("ascendant must be finite"))
    }
}

fn check_latitude_finite(lat: f64) -> Result<(), VedicError> {
    if !lat.is_finite() || lat.abs() > 90.0 {
        return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
    }
    if lat.abs() >= 90.0 - 1e-9 {
        return Err(VedicError::DegenerateGeometry { latitude_deg: lat });
    }
    Ok(())
}

/// Time-based systems are undefined where some ecliptic degrees never rise.
fn check_latitude_limit(lat: f64) -> Result<(), VedicError> {
    check_latitude_finite(lat)?;
    if lat.abs() > MAX_LATITUDE_DEG {
        return Err(VedicError::DegenerateGeometry { latitude_deg: lat });
    }
    Ok(())
}

fn equal_from(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(start_deg + (i as f64) * 30.0);
    }
    cusps
}

/// Cusps 1, 4, 7, 10 from Asc and MC; the rest zeroed for filling.
fn quadrant_frame(asc: f64, lst: f64) -> [f64; 12] {
    let asc = normalize_360(asc);
    let mc = mc_longitude_rad(lst).to_degrees();
    let mut cusps = [0.0; 12];
    cusps[0] = asc;
    cusps[3] = normalize_360(mc + 180.0);
    cusps[6] = normalize_360(asc + 180.0);
    cusps[9] = normalize_360(mc);
    cusps
}

/// Houses 5, 6, 8, 9 oppose 11, 12, 2, 3.
fn fill_opposites(mut cusps: [f64; 12]) -> [f64; 12] {
    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);
    cusps
}

fn trisect_quadrants(asc: f64, mc: f64) -> [f64; 12] {
    let desc = normalize_360(asc + 180.0);
    let ic = normalize_360(mc + 180.0);
    let mut cusps = [0.0; 12];
    for (q, (from, to)) in [(asc, ic), (ic, desc), (desc, mc), (mc, asc)].into_iter().enumerate() {
        let arc = arc_forward(from, to);
        for k in 0..3 {
            cusps[q * 3 + k] = normalize_360(from + arc * k as f64 / 3.0);
        }
    }
    cusps
}

fn oblique_deg(x: f64, pole: f64) -> f64 {
    normalize_360(oblique_ascension_longitude_rad(x, pole, OBLIQUITY_J2000_RAD).to_degrees())
}
