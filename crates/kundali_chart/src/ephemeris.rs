//! Seams to the outside world: ephemeris positions and ayanamsa values.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use kundali_base::graha::ALL_OUTER_BODIES;
use kundali_base::lagna::OBLIQUITY_J2000_RAD;
use kundali_base::{ALL_GRAHAS, AyanamshaSystem, Body, ayanamsha_deg, jd_to_centuries};

use crate::error::{ChartError, EphemerisFailure};

/// Geocentric tropical ecliptic state of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticState {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    #[serde(default)]
    pub lat: f64,
    /// Longitude speed in degrees per day; negative when retrograde.
    #[serde(default)]
    pub speed: f64,
    /// Distance in AU.
    #[serde(default = "default_distance")]
    pub distance: f64,
}

fn default_distance() -> f64 {
    1.0
}

impl EclipticState {
    pub fn new(lon: f64, lat: f64, speed: f64, distance: f64) -> Self {
        Self {
            lon,
            lat,
            speed,
            distance,
        }
    }

    /// Right ascension and declination in radians, mean obliquity of J2000.
    pub fn equatorial_rad(&self) -> (f64, f64) {
        let eps = OBLIQUITY_J2000_RAD;
        let (lon, lat) = (self.lon.to_radians(), self.lat.to_radians());
        let ra = f64::atan2(
            lon.sin() * eps.cos() - lat.tan() * eps.sin(),
            lon.cos(),
        )
        .rem_euclid(std::f64::consts::TAU);
        let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
        (ra, dec)
    }

    pub fn declination_deg(&self) -> f64 {
        self.equatorial_rad().1.to_degrees()
    }
}

/// Source of tropical geocentric positions.
///
/// Implementations are queried once per body per chart and never for Ketu.
pub trait Ephemeris {
    fn position(&self, body: Body, jd_tt: f64) -> Result<EclipticState, EphemerisFailure>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position(&self, body: Body, jd_tt: f64) -> Result<EclipticState, EphemerisFailure> {
        (**self).position(body, jd_tt)
    }
}

/// Source of the ayanamsa for an instant.
pub trait AyanamshaProvider {
    fn name(&self) -> &str;

    /// Degrees, for a Julian Date in TT.
    fn value(&self, jd_tt: f64) -> f64;
}

impl AyanamshaProvider for AyanamshaSystem {
    fn name(&self) -> &str {
        AyanamshaSystem::name(*self)
    }

    fn value(&self, jd_tt: f64) -> f64 {
        ayanamsha_deg(*self, jd_to_centuries(jd_tt))
    }
}

/// A fixed ayanamsa, for tests and user-supplied offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAyanamsha(pub f64);

impl AyanamshaProvider for FixedAyanamsha {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn value(&self, _jd_tt: f64) -> f64 {
        self.0
    }
}

/// Look up a body by English or Sanskrit name, case-insensitively.
pub fn body_from_name(name: &str) -> Option<Body> {
    let name = name.trim();
    ALL_GRAHAS
        .iter()
        .find(|g| g.name().eq_ignore_ascii_case(name) || g.english_name().eq_ignore_ascii_case(name))
        .map(|&g| Body::Classical(g))
        .or_else(|| {
            ALL_OUTER_BODIES
                .iter()
                .find(|o| o.name().eq_ignore_ascii_case(name))
                .map(|&o| Body::Outer(o))
        })
}

/// Constant positions from a table; the instant is ignored.
///
/// Used as a stub backend and to feed externally computed positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableEphemeris {
    entries: BTreeMap<Body, EclipticState>,
}

impl TableEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, body: impl Into<Body>, state: EclipticState) -> Self {
        self.insert(body, state);
        self
    }

    pub fn insert(&mut self, body: impl Into<Body>, state: EclipticState) {
        self.entries.insert(body.into(), state);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a JSON object keyed by body name:
    /// `{"Sun": {"lon": 280.5, "speed": 1.02}, "Moon": {...}}`.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let raw: BTreeMap<String, EclipticState> = serde_json::from_str(json)
            .map_err(|e| ChartError::InvalidInput(format!("positions json: {e}")))?;
        let mut table = Self::new();
        for (name, state) in raw {
            let body = body_from_name(&name)
                .ok_or_else(|| ChartError::InvalidInput(format!("unknown body {name:?}")))?;
            if !state.lon.is_finite() || !state.lat.is_finite() || !state.speed.is_finite() {
                return Err(ChartError::InvalidInput(format!("non-finite state for {name}")));
            }
            table.insert(body, state);
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChartError::InvalidInput(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }
}

impl Ephemeris for TableEphemeris {
    fn position(&self, body: Body, _jd_tt: f64) -> Result<EclipticState, EphemerisFailure> {
        self.entries
            .get(&body)
            .copied()
            .ok_or(EphemerisFailure::NotCovered)
    }
}
