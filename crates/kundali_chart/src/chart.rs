//! Chart assembly: positions, ascendant and cusps for one birth moment.
//!
//! Failures for a single body become [`ChartIssue`]s; the chart is still
//! built from whatever the ephemeris could supply. Only invalid input and a
//! degenerate house system under [`DegeneratePolicy::Fail`] abort.

use serde::{Deserialize, Serialize};

use kundali_base::graha::ALL_OUTER_BODIES;
use kundali_base::{
    ALL_GRAHAS, AyanamshaSystem, BhavaSystem, Body, Graha, HouseSystem, Nakshatra, Rashi,
    VedicError, classify_sidereal, ketu_from_rahu, lagna_and_mc_deg, normalize_360,
    rashi_from_longitude,
};

use crate::ephemeris::{AyanamshaProvider, EclipticState, Ephemeris};
use crate::error::{ChartError, ChartIssue};
use crate::sidereal::local_sidereal_time_rad;
use crate::time::BirthMoment;

/// What to do when the house system has no cusps at the birth latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    Fail,
    /// Use this system instead and record a [`ChartIssue`].
    Substitute(BhavaSystem),
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        Self::Substitute(BhavaSystem::WholeSign)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSettings {
    pub ayanamsha: AyanamshaSystem,
    pub house_system: BhavaSystem,
    pub degenerate_policy: DegeneratePolicy,
    /// Also place Uranus, Neptune and Pluto.
    pub include_outer_bodies: bool,
}

/// One body, fully classified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// [0, 360)
    pub sidereal_longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Degrees per day.
    pub speed: f64,
    /// Declination in degrees.
    pub declination: f64,
    pub sign: Rashi,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// 1-4
    pub pada: u8,
    /// 1-12
    pub house: u8,
    pub is_retrograde: bool,
}

/// The assembled chart. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicChart {
    pub birth: BirthMoment,
    pub jd_ut: f64,
    pub jd_tt: f64,
    pub ayanamsa_value: f64,
    pub ayanamsa_name: String,
    /// Sidereal ascendant.
    pub ascendant: f64,
    /// Sidereal midheaven.
    pub midheaven: f64,
    /// Sidereal cusps, house 1 first.
    pub house_cusps: [f64; 12],
    /// The system that produced `house_cusps`.
    pub house_system: BhavaSystem,
    /// Available bodies only, classical first.
    pub positions: Vec<PlanetPosition>,
}

impl VedicChart {
    pub fn position(&self, body: Body) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.body == body)
    }

    pub fn graha(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.position(Body::Classical(graha))
    }

    pub fn ascendant_sign(&self) -> Rashi {
        rashi_from_longitude(self.ascendant).rashi
    }

    /// Tropical longitude of a sidereal one, with this chart's ayanamsa.
    pub fn tropical(&self, sidereal_lon: f64) -> f64 {
        normalize_360(sidereal_lon + self.ayanamsa_value)
    }

    /// Bodies grouped by house, 1 through 12.
    pub fn positions_by_house(&self) -> [Vec<&PlanetPosition>; 12] {
        let mut houses: [Vec<&PlanetPosition>; 12] = Default::default();
        for p in &self.positions {
            houses[(p.house as usize + 11) % 12].push(p);
        }
        houses
    }
}

/// A chart plus everything that went wrong while building it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOutcome {
    pub chart: VedicChart,
    pub issues: Vec<ChartIssue>,
}

impl ChartOutcome {
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    settings: ChartSettings,
}

impl ChartBuilder {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Build with the configured ayanamsa system.
    pub fn build(
        &self,
        birth: &BirthMoment,
        ephemeris: &dyn Ephemeris,
    ) -> Result<ChartOutcome, ChartError> {
        self.build_with(birth, ephemeris, &self.settings.ayanamsha)
    }

    pub fn build_with(
        &self,
        birth: &BirthMoment,
        ephemeris: &dyn Ephemeris,
        ayanamsha: &dyn AyanamshaProvider,
    ) -> Result<ChartOutcome, ChartError> {
        let jd_ut = birth.jd_ut();
        let jd_tt = birth.jd_tt();
        let ayanamsa_value = ayanamsha.value(jd_tt);
        if !ayanamsa_value.is_finite() {
            return Err(ChartError::InvalidInput("ayanamsa is not finite".into()));
        }
        let mut issues = Vec::new();

        let lst = local_sidereal_time_rad(jd_ut, birth.longitude_deg());
        let (asc_tropical, mc_tropical) = lagna_and_mc_deg(lst, birth.latitude_deg());
        let ascendant = normalize_360(asc_tropical - ayanamsa_value);
        let midheaven = normalize_360(mc_tropical - ayanamsa_value);

        let (house_system, house_cusps) = self.resolve_cusps(
            asc_tropical,
            ascendant,
            birth.latitude_deg(),
            lst,
            ayanamsa_value,
            &mut issues,
        )?;

        let mut positions = Vec::with_capacity(12);
        let mut place = |body: Body, state: EclipticState| {
            let sidereal = normalize_360(state.lon - ayanamsa_value);
            let c = classify_sidereal(sidereal, &house_cusps);
            tracing::debug!(
                body = body.name(),
                sidereal,
                sign = c.sign.name(),
                house = c.house,
                "placed body"
            );
            positions.push(PlanetPosition {
                body,
                sidereal_longitude: c.sidereal_lon,
                latitude: state.lat,
                speed: state.speed,
                declination: state.declination_deg(),
                sign: c.sign,
                degree_in_sign: c.degree_in_sign,
                nakshatra: c.nakshatra,
                pada: c.pada,
                house: c.house,
                is_retrograde: state.speed < 0.0,
            });
        };

        for graha in ALL_GRAHAS.iter().copied().filter(|g| *g != Graha::Ketu) {
            let body = Body::Classical(graha);
            match ephemeris.position(body, jd_tt) {
                Ok(state) => {
                    place(body, state);
                    if graha == Graha::Rahu {
                        let ketu = EclipticState {
                            lon: ketu_from_rahu(state.lon),
                            lat: -state.lat,
                            ..state
                        };
                        place(Body::Classical(Graha::Ketu), ketu);
                    }
                }
                Err(reason) => {
                    if graha == Graha::Rahu {
                        issues.push(ChartIssue::EphemerisUnavailable {
                            body: Body::Classical(Graha::Ketu),
                            reason: reason.clone(),
                        });
                    }
                    issues.push(ChartIssue::EphemerisUnavailable { body, reason });
                }
            }
        }
        if self.settings.include_outer_bodies {
            for outer in ALL_OUTER_BODIES {
                let body = Body::Outer(outer);
                match ephemeris.position(body, jd_tt) {
                    Ok(state) => place(body, state),
                    Err(reason) => issues.push(ChartIssue::EphemerisUnavailable { body, reason }),
                }
            }
        }
        positions.sort_by_key(|p| p.body);

        for issue in &issues {
            tracing::warn!(%issue, "chart issue");
        }
        tracing::info!(
            jd_ut,
            ayanamsa = ayanamsa_value,
            ascendant,
            house_system = house_system.name(),
            bodies = positions.len(),
            issues = issues.len(),
            "chart assembled"
        );

        Ok(ChartOutcome {
            chart: VedicChart {
                birth: birth.clone(),
                jd_ut,
                jd_tt,
                ayanamsa_value,
                ayanamsa_name: ayanamsha.name().to_string(),
                ascendant,
                midheaven,
                house_cusps,
                house_system,
                positions,
            },
            issues,
        })
    }

    fn resolve_cusps(
        &self,
        asc_tropical: f64,
        asc_sidereal: f64,
        latitude_deg: f64,
        lst: f64,
        ayanamsa: f64,
        issues: &mut Vec<ChartIssue>,
    ) -> Result<(BhavaSystem, [f64; 12]), ChartError> {
        let requested = self.settings.house_system;
        match sidereal_cusps(requested, asc_tropical, asc_sidereal, latitude_deg, lst, ayanamsa) {
            Ok(cusps) => Ok((requested, cusps)),
            Err(VedicError::DegenerateGeometry { latitude_deg }) => {
                match self.settings.degenerate_policy {
                    DegeneratePolicy::Fail => Err(ChartError::DegenerateGeometry {
                        system: requested,
                        latitude_deg,
                    }),
                    DegeneratePolicy::Substitute(used) => {
                        let cusps = sidereal_cusps(
                            used,
                            asc_tropical,
                            asc_sidereal,
                            latitude_deg,
                            lst,
                            ayanamsa,
                        )
                        .map_err(|_| ChartError::DegenerateGeometry {
                            system: used,
                            latitude_deg,
                        })?;
                        issues.push(ChartIssue::HouseSystemSubstituted {
                            requested,
                            used,
                            latitude_deg,
                        });
                        Ok((used, cusps))
                    }
                }
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// Cusps in the sidereal zodiac for any house system.
pub fn sidereal_cusps(
    system: BhavaSystem,
    asc_tropical: f64,
    asc_sidereal: f64,
    latitude_deg: f64,
    lst: f64,
    ayanamsa: f64,
) -> Result<[f64; 12], VedicError> {
    if system.is_sign_based() {
        system.cusps(asc_sidereal, latitude_deg, lst)
    } else {
        Ok(system
            .cusps(asc_tropical, latitude_deg, lst)?
            .map(|c| normalize_360(c - ayanamsa)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{FixedAyanamsha, TableEphemeris};
    use crate::error::EphemerisFailure;

    const EPS: f64 = 1e-9;

    fn birth() -> BirthMoment {
        BirthMoment::parse("1990-01-01T00:00:00Z", 27.7, 85.3, "Asia/Kathmandu").unwrap()
    }

    fn full_table() -> TableEphemeris {
        let lons = [280.5, 45.0, 120.0, 265.0, 100.0, 310.0, 205.0, 300.0];
        let speeds = [1.02, 13.1, 0.6, -0.4, -0.1, 1.2, 0.05, -0.05];
        let mut table = TableEphemeris::new();
        for (g, (lon, speed)) in ALL_GRAHAS.iter().zip(lons.iter().zip(speeds)) {
            table.insert(*g, EclipticState::new(*lon, 0.0, speed, 1.0));
        }
        table
    }

    #[test]
    fn ketu_derived_from_rahu() {
        let out = ChartBuilder::default().build(&birth(), &full_table()).unwrap();
        let rahu = out.chart.graha(Graha::Rahu).unwrap();
        let ketu = out.chart.graha(Graha::Ketu).unwrap();
        assert!(
            (normalize_360(ketu.sidereal_longitude - rahu.sidereal_longitude) - 180.0).abs()
                < EPS
        );
        assert!(ketu.is_retrograde);
        assert!(out.is_complete());
    }

    #[test]
    fn missing_body_is_an_issue_not_an_error() {
        let mut table = TableEphemeris::new();
        table.insert(Graha::Surya, EclipticState::new(280.5, 0.0, 1.02, 1.0));
        let out = ChartBuilder::default().build(&birth(), &table).unwrap();
        assert_eq!(out.chart.positions.len(), 1);
        // Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu and Ketu
        assert_eq!(out.issues.len(), 8);
        assert!(out.issues.contains(&ChartIssue::EphemerisUnavailable {
            body: Body::Classical(Graha::Ketu),
            reason: EphemerisFailure::NotCovered,
        }));
    }

    #[test]
    fn fixed_ayanamsa_shifts_positions() {
        let out = ChartBuilder::default()
            .build_with(&birth(), &full_table(), &FixedAyanamsha(24.0))
            .unwrap();
        let sun = out.chart.graha(Graha::Surya).unwrap();
        assert!((sun.sidereal_longitude - 256.5).abs() < EPS);
        assert_eq!(out.chart.ayanamsa_name, "Fixed");
        assert!((out.chart.tropical(sun.sidereal_longitude) - 280.5).abs() < EPS);
    }

    #[test]
    fn whole_sign_first_cusp_is_ascendant_sign() {
        let out = ChartBuilder::default().build(&birth(), &full_table()).unwrap();
        let chart = &out.chart;
        assert!((chart.house_cusps[0] - chart.ascendant_sign().start_deg()).abs() < EPS);
        for p in &chart.positions {
            let expected = kundali_base::graha::rashi_distance(
                chart.ascendant_sign().index(),
                p.sign.index(),
            );
            assert_eq!(p.house, expected);
        }
    }

    #[test]
    fn polar_placidus_fails_or_substitutes() {
        let arctic = BirthMoment::parse("1990-01-01T00:00:00Z", 75.0, 20.0, "").unwrap();
        let fail = ChartBuilder::new(ChartSettings {
            house_system: BhavaSystem::Placidus,
            degenerate_policy: DegeneratePolicy::Fail,
            ..ChartSettings::default()
        });
        assert!(matches!(
            fail.build(&arctic, &full_table()),
            Err(ChartError::DegenerateGeometry { system: BhavaSystem::Placidus, .. })
        ));

        let substitute = ChartBuilder::new(ChartSettings {
            house_system: BhavaSystem::Placidus,
            degenerate_policy: DegeneratePolicy::Substitute(BhavaSystem::Equal),
            ..ChartSettings::default()
        });
        let out = substitute.build(&arctic, &full_table()).unwrap();
        assert_eq!(out.chart.house_system, BhavaSystem::Equal);
        assert!(matches!(
            out.issues[0],
            ChartIssue::HouseSystemSubstituted { used: BhavaSystem::Equal, .. }
        ));
    }

    #[test]
    fn outer_bodies_only_when_requested() {
        let out = ChartBuilder::new(ChartSettings {
            include_outer_bodies: true,
            ..ChartSettings::default()
        })
        .build(&birth(), &full_table())
        .unwrap();
        assert_eq!(out.issues.len(), 3);
        let out = ChartBuilder::default().build(&birth(), &full_table()).unwrap();
        assert!(out.issues.is_empty());
    }

    #[test]
    fn houses_group_every_body() {
        let out = ChartBuilder::default().build(&birth(), &full_table()).unwrap();
        let total: usize = out.chart.positions_by_house().iter().map(Vec::len).sum();
        assert_eq!(total, 9);
    }
}
