//! Every derived structure for one chart in a single pass.

use serde::{Deserialize, Serialize};

use kundali_base::ashtakavarga::{AshtakavargaResult, graha_rashis_from_lons};
use kundali_base::dasha::{DEFAULT_DASHA_LEVEL, DashaHierarchy, vimshottari_hierarchy};
use kundali_base::{
    ALL_GRAHAS, AspectInput, AspectTable, AshtakavargaRules, Graha, OrbTable, Placement,
    SAPTA_GRAHAS, ShadbalaConstants, StrengthBands, Yoga, YogaContext, ashtakavarga, aspects,
    detect_yogas,
};

use crate::chart::VedicChart;
use crate::error::{ChartError, ChartIssue};
use crate::strength::{StrengthReport, strength_report};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub orbs: OrbTable,
    pub constants: ShadbalaConstants,
    pub bands: StrengthBands,
    /// Dasha depth, 1-6.
    pub dasha_level: u8,
    pub rules: AshtakavargaRules,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            orbs: OrbTable::default(),
            constants: ShadbalaConstants::default(),
            bands: StrengthBands::default(),
            dasha_level: DEFAULT_DASHA_LEVEL,
            rules: AshtakavargaRules::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub aspects: AspectTable,
    pub strengths: StrengthReport,
    pub yogas: Vec<Yoga>,
    /// None without a Moon position.
    pub dasha: Option<DashaHierarchy>,
    /// None unless all seven classical grahas are placed.
    pub ashtakavarga: Option<AshtakavargaResult>,
    /// Strength issues; chart issues stay on the `ChartOutcome`.
    pub issues: Vec<ChartIssue>,
}

/// Aspect-engine input for every placed body, outer planets included.
pub fn aspect_inputs(chart: &VedicChart) -> Vec<AspectInput> {
    chart
        .positions
        .iter()
        .map(|p| AspectInput {
            body: p.body,
            lon: p.sidereal_longitude,
            speed: p.speed,
        })
        .collect()
}

pub fn chart_aspects(chart: &VedicChart, orbs: &OrbTable) -> AspectTable {
    aspects(&aspect_inputs(chart), orbs)
}

pub fn placements(chart: &VedicChart) -> [Option<Placement>; 9] {
    ALL_GRAHAS.map(|g| {
        chart.graha(g).map(|p| Placement {
            lon: p.sidereal_longitude,
            speed: p.speed,
            house: p.house,
        })
    })
}

pub fn yoga_context<'a>(
    chart: &VedicChart,
    table: &'a AspectTable,
    bands: StrengthBands,
) -> YogaContext<'a> {
    YogaContext {
        placements: placements(chart),
        lagna_rashi: chart.ascendant_sign().index(),
        aspects: table,
        bands,
    }
}

pub fn chart_yogas(chart: &VedicChart, table: &AspectTable, bands: StrengthBands) -> Vec<Yoga> {
    detect_yogas(&yoga_context(chart, table, bands))
}

/// Vimshottari timeline from the birth Moon. None without a Moon.
pub fn chart_dasha(chart: &VedicChart, level: u8) -> Result<Option<DashaHierarchy>, ChartError> {
    let Some(moon) = chart.graha(Graha::Chandra) else {
        return Ok(None);
    };
    Ok(Some(vimshottari_hierarchy(
        chart.jd_ut,
        moon.sidereal_longitude,
        level,
    )?))
}

/// Bindu tables. None when any classical graha is missing.
pub fn chart_ashtakavarga(
    chart: &VedicChart,
    rules: &AshtakavargaRules,
) -> Option<AshtakavargaResult> {
    let mut lons = [0.0; 7];
    for (lon, g) in lons.iter_mut().zip(SAPTA_GRAHAS) {
        *lon = chart.graha(g)?.sidereal_longitude;
    }
    Some(ashtakavarga(
        &graha_rashis_from_lons(&lons),
        chart.ascendant_sign().index(),
        rules,
    ))
}

pub fn analyse(chart: &VedicChart, settings: &AnalysisSettings) -> Result<ChartAnalysis, ChartError> {
    let table = chart_aspects(chart, &settings.orbs);
    let strengths = strength_report(chart, &table, &settings.constants, &settings.bands);
    let yogas = chart_yogas(chart, &table, settings.bands);
    let dasha = chart_dasha(chart, settings.dasha_level)?;
    let ashtakavarga = chart_ashtakavarga(chart, &settings.rules);
    let issues = strengths.issues.clone();
    tracing::info!(
        aspects = table.aspects.len(),
        yogas = yogas.len(),
        has_dasha = dasha.is_some(),
        has_ashtakavarga = ashtakavarga.is_some(),
        "analysis complete"
    );
    Ok(ChartAnalysis {
        aspects: table,
        strengths,
        yogas,
        dasha,
        ashtakavarga,
        issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartBuilder;
    use crate::ephemeris::{EclipticState, TableEphemeris};
    use crate::time::BirthMoment;
    use kundali_base::ashtakavarga::SAV_TOTAL;

    fn chart(table: &TableEphemeris) -> VedicChart {
        let birth = BirthMoment::parse("1990-01-01T00:00:00Z", 27.7, 85.3, "").unwrap();
        ChartBuilder::default().build(&birth, table).unwrap().chart
    }

    fn full() -> TableEphemeris {
        let lons = [280.5, 45.0, 120.0, 265.0, 100.0, 310.0, 205.0, 300.0];
        let mut t = TableEphemeris::new();
        for (g, lon) in ALL_GRAHAS.iter().zip(lons) {
            t.insert(*g, EclipticState::new(lon, 0.0, 0.5, 1.0));
        }
        t
    }

    #[test]
    fn full_analysis() {
        let a = analyse(&chart(&full()), &AnalysisSettings::default()).unwrap();
        assert_eq!(a.strengths.results.len(), 9);
        let dasha = a.dasha.unwrap();
        assert_eq!(dasha.levels.len(), DEFAULT_DASHA_LEVEL as usize);
        let sav = a.ashtakavarga.unwrap().sav;
        assert_eq!(sav.total_points.iter().sum::<u16>(), SAV_TOTAL);
    }

    #[test]
    fn without_moon_no_dasha_or_ashtakavarga() {
        let mut t = TableEphemeris::new();
        t.insert(Graha::Surya, EclipticState::new(280.5, 0.0, 1.0, 1.0));
        let a = analyse(&chart(&t), &AnalysisSettings::default()).unwrap();
        assert!(a.dasha.is_none());
        assert!(a.ashtakavarga.is_none());
        assert!(a.aspects.aspects.is_empty());
    }

    #[test]
    fn bad_dasha_level_is_an_error() {
        let settings = AnalysisSettings {
            dasha_level: 9,
            ..AnalysisSettings::default()
        };
        assert!(matches!(
            analyse(&chart(&full()), &settings),
            Err(ChartError::InvalidInput(_))
        ));
    }
}
