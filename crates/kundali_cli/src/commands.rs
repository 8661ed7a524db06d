//! Subcommand handlers. Each returns a serializable value; `main` prints it.

use anyhow::{Context, bail};
use serde::Serialize;

use kundali_base::dasha::{DashaHierarchy, DashaLevel, DashaSnapshot, SandhiWindow, active_periods, sandhi_windows};
use kundali_base::{
    ALL_BHAVA_SYSTEMS, AyanamshaSystem, BhavaSystem, Classification, Graha, HouseSystem,
    J2000_JD, classify, is_combust, whole_sign_cusps,
};
use kundali_chart::{
    AyanamshaProvider, BirthMoment, ChartBuilder, ChartOutcome, FixedAyanamsha, TableEphemeris,
    VedicChart, analyse, chart_ashtakavarga, chart_aspects, chart_dasha, chart_yogas, jd_from_utc,
    parse_utc, strength_report,
};
use kundali_config::KundaliConfig;
use kundali_layout::{BodyGlyph, ChartLayout, layout};

use crate::cli::ChartArgs;

/// Lower-case alphanumerics only, so "Whole Sign", "whole-sign" and
/// "WholeSign" compare equal.
fn compact(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn parse_ayanamsa(name: &str) -> Option<AyanamshaSystem> {
    let key = compact(name);
    AyanamshaSystem::all()
        .iter()
        .copied()
        .find(|s| compact(s.name()) == key || compact(&format!("{s:?}")) == key)
}

pub fn parse_house_system(name: &str) -> Option<BhavaSystem> {
    let key = compact(name);
    ALL_BHAVA_SYSTEMS
        .iter()
        .copied()
        .find(|s| compact(s.name()) == key || compact(&format!("{s:?}")) == key)
}

#[derive(Debug, Serialize)]
pub struct ClassifyOutput {
    pub ayanamsa_deg: f64,
    pub ayanamsa_name: String,
    #[serde(flatten)]
    pub classification: Classification,
}

pub fn classify_cmd(
    config: &KundaliConfig,
    lon: f64,
    ayanamsa: Option<&str>,
    jd: Option<f64>,
    asc: Option<f64>,
) -> anyhow::Result<ClassifyOutput> {
    let jd = jd.unwrap_or(J2000_JD);
    let provider: Box<dyn AyanamshaProvider> = match ayanamsa {
        None => Box::new(config.chart.ayanamsa),
        Some(name) => match (parse_ayanamsa(name), name.parse::<f64>()) {
            (Some(system), _) => Box::new(system),
            (None, Ok(deg)) => Box::new(FixedAyanamsha(deg)),
            (None, Err(_)) => bail!("unknown ayanamsa {name:?}"),
        },
    };
    let ayanamsa_deg = provider.value(jd);
    let cusps = whole_sign_cusps(asc.unwrap_or(0.0));
    let classification = classify(lon, ayanamsa_deg, &cusps)?;
    Ok(ClassifyOutput {
        ayanamsa_deg,
        ayanamsa_name: provider.name().to_string(),
        classification,
    })
}

/// Build the chart described by `args`, with flags over config.
pub fn build_chart(config: &KundaliConfig, args: &ChartArgs) -> anyhow::Result<ChartOutcome> {
    let mut settings = config.chart.settings();
    if let Some(name) = &args.ayanamsa {
        settings.ayanamsha =
            parse_ayanamsa(name).with_context(|| format!("unknown ayanamsa {name:?}"))?;
    }
    if let Some(name) = &args.house_system {
        settings.house_system =
            parse_house_system(name).with_context(|| format!("unknown house system {name:?}"))?;
    }
    settings.include_outer_bodies |= args.outer;

    let birth = BirthMoment::parse(&args.datetime, args.lat, args.lon, &args.tz)?;
    let ephemeris = TableEphemeris::load(&args.positions)?;
    tracing::debug!(bodies = ephemeris.len(), path = %args.positions.display(), "loaded positions");
    Ok(ChartBuilder::new(settings).build(&birth, &ephemeris)?)
}

fn chart_only(config: &KundaliConfig, args: &ChartArgs) -> anyhow::Result<VedicChart> {
    Ok(build_chart(config, args)?.chart)
}

pub fn aspects_cmd(config: &KundaliConfig, args: &ChartArgs) -> anyhow::Result<impl Serialize> {
    let chart = chart_only(config, args)?;
    Ok(chart_aspects(&chart, &config.aspects.orb_table()?))
}

pub fn strength_cmd(config: &KundaliConfig, args: &ChartArgs) -> anyhow::Result<impl Serialize> {
    let chart = chart_only(config, args)?;
    let settings = config.analysis_settings()?;
    let table = chart_aspects(&chart, &settings.orbs);
    Ok(strength_report(&chart, &table, &settings.constants, &settings.bands))
}

pub fn yogas_cmd(config: &KundaliConfig, args: &ChartArgs) -> anyhow::Result<impl Serialize> {
    let chart = chart_only(config, args)?;
    let table = chart_aspects(&chart, &config.aspects.orb_table()?);
    Ok(chart_yogas(&chart, &table, config.strength.bands()))
}

#[derive(Debug, Serialize)]
pub struct DashaOutput {
    pub hierarchy: DashaHierarchy,
    pub active: Option<DashaSnapshot>,
    pub sandhi: Vec<SandhiWindow>,
}

pub fn dasha_cmd(
    config: &KundaliConfig,
    args: &ChartArgs,
    level: Option<u8>,
    now: Option<&str>,
    sandhi: Option<u8>,
) -> anyhow::Result<DashaOutput> {
    let chart = chart_only(config, args)?;
    let level = level.unwrap_or(config.dasha.max_level);
    let hierarchy = chart_dasha(&chart, level)?.context("dasha needs a Moon position")?;
    let active = match now {
        Some(s) => Some(active_periods(&hierarchy, jd_from_utc(&parse_utc(s)?))),
        None => None,
    };
    let sandhi = match sandhi {
        Some(n) => {
            let level = DashaLevel::from_u8(n).with_context(|| format!("invalid sandhi level {n}"))?;
            sandhi_windows(&hierarchy, level)
        }
        None => Vec::new(),
    };
    Ok(DashaOutput {
        hierarchy,
        active,
        sandhi,
    })
}

pub fn ashtakavarga_cmd(config: &KundaliConfig, args: &ChartArgs) -> anyhow::Result<impl Serialize> {
    let chart = chart_only(config, args)?;
    chart_ashtakavarga(&chart, &Default::default())
        .context("ashtakavarga needs all seven classical grahas")
}

pub fn analyse_cmd(config: &KundaliConfig, args: &ChartArgs) -> anyhow::Result<impl Serialize> {
    let chart = chart_only(config, args)?;
    Ok(analyse(&chart, &config.analysis_settings()?)?)
}

/// Glyphs per house, retrograde marked "R" and combust "C".
pub fn body_glyphs(chart: &VedicChart) -> [Vec<BodyGlyph>; 12] {
    let sun = chart.graha(Graha::Surya).map(|p| p.sidereal_longitude);
    let mut houses: [Vec<BodyGlyph>; 12] = Default::default();
    for p in &chart.positions {
        let mut marks = String::new();
        if p.is_retrograde && p.body.graha().is_none_or(|g| !g.is_node()) {
            marks.push('R');
        }
        if let (Some(g), Some(sun)) = (p.body.graha(), sun) {
            if is_combust(g, p.sidereal_longitude, sun, p.is_retrograde) {
                marks.push('C');
            }
        }
        houses[(p.house as usize + 11) % 12]
            .push(BodyGlyph::new(p.body.symbol()).with_superscript(marks));
    }
    houses
}

pub fn layout_cmd(
    config: &KundaliConfig,
    args: &ChartArgs,
    size: Option<f64>,
) -> anyhow::Result<ChartLayout> {
    let chart = chart_only(config, args)?;
    let mut settings = config.layout.settings();
    if let Some(size) = size {
        settings.size = size;
    }
    Ok(layout(chart.ascendant_sign(), &body_glyphs(&chart), &settings)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn names_parse_loosely() {
        assert_eq!(parse_house_system("whole-sign"), Some(BhavaSystem::WholeSign));
        assert_eq!(parse_house_system("Placidus"), Some(BhavaSystem::Placidus));
        assert_eq!(parse_ayanamsa("fagan bradley"), Some(AyanamshaSystem::FaganBradley));
        assert_eq!(parse_ayanamsa("KP"), Some(AyanamshaSystem::KP));
        assert_eq!(parse_ayanamsa("sidereal"), None);
    }

    #[test]
    fn classify_with_fixed_ayanamsa() {
        let out = classify_cmd(&KundaliConfig::default(), 20.0, Some("24"), None, None).unwrap();
        assert!((out.ayanamsa_deg - 24.0).abs() < EPS);
        assert!((out.classification.sidereal_lon - 356.0).abs() < EPS);
        assert_eq!(out.classification.house, 12);
    }

    #[test]
    fn classify_rejects_unknown_ayanamsa() {
        assert!(classify_cmd(&KundaliConfig::default(), 20.0, Some("nope"), None, None).is_err());
    }
}
