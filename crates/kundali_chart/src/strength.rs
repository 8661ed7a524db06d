//! Shadbala for an assembled chart.

use serde::{Deserialize, Serialize};

use kundali_base::{
    ALL_GRAHAS, AspectTable, Graha, ShadbalaComponent, ShadbalaConstants, ShadbalaInputs,
    ShadbalaResult, StrengthBands, all_shadbalas, normalize_360,
};

use crate::chart::VedicChart;
use crate::ephemeris::EclipticState;
use crate::error::ChartIssue;
use crate::riseset::{SunTrack, VedicDay, WEEKDAY_LORDS, local_date_jd_0h, vedic_day, weekday_index};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// One entry per available graha, in graha order.
    pub results: Vec<ShadbalaResult>,
    pub issues: Vec<ChartIssue>,
    pub vedic_day: VedicDay,
}

impl StrengthReport {
    pub fn get(&self, graha: Graha) -> Option<&ShadbalaResult> {
        self.results.iter().find(|r| r.body == graha)
    }
}

/// Sunrise, weekday and hora for the birth instant, then the six strengths.
pub fn strength_report(
    chart: &VedicChart,
    aspects: &AspectTable,
    constants: &ShadbalaConstants,
    bands: &StrengthBands,
) -> StrengthReport {
    let lat = chart.birth.latitude_deg();
    let lon = chart.birth.longitude_deg();

    let day = match chart.graha(Graha::Surya) {
        Some(sun) => {
            let track = SunTrack {
                state: EclipticState::new(
                    chart.tropical(sun.sidereal_longitude),
                    sun.latitude,
                    sun.speed,
                    1.0,
                ),
                epoch_jd: chart.jd_ut,
            };
            vedic_day(&track, chart.jd_ut, lat, lon)
        }
        None => VedicDay {
            weekday_lord: WEEKDAY_LORDS[weekday_index(local_date_jd_0h(chart.jd_ut, lon))],
            day_night: None,
            hora_lord: None,
            period_start_jd: None,
            period_end_jd: None,
        },
    };

    let mut inputs = ShadbalaInputs {
        sidereal_lons: [0.0; 9],
        speeds: [0.0; 9],
        declinations: [0.0; 9],
        houses: [1; 9],
        cusps: chart.house_cusps,
        available: [false; 9],
        moon_sun_elongation: None,
        day_night: day.day_night,
        weekday_lord: day.weekday_lord,
        hora_lord: day.hora_lord,
        drishti: aspects,
    };
    for g in ALL_GRAHAS {
        if let Some(p) = chart.graha(g) {
            let i = g.index() as usize;
            inputs.sidereal_lons[i] = p.sidereal_longitude;
            inputs.speeds[i] = p.speed;
            inputs.declinations[i] = p.declination;
            inputs.houses[i] = p.house;
            inputs.available[i] = true;
        }
    }
    if let (Some(moon), Some(sun)) = (chart.graha(Graha::Chandra), chart.graha(Graha::Surya)) {
        inputs.moon_sun_elongation =
            Some(normalize_360(moon.sidereal_longitude - sun.sidereal_longitude));
    }
    let phase_known = inputs.moon_sun_elongation.is_some();

    let results = all_shadbalas(&inputs, constants, bands);
    let mut issues = Vec::new();
    for r in &results {
        for &component in &r.degraded_components {
            let reason = match component {
                ShadbalaComponent::Kala if chart.graha(Graha::Surya).is_none() => {
                    "Sun position unavailable; day, night and hora use neutral values"
                }
                ShadbalaComponent::Kala if inputs.day_night.is_some() && !phase_known => {
                    "lunar phase unknown; phase-dependent values are neutral"
                }
                ShadbalaComponent::Kala => {
                    "Sun does not rise or set at this latitude; day, night and hora use neutral values"
                }
                ShadbalaComponent::Cheshta => "lunar phase unknown; motional strength is neutral",
                ShadbalaComponent::Drik => "aspecting bodies unavailable",
                _ => "input unavailable",
            };
            issues.push(ChartIssue::PartialStrengthInput {
                body: r.body,
                component,
                reason: reason.to_string(),
            });
        }
    }
    tracing::debug!(
        grahas = results.len(),
        degraded = issues.len(),
        weekday_lord = day.weekday_lord.name(),
        "strength computed"
    );

    StrengthReport {
        results,
        issues,
        vedic_day: day,
    }
}
