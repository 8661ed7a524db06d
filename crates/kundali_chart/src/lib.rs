//! Chart assembly for the kundali engine.
//!
//! Turns a birth moment plus an [`Ephemeris`] into a [`VedicChart`], then
//! runs the analytics in `kundali_base` over it. Body-level failures are
//! reported as [`ChartIssue`]s next to the chart rather than aborting.

pub mod analysis;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod riseset;
pub mod sidereal;
pub mod strength;
pub mod time;

pub use analysis::{
    AnalysisSettings, ChartAnalysis, analyse, aspect_inputs, chart_ashtakavarga, chart_aspects,
    chart_dasha, chart_yogas, placements, yoga_context,
};
pub use chart::{
    ChartBuilder, ChartOutcome, ChartSettings, DegeneratePolicy, PlanetPosition, VedicChart,
    sidereal_cusps,
};
pub use ephemeris::{
    AyanamshaProvider, EclipticState, Ephemeris, FixedAyanamsha, TableEphemeris, body_from_name,
};
pub use error::{ChartError, ChartIssue, EphemerisFailure};
pub use riseset::{RiseSetResult, SunTrack, VedicDay, compute_rise_set, vedic_day};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
pub use strength::{StrengthReport, strength_report};
pub use time::{BirthMoment, delta_t_seconds, jd_from_utc, parse_utc, utc_from_jd};
