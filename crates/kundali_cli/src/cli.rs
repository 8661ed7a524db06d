use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kundali", version, about = "Vedic chart analytics")]
pub struct Cli {
    /// Extra config file, layered above .kundali/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Errors only on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Birth data and positions shared by every chart command.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// JSON object of tropical positions keyed by body name
    #[arg(long)]
    pub positions: PathBuf,
    /// UTC datetime (RFC 3339 or YYYY-MM-DD hh:mm[:ss])
    #[arg(long)]
    pub datetime: String,
    /// Geographic latitude, north positive
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Geographic longitude, east positive
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// IANA time zone id, kept for display
    #[arg(long, default_value = "UTC")]
    pub tz: String,
    /// Ayanamsa system (overrides config)
    #[arg(long)]
    pub ayanamsa: Option<String>,
    /// House system (overrides config)
    #[arg(long)]
    pub house_system: Option<String>,
    /// Include Uranus, Neptune and Pluto
    #[arg(long)]
    pub outer: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign, nakshatra and pada of a tropical longitude
    Classify {
        /// Ecliptic longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Ayanamsa system name, or a fixed value in degrees
        #[arg(long)]
        ayanamsa: Option<String>,
        /// Julian Date (TT) for the ayanamsa; J2000 when omitted
        #[arg(long)]
        jd: Option<f64>,
        /// Sidereal ascendant for house numbers; 0 Mesha when omitted
        #[arg(long)]
        asc: Option<f64>,
    },
    /// Assemble a chart
    Chart(ChartArgs),
    /// Geometric aspects and graha drishti
    Aspects(ChartArgs),
    /// Shadbala for every available graha
    Strength(ChartArgs),
    /// Yogas present in the chart
    Yogas(ChartArgs),
    /// Vimshottari dasha timeline
    Dasha {
        #[command(flatten)]
        chart: ChartArgs,
        /// Depth, 1 to 6 (overrides config)
        #[arg(long)]
        level: Option<u8>,
        /// Report the periods running at this UTC datetime
        #[arg(long)]
        now: Option<String>,
        /// Include sandhi windows at this level
        #[arg(long)]
        sandhi: Option<u8>,
    },
    /// Bhinna and sarva ashtakavarga
    Ashtakavarga(ChartArgs),
    /// Everything above in one document
    Analyse(ChartArgs),
    /// North-Indian chart geometry
    Layout {
        #[command(flatten)]
        chart: ChartArgs,
        /// Canvas side (overrides config)
        #[arg(long)]
        size: Option<f64>,
    },
    /// Print the effective configuration as TOML
    Config,
}
