//! Layered configuration loading for kundali using figment.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. User-level `~/.config/kundali/config.toml`
//! 3. Project-level `.kundali/config.toml`
//! 4. An explicit file, when given
//! 5. Environment variables with the `KUNDALI_` prefix
//!
//! `__` separates nested sections, so `KUNDALI_CHART__HOUSE_SYSTEM=Placidus`
//! sets `chart.house_system` and `KUNDALI_LAYOUT__SIZE=600` sets
//! `layout.size`.

mod aspects;
mod chart;
mod dasha;
mod error;
mod layout;
mod strength;

pub use aspects::AspectsConfig;
pub use chart::{ChartConfig, DegenerateMode};
pub use dasha::DashaConfig;
pub use error::ConfigError;
pub use layout::LayoutConfig;
pub use strength::StrengthConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use kundali_base::AshtakavargaRules;
use kundali_chart::AnalysisSettings;

pub const ENV_PREFIX: &str = "KUNDALI_";
pub const PROJECT_CONFIG: &str = ".kundali/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KundaliConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub dasha: DashaConfig,
    #[serde(default)]
    pub strength: StrengthConfig,
    #[serde(default)]
    pub aspects: AspectsConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl KundaliConfig {
    /// Load from defaults, config files and the environment, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// As [`load`](Self::load), with `explicit` layered above the project file.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::invalid(
                    "config",
                    format!("{} does not exist", path.display()),
                ));
            }
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The provider chain. Public so callers can layer more providers.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kundali").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chart.validate()?;
        self.dasha.validate()?;
        self.strength.validate()?;
        self.aspects.validate()?;
        self.layout.validate()
    }

    /// Everything the analysis pass reads.
    pub fn analysis_settings(&self) -> Result<AnalysisSettings, ConfigError> {
        Ok(AnalysisSettings {
            orbs: self.aspects.orb_table()?,
            bands: self.strength.bands(),
            dasha_level: self.dasha.max_level,
            rules: AshtakavargaRules::default(),
            ..AnalysisSettings::default()
        })
    }

    /// The effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
