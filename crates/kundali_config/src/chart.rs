//! `[chart]`: ayanamsa, house system and extreme-latitude handling.

use serde::{Deserialize, Serialize};

use kundali_base::{AyanamshaSystem, BhavaSystem, HouseSystem};
use kundali_chart::{ChartSettings, DegeneratePolicy};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DegenerateMode {
    Fail,
    #[default]
    Substitute,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub ayanamsa: AyanamshaSystem,
    #[serde(default)]
    pub house_system: BhavaSystem,
    /// What to do when `house_system` has no cusps at the birth latitude.
    #[serde(default)]
    pub degenerate_policy: DegenerateMode,
    /// Used in place of `house_system` under `substitute`.
    #[serde(default)]
    pub fallback_house_system: BhavaSystem,
    #[serde(default)]
    pub include_outer_bodies: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamshaSystem::default(),
            house_system: BhavaSystem::default(),
            degenerate_policy: DegenerateMode::default(),
            fallback_house_system: BhavaSystem::WholeSign,
            include_outer_bodies: false,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.degenerate_policy == DegenerateMode::Substitute
            && self.fallback_house_system.latitude_dependent()
        {
            return Err(ConfigError::invalid(
                "chart.fallback_house_system",
                format!("{} is itself latitude dependent", self.fallback_house_system.name()),
            ));
        }
        Ok(())
    }

    pub fn settings(&self) -> ChartSettings {
        ChartSettings {
            ayanamsha: self.ayanamsa,
            house_system: self.house_system,
            degenerate_policy: match self.degenerate_policy {
                DegenerateMode::Fail => DegeneratePolicy::Fail,
                DegenerateMode::Substitute => {
                    DegeneratePolicy::Substitute(self.fallback_house_system)
                }
            },
            include_outer_bodies: self.include_outer_bodies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chart_settings() {
        assert_eq!(ChartConfig::default().settings(), ChartSettings::default());
    }

    #[test]
    fn latitude_dependent_fallback_rejected() {
        let cfg = ChartConfig {
            fallback_house_system: BhavaSystem::Koch,
            ..ChartConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = ChartConfig {
            degenerate_policy: DegenerateMode::Fail,
            ..cfg
        };
        assert!(cfg.validate().is_ok());
    }
}
