//! `[dasha]`: timeline depth.

use serde::{Deserialize, Serialize};

use kundali_base::dasha::{DEFAULT_DASHA_LEVEL, MAX_DASHA_LEVEL};

use crate::error::ConfigError;

const fn default_max_level() -> u8 {
    DEFAULT_DASHA_LEVEL
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashaConfig {
    /// Deepest level generated, 1 (mahadasha) to 6.
    #[serde(default = "default_max_level")]
    pub max_level: u8,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            max_level: default_max_level(),
        }
    }
}

impl DashaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_DASHA_LEVEL).contains(&self.max_level) {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "dasha.max_level",
                format!("{} is outside 1..={MAX_DASHA_LEVEL}", self.max_level),
            ))
        }
    }
}
