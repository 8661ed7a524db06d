//! `[strength]`: rating band edges, in percent of the required strength.

use serde::{Deserialize, Serialize};

use kundali_base::StrengthBands;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StrengthConfig {
    pub very_strong: f64,
    pub strong: f64,
    pub moderate: f64,
    pub weak: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        let b = StrengthBands::default();
        Self {
            very_strong: b.very_strong,
            strong: b.strong,
            moderate: b.moderate,
            weak: b.weak,
        }
    }
}

impl StrengthConfig {
    pub fn bands(&self) -> StrengthBands {
        StrengthBands {
            very_strong: self.very_strong,
            strong: self.strong,
            moderate: self.moderate,
            weak: self.weak,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bands()
            .validate()
            .map_err(|e| ConfigError::invalid("strength", e.to_string()))
    }
}
