//! `[layout]`: chart canvas and label sizing.

use serde::{Deserialize, Serialize};

use kundali_layout::LayoutSettings;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub size: f64,
    pub font_size: f64,
    pub min_scale: f64,
    pub show_sign_numbers: bool,
    pub ascendant_marker: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let s = LayoutSettings::default();
        Self {
            size: s.size,
            font_size: s.font_size,
            min_scale: s.min_scale,
            show_sign_numbers: s.show_sign_numbers,
            ascendant_marker: s.ascendant_marker,
        }
    }
}

impl LayoutConfig {
    pub fn settings(&self) -> LayoutSettings {
        LayoutSettings {
            size: self.size,
            font_size: self.font_size,
            min_scale: self.min_scale,
            show_sign_numbers: self.show_sign_numbers,
            ascendant_marker: self.ascendant_marker.clone(),
            ..LayoutSettings::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings()
            .validate()
            .map_err(|e| ConfigError::invalid("layout", e.to_string()))
    }
}
