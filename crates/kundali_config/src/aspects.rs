//! `[aspects]`: orb overrides.
//!
//! ```toml
//! [aspects]
//! outer = 4.0
//!
//! [aspects.orbs]
//! Sun = 12.0
//! Shani = 8.0
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use kundali_base::{Body, OrbTable};
use kundali_chart::body_from_name;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AspectsConfig {
    /// Orb in degrees keyed by English or Sanskrit body name.
    #[serde(default)]
    pub orbs: BTreeMap<String, f64>,
    /// Shared orb for Uranus, Neptune and Pluto.
    #[serde(default)]
    pub outer: Option<f64>,
}

fn check_orb(field: &str, orb: f64) -> Result<(), ConfigError> {
    if orb.is_finite() && (0.0..=30.0).contains(&orb) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("orb {orb} is outside 0..=30")))
    }
}

impl AspectsConfig {
    /// Defaults with the overrides applied.
    pub fn orb_table(&self) -> Result<OrbTable, ConfigError> {
        let mut table = OrbTable::default();
        for (name, &orb) in &self.orbs {
            let field = format!("aspects.orbs.{name}");
            check_orb(&field, orb)?;
            match body_from_name(name) {
                Some(Body::Classical(g)) => table.classical[g.index() as usize] = orb,
                Some(Body::Outer(_)) => table.outer = orb,
                None => return Err(ConfigError::invalid(&field, "unknown body")),
            }
        }
        if let Some(orb) = self.outer {
            check_orb("aspects.outer", orb)?;
            table.outer = orb;
        }
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.orb_table().map(|_| ())
    }
}
