//! Birth balance: how much of the first mahadasha remains at birth.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::vimshottari::{period_days, sequence_position};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthBalance {
    /// Nakshatra occupied by the Moon.
    pub nakshatra: Nakshatra,
    /// Its lord, ruling the first mahadasha.
    pub lord: Graha,
    /// Position of the lord in the Vimshottari sequence.
    pub sequence_index: u8,
    /// Fraction of the nakshatra (and so of the first mahadasha) already
    /// traversed, in [0, 1).
    pub elapsed_fraction: f64,
    /// Days of the first mahadasha remaining after birth.
    pub remaining_days: f64,
}

/// Birth balance from the Moon's sidereal longitude, interpolating linearly
/// within its nakshatra.
pub fn birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = info.nakshatra.lord();
    let elapsed_fraction = info.elapsed_fraction();
    BirthBalance {
        nakshatra: info.nakshatra,
        lord,
        sequence_index: sequence_position(lord),
        elapsed_fraction,
        remaining_days: period_days(lord) * (1.0 - elapsed_fraction),
    }
}
