//! Combustion (asta): a graha too close to the Sun loses strength.
//!
//! Thresholds vary by planet and, for Mercury and Venus, by retrograde state.

use crate::graha::Graha;
use crate::util::separation;

/// Combustion orb in degrees from the Sun. None for Sun, Rahu and Ketu.
pub fn combustion_threshold(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh if is_retrograde => Some(12.0),
        Graha::Buddh => Some(14.0),
        Graha::Guru => Some(11.0),
        Graha::Shukra if is_retrograde => Some(8.0),
        Graha::Shukra => Some(10.0),
        Graha::Shani => Some(15.0),
    }
}

/// A graha exactly at the threshold distance is not combust.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64, is_retrograde: bool) -> bool {
    combustion_threshold(graha, is_retrograde)
        .is_some_and(|orb| separation(graha_lon, sun_lon) < orb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_and_nodes_never_combust() {
        assert!(!is_combust(Graha::Surya, 100.0, 100.0, false));
        assert!(!is_combust(Graha::Rahu, 100.0, 100.0, false));
        assert!(!is_combust(Graha::Ketu, 100.0, 100.0, false));
    }

    #[test]
    fn mercury_retrograde_orb_tighter() {
        assert!(is_combust(Graha::Buddh, 113.0, 100.0, false));
        assert!(!is_combust(Graha::Buddh, 113.0, 100.0, true));
    }

    #[test]
    fn exact_threshold_not_combust() {
        assert!(!is_combust(Graha::Guru, 111.0, 100.0, false));
        assert!(is_combust(Graha::Guru, 110.9, 100.0, false));
    }

    #[test]
    fn wraps_across_zero() {
        assert!(is_combust(Graha::Shani, 355.0, 5.0, false));
    }
}
