//! Shared angle helpers.
//!
//! Segment lookups (sign, nakshatra, pada, house) go through [`segment_index`]
//! so that a longitude lying on a boundary up to floating rounding always lands
//! in the segment that starts there.

/// Tolerance, in segment units, inside which a position snaps to a boundary.
pub const BOUNDARY_SNAP: f64 = 1e-9;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed shortest difference `to - from`, in (-180, 180].
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let d = normalize_360(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Forward arc from `from` to `to`, in [0, 360).
pub fn arc_forward(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// Shorter angular separation, in [0, 180].
pub fn separation(a: f64, b: f64) -> f64 {
    signed_delta(a, b).abs()
}

/// Snap a position measured in segment units onto the nearest integer
/// boundary when it lies within [`BOUNDARY_SNAP`] of it.
pub fn snap_units(units: f64) -> f64 {
    let nearest = units.round();
    if (units - nearest).abs() < BOUNDARY_SNAP {
        nearest
    } else {
        units
    }
}

/// Index of the `span`-wide segment containing `lon`, counting `count`
/// segments from 0 deg.
pub fn segment_index(lon: f64, span: f64, count: u16) -> u16 {
    let units = snap_units(normalize_360(lon) / span);
    (units.floor() as i64).rem_euclid(count as i64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn signed_delta_wraps() {
        assert!((signed_delta(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((signed_delta(10.0, 350.0) + 20.0).abs() < 1e-12);
        assert!((signed_delta(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn separation_is_shorter_arc() {
        assert!((separation(10.0, 130.0) - 120.0).abs() < 1e-12);
        assert!((separation(10.0, 250.0) - 120.0).abs() < 1e-12);
    }

    #[test]
    fn snap_near_boundary() {
        assert_eq!(snap_units(2.999_999_999_99), 3.0);
        assert_eq!(snap_units(2.5), 2.5);
    }

    #[test]
    fn segment_index_exact_boundary_goes_up() {
        // 120 deg is exactly the start of the 5th sign
        assert_eq!(segment_index(120.0, 30.0, 12), 4);
        assert_eq!(segment_index(119.999, 30.0, 12), 3);
        // rounding noise below the boundary
        assert_eq!(segment_index(120.0 - 1e-12, 30.0, 12), 4);
    }

    #[test]
    fn segment_index_wraps_at_full_circle() {
        assert_eq!(segment_index(360.0 - 1e-13, 30.0, 12), 0);
    }
}
