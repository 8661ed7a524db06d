//! Earth Rotation Angle, Greenwich Mean Sidereal Time and local sidereal time.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use kundali_base::ayanamsha::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Sidereal rotation rate, revolutions per UT day.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle in radians, [0, 2pi).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + SIDEREAL_RATE * du)).rem_euclid(TAU)
}

/// GMST = ERA + polynomial(T), radians in [0, 2pi).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time for an east-positive longitude in degrees.
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_deg.to_radians()).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.46).abs() < 0.1, "{deg}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-01-01 0h UT: 6h 39m 51.17s
        let deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((deg - 99.97).abs() < 0.1, "{deg}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_rad(jd, 90.0);
        let expected = (gmst_rad(jd) + PI / 2.0).rem_euclid(TAU);
        assert!((lst - expected).abs() < 1e-12);
    }

    #[test]
    fn gmst_range() {
        for jd in [2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            assert!((0.0..TAU).contains(&gmst_rad(jd)));
        }
    }
}
