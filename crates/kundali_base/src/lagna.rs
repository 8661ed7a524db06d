//! Lagna (Ascendant) and MC (Midheaven) from local sidereal time.
//!
//! Standard spherical astronomy (Meeus, "Astronomical Algorithms", ch. 13).
//! All results are tropical ecliptic longitudes; subtract the ayanamsha for
//! sidereal values.

use std::f64::consts::TAU;

/// Mean obliquity of the ecliptic at J2000.0 in degrees (IAU 2006).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_279_444;

/// Mean obliquity of the ecliptic at J2000.0 in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// Longitude where the ecliptic meets a great circle through the equator
/// point of right ascension `x`, inclined with pole height `pole`.
///
/// With `x = RAMC + 90 deg` and `pole = latitude` this is the Ascendant; the
/// quadrant house systems reuse it with their own `x` and pole heights.
pub fn oblique_ascension_longitude_rad(x: f64, pole: f64, eps: f64) -> f64 {
    f64::atan2(x.sin(), x.cos() * eps.cos() - pole.tan() * eps.sin()).rem_euclid(TAU)
}

/// Ecliptic longitude of the Lagna (Ascendant) in radians, in [0, 2*pi).
///
/// `Asc = atan2(cos(LST), -(sin(LST)*cos(eps) + tan(phi)*sin(eps)))`
pub fn lagna_longitude_rad(lst_rad: f64, latitude_rad: f64) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * eps.cos() + latitude_rad.tan() * eps.sin()),
    )
    .rem_euclid(TAU)
}

/// Ecliptic longitude of the MC in radians, in [0, 2*pi).
///
/// `MC = atan2(sin(LST), cos(LST)*cos(eps))`
pub fn mc_longitude_rad(lst_rad: f64) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    f64::atan2(lst_rad.sin(), lst_rad.cos() * eps.cos()).rem_euclid(TAU)
}

/// RAMC equals LST; normalized to [0, 2*pi).
pub fn ramc_rad(lst_rad: f64) -> f64 {
    lst_rad.rem_euclid(TAU)
}

/// Lagna and MC in degrees from LST (radians) and latitude (degrees).
pub fn lagna_and_mc_deg(lst_rad: f64, latitude_deg: f64) -> (f64, f64) {
    (
        lagna_longitude_rad(lst_rad, latitude_deg.to_radians()).to_degrees(),
        mc_longitude_rad(lst_rad).to_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-10;

    /// At LST=0 the equinox culminates; the eastern horizon on the equator
    /// holds longitude 90 (0 Cancer).
    #[test]
    fn ascendant_equator_lst_zero() {
        let asc = lagna_longitude_rad(0.0, 0.0);
        assert!((asc - PI / 2.0).abs() < EPS, "asc = {}", asc.to_degrees());
    }

    #[test]
    fn mc_lst_zero() {
        assert!(mc_longitude_rad(0.0).abs() < EPS);
    }

    #[test]
    fn ascendant_leads_mc_by_about_90_at_equator() {
        for k in 0..24 {
            let lst = k as f64 * TAU / 24.0;
            let asc = lagna_longitude_rad(lst, 0.0).to_degrees();
            let mc = mc_longitude_rad(lst).to_degrees();
            let d = (asc - mc).rem_euclid(360.0);
            assert!((60.0..=120.0).contains(&d), "lst step {k}: asc-mc = {d}");
        }
    }

    #[test]
    fn lst_90_equator_asc_is_180() {
        let asc = lagna_longitude_rad(PI / 2.0, 0.0);
        assert!((asc - PI).abs() < EPS);
    }

    #[test]
    fn oblique_matches_lagna() {
        let lst = 1.234;
        let lat = 0.5;
        let a = lagna_longitude_rad(lst, lat);
        let b = oblique_ascension_longitude_rad(lst + PI / 2.0, lat, OBLIQUITY_J2000_RAD);
        assert!((a - b).abs() < EPS);
    }
}
