//! Sunrise, sunset and the Vedic day.
//!
//! The Sun is propagated linearly from its chart position, which is ample
//! over the two or three days around birth. The rise/set search follows the
//! usual transit-plus-hour-angle construction, refined a few times as the
//! Sun moves.
//!
//! A Vedic day runs from sunrise to the next sunrise, so a birth before
//! sunrise belongs to the previous weekday.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use kundali_base::{DayNight, Graha};

use crate::ephemeris::EclipticState;
use crate::sidereal::{SIDEREAL_RATE, local_sidereal_time_rad};

const MAX_ITERATIONS: usize = 5;

/// ~0.09 s.
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Upper limb on the horizon: 34' refraction plus 16' semidiameter.
pub const SUNRISE_ALTITUDE_DEG: f64 = -50.0 / 60.0;

/// Weekday lords, Sunday first.
pub const WEEKDAY_LORDS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Descending orbital period order; each hora passes to the next.
pub const CHALDEAN_ORDER: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
];

/// The Sun as a uniformly moving point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTrack {
    /// Tropical state at `epoch_jd`.
    pub state: EclipticState,
    pub epoch_jd: f64,
}

impl SunTrack {
    pub fn at(&self, jd: f64) -> EclipticState {
        EclipticState {
            lon: self.state.lon + self.state.speed * (jd - self.epoch_jd),
            ..self.state
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RiseSetResult {
    /// Event time, JD UT.
    Event(f64),
    /// The Sun stays below the horizon.
    NeverRises,
    /// The Sun stays above the horizon.
    NeverSets,
}

impl RiseSetResult {
    pub fn jd(self) -> Option<f64> {
        match self {
            Self::Event(jd) => Some(jd),
            _ => None,
        }
    }
}

/// Approximate UT of local noon for the date whose 0h UT is `jd_0h`.
pub fn approximate_local_noon_jd(jd_0h: f64, longitude_deg: f64) -> f64 {
    jd_0h + 0.5 - longitude_deg / 360.0
}

/// 0h UT Julian Date of the local mean-time calendar date containing `jd_ut`.
pub fn local_date_jd_0h(jd_ut: f64, longitude_deg: f64) -> f64 {
    (jd_ut + longitude_deg / 360.0 - 0.5).floor() + 0.5
}

/// 0 = Sunday for a 0h UT Julian Date.
pub fn weekday_index(jd_0h: f64) -> usize {
    ((jd_0h + 1.5).floor() as i64).rem_euclid(7) as usize
}

fn wrap_pi(a: f64) -> f64 {
    let a = a.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Hour angle of the target altitude, or the polar outcome.
fn target_hour_angle(dec: f64, latitude_rad: f64) -> Result<f64, RiseSetResult> {
    let h0 = SUNRISE_ALTITUDE_DEG.to_radians();
    let cos_h = (h0.sin() - latitude_rad.sin() * dec.sin()) / (latitude_rad.cos() * dec.cos());
    if cos_h > 1.0 {
        Err(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Err(RiseSetResult::NeverSets)
    } else {
        Ok(cos_h.acos())
    }
}

/// Sunrise (`rising`) or sunset near the given local noon.
pub fn compute_rise_set(
    sun: &SunTrack,
    latitude_deg: f64,
    longitude_deg: f64,
    rising: bool,
    jd_ut_noon: f64,
) -> RiseSetResult {
    let phi = latitude_deg.to_radians();
    let rate = TAU * SIDEREAL_RATE;

    let (ra, dec) = sun.at(jd_ut_noon).equatorial_rad();
    let h0 = match target_hour_angle(dec, phi) {
        Ok(h) => h,
        Err(polar) => return polar,
    };

    let ha_noon = wrap_pi(local_sidereal_time_rad(jd_ut_noon, longitude_deg) - ra);
    let transit = jd_ut_noon - ha_noon / rate;
    let mut jd = if rising {
        transit - h0 / rate
    } else {
        transit + h0 / rate
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i) = sun.at(jd).equatorial_rad();
        let h_target = match target_hour_angle(dec_i, phi) {
            Ok(h) => h,
            Err(polar) => return polar,
        };
        let ha_target = if rising { -h_target } else { h_target };
        let ha_actual = wrap_pi(local_sidereal_time_rad(jd, longitude_deg) - ra_i);
        let correction = wrap_pi(ha_target - ha_actual) / rate;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    RiseSetResult::Event(jd)
}

/// Where an instant falls in its Vedic day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VedicDay {
    pub weekday_lord: Graha,
    /// None when the Sun does not rise or set around the date.
    pub day_night: Option<DayNight>,
    pub hora_lord: Option<Graha>,
    /// Start of the current day or night half, JD UT.
    pub period_start_jd: Option<f64>,
    /// End of the current day or night half, JD UT.
    pub period_end_jd: Option<f64>,
}

/// Hora lord for the `n`-th hora (0-based, 0..24) after sunrise.
pub fn hora_lord(weekday_lord: Graha, n: usize) -> Graha {
    let start = CHALDEAN_ORDER
        .iter()
        .position(|&g| g == weekday_lord)
        .unwrap_or(0);
    CHALDEAN_ORDER[(start + n) % 7]
}

/// Twelve equal horas in each of day and night.
fn hora_number(day_night: DayNight) -> usize {
    let within = ((day_night.fraction * 12.0).floor() as usize).min(11);
    if day_night.is_daytime { within } else { 12 + within }
}

/// Weekday, day/night fraction and hora lord at `jd_ut`.
pub fn vedic_day(sun: &SunTrack, jd_ut: f64, latitude_deg: f64, longitude_deg: f64) -> VedicDay {
    let today = local_date_jd_0h(jd_ut, longitude_deg);
    let civil_lord = WEEKDAY_LORDS[weekday_index(today)];
    let event = |day_0h: f64, rising: bool| {
        compute_rise_set(
            sun,
            latitude_deg,
            longitude_deg,
            rising,
            approximate_local_noon_jd(day_0h, longitude_deg),
        )
        .jd()
    };
    let polar = VedicDay {
        weekday_lord: civil_lord,
        day_night: None,
        hora_lord: None,
        period_start_jd: None,
        period_end_jd: None,
    };

    let (Some(rise), Some(set)) = (event(today, true), event(today, false)) else {
        return polar;
    };

    let (day_0h, is_daytime, start, end) = if jd_ut < rise {
        let Some(prev_set) = event(today - 1.0, false) else {
            return polar;
        };
        (today - 1.0, false, prev_set, rise)
    } else if jd_ut < set {
        (today, true, rise, set)
    } else {
        let Some(next_rise) = event(today + 1.0, true) else {
            return polar;
        };
        (today, false, set, next_rise)
    };

    let weekday_lord = WEEKDAY_LORDS[weekday_index(day_0h)];
    let day_night = DayNight {
        is_daytime,
        fraction: ((jd_ut - start) / (end - start)).clamp(0.0, 1.0),
    };
    VedicDay {
        weekday_lord,
        day_night: Some(day_night),
        hora_lord: Some(hora_lord(weekday_lord, hora_number(day_night))),
        period_start_jd: Some(start),
        period_end_jd: Some(end),
    }
}
