//! Birth instant and time scales.
//!
//! Julian Dates are derived from the Unix epoch (JD 2440587.5). Terrestrial
//! Time adds Delta T from the Espenak-Meeus polynomial fits; UT1 is taken as
//! UTC, which is well inside the precision of a birth time.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date (UT) of a UTC instant.
pub fn jd_from_utc(utc: &DateTime<Utc>) -> f64 {
    let secs = utc.timestamp() as f64 + utc.timestamp_subsec_nanos() as f64 * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// UTC instant for a Julian Date (UT), to the nearest millisecond.
pub fn utc_from_jd(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Delta T = TT - UT in seconds for a decimal year.
///
/// Espenak and Meeus polynomial fits (NASA Five Millennium Canon), with the
/// long-term parabola outside -500..2150.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if !(-500.0..2150.0).contains(&y) {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 500.0 {
        let u = y / 100.0;
        return poly(
            u,
            &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521],
        );
    }
    if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        return poly(
            u,
            &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073],
        );
    }
    if y < 1700.0 {
        let t = y - 1600.0;
        return poly(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]);
    }
    if y < 1800.0 {
        let t = y - 1700.0;
        return poly(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0]);
    }
    if y < 1860.0 {
        let t = y - 1800.0;
        return poly(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        );
    }
    if y < 1900.0 {
        let t = y - 1860.0;
        return poly(
            t,
            &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0],
        );
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        return poly(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197]);
    }
    if y < 1941.0 {
        let t = y - 1920.0;
        return poly(t, &[21.20, 0.84493, -0.076100, 0.0020936]);
    }
    if y < 1961.0 {
        let t = y - 1950.0;
        return poly(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]);
    }
    if y < 1986.0 {
        let t = y - 1975.0;
        return poly(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]);
    }
    if y < 2005.0 {
        let t = y - 2000.0;
        return poly(
            t,
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
        );
    }
    if y < 2050.0 {
        let t = y - 2000.0;
        return poly(t, &[62.92, 0.32217, 0.005589]);
    }
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
}

/// Horner evaluation, coefficients lowest order first.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Decimal year at the middle of the month, as the fits expect.
fn decimal_year(utc: &DateTime<Utc>) -> f64 {
    utc.year() as f64 + (utc.month() as f64 - 0.5) / 12.0
}

/// An immutable, validated birth instant and place.
///
/// Deserialization goes through [`BirthMoment::new`], so a stored chart
/// cannot smuggle in an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBirthMoment")]
pub struct BirthMoment {
    utc: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
    timezone_id: String,
}

impl BirthMoment {
    /// Latitude in [-90, 90], longitude in [-180, 180], east positive.
    /// An empty timezone id is stored as "UTC".
    pub fn new(
        utc: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone_id: impl Into<String>,
    ) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ChartError::InvalidInput(format!(
                "latitude {latitude_deg} outside [-90, 90]"
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ChartError::InvalidInput(format!(
                "longitude {longitude_deg} outside [-180, 180]"
            )));
        }
        let timezone_id = timezone_id.into();
        if timezone_id.chars().any(char::is_whitespace) {
            return Err(ChartError::InvalidInput(format!(
                "timezone id {timezone_id:?} contains whitespace"
            )));
        }
        let timezone_id = if timezone_id.is_empty() {
            "UTC".to_string()
        } else {
            timezone_id
        };
        Ok(Self {
            utc,
            latitude_deg,
            longitude_deg,
            timezone_id,
        })
    }

    /// Parse an RFC 3339 timestamp. A naive `YYYY-MM-DDTHH:MM[:SS]` is
    /// read as UTC.
    pub fn parse(
        datetime: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone_id: impl Into<String>,
    ) -> Result<Self, ChartError> {
        let utc = parse_utc(datetime)?;
        Self::new(utc, latitude_deg, longitude_deg, timezone_id)
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn timezone_id(&self) -> &str {
        &self.timezone_id
    }

    /// Julian Date, UT.
    pub fn jd_ut(&self) -> f64 {
        jd_from_utc(&self.utc)
    }

    /// Julian Date, TT.
    pub fn jd_tt(&self) -> f64 {
        self.jd_ut() + delta_t_seconds(decimal_year(&self.utc)) / SECONDS_PER_DAY
    }
}

/// Unchecked wire form of [`BirthMoment`].
#[derive(Deserialize)]
struct RawBirthMoment {
    utc: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
    #[serde(default)]
    timezone_id: String,
}

impl TryFrom<RawBirthMoment> for BirthMoment {
    type Error = ChartError;

    fn try_from(raw: RawBirthMoment) -> Result<Self, Self::Error> {
        Self::new(raw.utc, raw.latitude_deg, raw.longitude_deg, raw.timezone_id)
    }
}

/// Parse RFC 3339, falling back to a naive date-time taken as UTC.
pub fn parse_utc(datetime: &str) -> Result<DateTime<Utc>, ChartError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(datetime, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(ChartError::InvalidInput(format!(
        "unparseable date-time {datetime:?}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn j2000_noon() {
        let utc = parse_utc("2000-01-01T12:00:00Z").unwrap();
        assert!((jd_from_utc(&utc) - 2_451_545.0).abs() < EPS);
    }

    #[test]
    fn jd_round_trip_to_millisecond() {
        let utc = parse_utc("1990-01-01T06:30:15.250Z").unwrap();
        let back = utc_from_jd(jd_from_utc(&utc)).unwrap();
        assert_eq!(back, utc);
    }

    #[test]
    fn delta_t_known_values() {
        // NASA tabulated: 1900 ~ -2.8 s, 1990 ~ 56.9 s, 2000 ~ 63.8 s
        assert!((delta_t_seconds(1900.0) + 2.79).abs() < 0.5);
        assert!((delta_t_seconds(1990.0) - 56.9).abs() < 1.0);
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 0.5);
    }

    #[test]
    fn delta_t_continuous_at_2005() {
        let below = delta_t_seconds(2005.0 - 1e-9);
        let above = delta_t_seconds(2005.0);
        assert!((below - above).abs() < 1.0);
    }

    #[test]
    fn tt_ahead_of_ut() {
        let b = BirthMoment::parse("2020-06-01T00:00:00Z", 0.0, 0.0, "UTC").unwrap();
        let dt = (b.jd_tt() - b.jd_ut()) * SECONDS_PER_DAY;
        assert!(dt > 60.0 && dt < 80.0, "{dt}");
    }

    #[test]
    fn rejects_out_of_range() {
        let utc = parse_utc("1990-01-01T00:00:00Z").unwrap();
        assert!(BirthMoment::new(utc, 90.5, 0.0, "UTC").is_err());
        assert!(BirthMoment::new(utc, 0.0, -180.1, "UTC").is_err());
        assert!(BirthMoment::new(utc, f64::NAN, 0.0, "UTC").is_err());
        assert!(BirthMoment::new(utc, 0.0, 0.0, "Asia/ Kathmandu").is_err());
    }

    #[test]
    fn deserialize_validates_coordinates() {
        let bad = r#"{"utc":"1990-01-01T00:00:00Z","latitude_deg":500.0,"longitude_deg":-999.0,"timezone_id":"UTC"}"#;
        let err = serde_json::from_str::<BirthMoment>(bad).unwrap_err();
        assert!(err.to_string().contains("latitude"), "{err}");

        let good = BirthMoment::parse("1990-01-01T00:00:00Z", 27.7, 85.3, "Asia/Kathmandu").unwrap();
        let json = serde_json::to_string(&good).unwrap();
        assert_eq!(serde_json::from_str::<BirthMoment>(&json).unwrap(), good);
    }

    #[test]
    fn deserialize_defaults_missing_timezone() {
        let json = r#"{"utc":"1990-01-01T00:00:00Z","latitude_deg":10.0,"longitude_deg":20.0}"#;
        let b: BirthMoment = serde_json::from_str(json).unwrap();
        assert_eq!(b.timezone_id(), "UTC");
    }

    #[test]
    fn rejects_garbage_date() {
        assert!(matches!(
            BirthMoment::parse("yesterday", 10.0, 10.0, ""),
            Err(ChartError::InvalidInput(_))
        ));
    }

    #[test]
    fn naive_datetime_is_utc() {
        let b = BirthMoment::parse("1990-01-01T00:00", 27.7, 85.3, "").unwrap();
        assert_eq!(b.timezone_id(), "UTC");
        assert_eq!(b.utc(), parse_utc("1990-01-01T00:00:00Z").unwrap());
    }
}
