use chrono::{TimeZone, Utc};
use kundali_chart::BirthMoment;
use proptest::prelude::*;

fn midnight() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap()
}

fn out_of_range(limit: f64) -> impl Strategy<Value = f64> {
    prop_oneof![(limit + 1e-9)..1e6, -1e6..(-limit - 1e-9)]
}

proptest! {
    #[test]
    fn valid_coordinates_accepted(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
        let b = BirthMoment::new(midnight(), lat, lon, "UTC").unwrap();
        prop_assert_eq!(b.latitude_deg(), lat);
        prop_assert_eq!(b.longitude_deg(), lon);
    }

    #[test]
    fn latitude_out_of_range_rejected(lat in out_of_range(90.0), lon in -180.0f64..=180.0) {
        prop_assert!(BirthMoment::new(midnight(), lat, lon, "UTC").is_err());
    }

    #[test]
    fn longitude_out_of_range_rejected(lat in -90.0f64..=90.0, lon in out_of_range(180.0)) {
        prop_assert!(BirthMoment::new(midnight(), lat, lon, "UTC").is_err());
    }

    #[test]
    fn json_cannot_bypass_validation(lat in out_of_range(90.0), lon in out_of_range(180.0)) {
        let json = format!(
            r#"{{"utc":"1990-01-01T00:00:00Z","latitude_deg":{lat},"longitude_deg":{lon},"timezone_id":"UTC"}}"#
        );
        prop_assert!(serde_json::from_str::<BirthMoment>(&json).is_err());
    }
}
