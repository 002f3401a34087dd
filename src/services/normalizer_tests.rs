#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::error::Error;
    use crate::parsing::{DataPoint, DataPointValue, ForecastResponse};
    use crate::services::normalizer::normalize_forecast;

    fn data_point(hour_offset: i64, value: f64) -> DataPoint {
        DataPoint {
            value: DataPointValue {
                value_color: "#FFFFFF".to_string(),
                actual_value: value,
            },
            hour_offset,
        }
    }

    fn series(values: &[f64]) -> Option<Vec<DataPoint>> {
        Some(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| data_point(i as i64, v))
                .collect(),
        )
    }

    /// Minimal payload: evening start in San Francisco, all arrays absent.
    fn create_test_response() -> ForecastResponse {
        ForecastResponse {
            local_start_time: "2024-01-15T18:00:00".to_string(),
            utc_start_time: "2024-01-16T02:00:00Z".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
            latitude: 37.77,
            longitude: -122.42,
            api_credit_used_today: 1.0,
            rdps_cloud_cover: None,
            nam_cloud_cover: None,
            gfs_cloud_cover: None,
            seeing: None,
            transparency: None,
            temperature: None,
            dew_point: None,
        }
    }

    fn start_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_no_cloud_cover_is_fatal() {
        let response = create_test_response();

        let err = normalize_forecast(&response).unwrap_err();
        assert!(matches!(err, Error::NoCloudCoverData));
        assert_eq!(err.to_string(), "No cloud cover data available");
    }

    #[test]
    fn test_rdps_wins_over_other_models() {
        let mut response = create_test_response();
        response.rdps_cloud_cover = series(&[10.0]);
        response.nam_cloud_cover = series(&[40.0]);
        response.gfs_cloud_cover = series(&[70.0]);

        let hours = normalize_forecast(&response).unwrap();
        assert_eq!(hours.len(), 1);
        assert_eq!(hours[0].cloud_cover_pct, 10.0);
    }

    #[test]
    fn test_nam_fallback_when_rdps_missing() {
        let mut response = create_test_response();
        response.nam_cloud_cover = series(&[40.0]);
        response.gfs_cloud_cover = series(&[70.0]);

        let hours = normalize_forecast(&response).unwrap();
        assert_eq!(hours[0].cloud_cover_pct, 40.0);
    }

    #[test]
    fn test_gfs_fallback_when_only_model() {
        let mut response = create_test_response();
        response.gfs_cloud_cover = series(&[70.0]);

        let hours = normalize_forecast(&response).unwrap();
        assert_eq!(hours[0].cloud_cover_pct, 70.0);
    }

    #[test]
    fn test_empty_rdps_array_still_wins_priority() {
        // Present-but-empty beats a populated lower-priority model
        let mut response = create_test_response();
        response.rdps_cloud_cover = Some(Vec::new());
        response.nam_cloud_cover = series(&[40.0, 40.0, 40.0]);

        let hours = normalize_forecast(&response).unwrap();
        assert!(hours.is_empty());
    }

    #[test]
    fn test_local_time_advances_hourly_from_start() {
        let mut response = create_test_response();
        response.rdps_cloud_cover = series(&[10.0, 20.0, 30.0]);

        let hours = normalize_forecast(&response).unwrap();
        assert_eq!(hours.len(), 3);
        for (i, hour) in hours.iter().enumerate() {
            assert_eq!(hour.hour_offset, i);
            assert_eq!(
                hour.local_time,
                start_time() + chrono::Duration::hours(i as i64)
            );
        }
    }

    #[test]
    fn test_missing_slots_use_per_field_defaults() {
        let mut response = create_test_response();
        response.rdps_cloud_cover = series(&[10.0, 10.0, 10.0]);
        // Seeing array shorter than the cloud array: hours 1 and 2 fall back
        response.seeing = series(&[1.2]);

        let hours = normalize_forecast(&response).unwrap();
        assert_eq!(hours[0].seeing.value(), 1.2);
        assert_eq!(hours[1].seeing.value(), 3.0);
        assert_eq!(hours[2].seeing.value(), 3.0);
        // Absent arrays fall back wholesale
        assert_eq!(hours[0].transparency, 10.0);
        assert!((hours[0].temperature_c - 9.85).abs() < 1e-9);
        assert!((hours[0].dew_point_c - 4.85).abs() < 1e-9);
    }

    #[test]
    fn test_humidity_derived_from_default_temperatures() {
        // 283 K air with a 278 K dew point sits near 71% RH
        let mut response = create_test_response();
        response.rdps_cloud_cover = series(&[10.0]);

        let hours = normalize_forecast(&response).unwrap();
        let rh = hours[0].humidity_pct;
        assert!(rh > 70.5 && rh < 71.5, "expected ~71% RH, got {}", rh);
    }

    #[test]
    fn test_score_and_imageability_are_derived() {
        let mut response = create_test_response();
        response.rdps_cloud_cover = series(&[5.0, 80.0, 30.0]);

        let hours = normalize_forecast(&response).unwrap();
        // cloud 5 -> 95, default seeing 3.0 -> 40, default transparency -> 85,
        // derived humidity ~71% -> ~78.7; composite lands near 76.2
        assert!(hours[0].score > 76.0 && hours[0].score < 76.4);
        assert!(hours[0].imageable);
        assert!(!hours[1].imageable); // 80% clouds
        assert!(hours[2].imageable);
    }

    #[test]
    fn test_fractional_readings_pass_through() {
        let mut response = create_test_response();
        response.rdps_cloud_cover = series(&[12.5]);
        response.transparency = series(&[7.3]);

        let hours = normalize_forecast(&response).unwrap();
        assert_eq!(hours[0].cloud_cover_pct, 12.5);
        assert_eq!(hours[0].transparency, 7.3);
    }
}
