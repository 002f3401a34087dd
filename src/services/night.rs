//! Narrowing a forecast to the hours of astronomical night.

use crate::models::{DarkPeriod, HourlyForecast};

/// Extract the hours that fall inside the given dark period, in order.
///
/// The period boundary is half-open: an hour exactly at dawn is excluded.
/// The caller may also skip this filter entirely and analyze the full
/// sequence under its own window definition.
pub fn night_hours(hours: &[HourlyForecast], night: &DarkPeriod) -> Vec<HourlyForecast> {
    hours
        .iter()
        .filter(|h| night.contains(h.local_time))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DarkPeriod;
    use chrono::{NaiveDate, NaiveDateTime};
    use qtty::Arcseconds;

    fn hour_at(hour: u32) -> HourlyForecast {
        let local_time: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        HourlyForecast {
            hour_offset: hour as usize,
            local_time,
            cloud_cover_pct: 10.0,
            seeing: Arcseconds::new(2.0),
            transparency: 5.0,
            temperature_c: 10.0,
            dew_point_c: 2.0,
            humidity_pct: 55.0,
            score: 80.0,
            imageable: true,
        }
    }

    #[test]
    fn test_night_hours_filters_to_period() {
        let hours: Vec<_> = (17..=23).map(hour_at).collect();
        let night = DarkPeriod::new(
            hour_at(19).local_time,
            hour_at(22).local_time,
        )
        .unwrap();

        let filtered = night_hours(&hours, &night);

        // 19, 20, 21 kept; 22 is the exclusive end
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].hour_offset, 19);
        assert_eq!(filtered[2].hour_offset, 21);
    }

    #[test]
    fn test_night_hours_empty_outside_period() {
        let hours: Vec<_> = (8..=12).map(hour_at).collect();
        let night = DarkPeriod::new(
            hour_at(19).local_time,
            hour_at(23).local_time,
        )
        .unwrap();

        assert!(night_hours(&hours, &night).is_empty());
    }
}
