//! Forecast normalization: raw payload to scored hourly records.

use chrono::Duration;
use log::warn;

use crate::error::{Error, Result};
use crate::models::HourlyForecast;
use crate::parsing::{CloudSource, DataPoint, ForecastResponse};
use crate::services::scoring;

/// Fallback values for a missing array or index slot. Cloud cover is the
/// exception: a fully absent source is fatal, only a hole in a present
/// array falls back to 50%.
const DEFAULT_CLOUD_COVER_PCT: f64 = 50.0;
const DEFAULT_SEEING_ARCSEC: f64 = 3.0;
const DEFAULT_TRANSPARENCY: f64 = 10.0;
const DEFAULT_TEMPERATURE_K: f64 = 283.0;
const DEFAULT_DEW_POINT_K: f64 = 278.0;

/// Reading at `index`, or the per-field default when the array or the slot
/// is absent.
fn sample(points: Option<&[DataPoint]>, index: usize, default: f64) -> f64 {
    points
        .and_then(|p| p.get(index))
        .map(|p| p.value.actual_value)
        .unwrap_or(default)
}

/// Normalize a raw forecast payload into scored hourly records.
///
/// The winning cloud-cover array drives the hour loop: one record per index,
/// with `local_time` = forecast start + index hours. Seeing, transparency,
/// temperature and dew point are sampled at the same index with per-field
/// defaults. Humidity is derived from temperature and dew point, and the
/// composite score and imageability flag are computed before each record is
/// returned.
///
/// # Errors
///
/// `Error::NoCloudCoverData` when all three cloud-cover models are absent —
/// that failure is surfaced, never defaulted.
pub fn normalize_forecast(response: &ForecastResponse) -> Result<Vec<HourlyForecast>> {
    let start = response.local_start()?;

    let (source, cloud_points) = response.cloud_cover().ok_or(Error::NoCloudCoverData)?;
    if source != CloudSource::Rdps {
        warn!("RDPS cloud cover missing, falling back to {}", source);
    }

    let seeing_points = response.seeing.as_deref();
    let transparency_points = response.transparency.as_deref();
    let temperature_points = response.temperature.as_deref();
    let dew_point_points = response.dew_point.as_deref();

    let mut hours = Vec::with_capacity(cloud_points.len());

    for i in 0..cloud_points.len() {
        let local_time = start + Duration::hours(i as i64);

        let temperature_c = scoring::kelvin_to_celsius(sample(
            temperature_points,
            i,
            DEFAULT_TEMPERATURE_K,
        ));
        let dew_point_c =
            scoring::kelvin_to_celsius(sample(dew_point_points, i, DEFAULT_DEW_POINT_K));
        let humidity_pct = scoring::relative_humidity(temperature_c, dew_point_c);

        let cloud_cover_pct = sample(Some(cloud_points), i, DEFAULT_CLOUD_COVER_PCT);
        let seeing = qtty::Arcseconds::new(sample(seeing_points, i, DEFAULT_SEEING_ARCSEC));
        let transparency = sample(transparency_points, i, DEFAULT_TRANSPARENCY);

        let score = scoring::score_hour(cloud_cover_pct, seeing, transparency, humidity_pct);
        let imageable = scoring::is_imageable(cloud_cover_pct, humidity_pct);

        hours.push(HourlyForecast {
            hour_offset: i,
            local_time,
            cloud_cover_pct,
            seeing,
            transparency,
            temperature_c,
            dew_point_c,
            humidity_pct,
            score,
            imageable,
        });
    }

    Ok(hours)
}
