//! Core value records for night-quality analysis.

use chrono::NaiveDateTime;
use qtty::Arcseconds;
use serde::{Deserialize, Serialize};

/// One normalized forecast hour with derived quality fields.
///
/// Built once by the normalizer and read-only afterwards: `humidity_pct`,
/// `score` and `imageable` are pure functions of the remaining fields and are
/// never mutated independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Hours offset from the forecast start (0 = first hour)
    pub hour_offset: usize,
    /// Wall-clock local time of this hour
    pub local_time: NaiveDateTime,
    /// Cloud cover percentage, conceptually 0-100 but not clamped on input.
    /// Lower is better.
    pub cloud_cover_pct: f64,
    /// Seeing in arc-seconds. Lower is better (tighter stars).
    pub seeing: Arcseconds,
    /// Extinction index, 0-30+ typical. Lower is better.
    pub transparency: f64,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Dew point in Celsius
    pub dew_point_c: f64,
    /// Relative humidity (0-100), derived from temperature and dew point
    pub humidity_pct: f64,
    /// Weighted quality score (0-100, unrounded). Higher is better.
    pub score: f64,
    /// Whether this hour clears the minimum imaging thresholds
    pub imageable: bool,
}

/// A consecutive stretch of imageable hours.
///
/// Longer windows are better for deep-sky imaging: setup overhead is fixed
/// and integration time scales with the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagingWindow {
    /// Local time of the first hour in the window
    pub start_hour: NaiveDateTime,
    /// Local time of the last hour in the window
    pub end_hour: NaiveDateTime,
    /// Duration in hours
    pub length: usize,
    /// Rounded mean score of the member hours (0-100)
    pub avg_quality: u32,
}

/// Complete analysis of one night's imaging potential, including the
/// go/no-go decision and its reasoning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightAnalysis {
    /// The analyzed hours, echoed through unmodified
    pub hours: Vec<HourlyForecast>,
    /// Mean cloud cover across the night (%)
    pub avg_cloud_cover: f64,
    /// Mean transparency across the night (lower = better)
    pub avg_transparency: f64,
    /// Minimum temperature during the night (°C)
    pub min_temp_c: f64,
    /// Maximum humidity during the night (%)
    pub max_humidity_pct: f64,
    /// Best consecutive imaging window, if any run reached 3 hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_window: Option<ImagingWindow>,
    /// Final decision score (0-100); 0 when no window or vetoed
    pub score: u32,
    /// Whether to notify (needs a 6+ hour window and score >= 60)
    pub should_notify: bool,
    /// Human-readable explanation of the decision
    pub reason: String,
    /// Whether a deal-breaker condition (rain likelihood) was detected
    pub has_deal_breaker: bool,
    /// Explanation of the deal-breaker, empty when none fired
    pub deal_breaker_reason: String,
}
