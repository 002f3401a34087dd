use anyhow::Context;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Raw JSON structure for one hour sample inside a forecast array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(rename = "Value")]
    pub value: DataPointValue,
    /// Hours offset from the forecast start (0 = first hour)
    #[serde(rename = "HourOffset")]
    pub hour_offset: i64,
}

/// Raw JSON structure for a sample value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPointValue {
    /// Hex color the upstream uses to visualize the value
    #[serde(rename = "ValueColor")]
    pub value_color: String,
    /// The numeric reading for this hour
    #[serde(rename = "ActualValue")]
    pub actual_value: f64,
}

/// Raw forecast payload as served by the weather API.
///
/// Cloud cover arrives from up to three weather models, tried in resolution
/// order: RDPS (Canadian regional), NAM (US mesoscale), GFS (global). Seeing
/// is in arc-seconds and transparency is an extinction index, both
/// lower-is-better. Temperature and dew point are in Kelvin.
///
/// Every array may be null or missing; unknown payload fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Local time when the forecast starts (ISO 8601, no offset)
    #[serde(rename = "LocalStartTime")]
    pub local_start_time: String,
    /// UTC time when the forecast starts
    #[serde(rename = "UTCStartTime")]
    pub utc_start_time: String,
    /// IANA timezone identifier, e.g. "America/Los_Angeles"
    #[serde(rename = "TimeZone")]
    pub time_zone: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// API credits consumed today (quota bookkeeping, echoed through)
    #[serde(rename = "APICreditUsedToday", default)]
    pub api_credit_used_today: f64,

    #[serde(rename = "RDPS_CloudCover", default)]
    pub rdps_cloud_cover: Option<Vec<DataPoint>>,
    #[serde(rename = "NAM_CloudCover", default)]
    pub nam_cloud_cover: Option<Vec<DataPoint>>,
    #[serde(rename = "GFS_CloudCover", default)]
    pub gfs_cloud_cover: Option<Vec<DataPoint>>,
    /// Astronomical seeing in arc-seconds
    #[serde(rename = "Astrospheric_Seeing", default)]
    pub seeing: Option<Vec<DataPoint>>,
    /// Atmospheric transparency / extinction index
    #[serde(rename = "Astrospheric_Transparency", default)]
    pub transparency: Option<Vec<DataPoint>>,
    /// Temperature in Kelvin
    #[serde(rename = "RDPS_Temperature", default)]
    pub temperature: Option<Vec<DataPoint>>,
    /// Dew point in Kelvin
    #[serde(rename = "RDPS_DewPoint", default)]
    pub dew_point: Option<Vec<DataPoint>>,
}

/// Weather model that supplied the cloud-cover series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudSource {
    Rdps,
    Nam,
    Gfs,
}

impl fmt::Display for CloudSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudSource::Rdps => write!(f, "RDPS"),
            CloudSource::Nam => write!(f, "NAM"),
            CloudSource::Gfs => write!(f, "GFS"),
        }
    }
}

impl ForecastResponse {
    /// First available cloud-cover array in model priority order.
    ///
    /// A present-but-empty array still wins over a lower-priority model; only
    /// null/missing arrays are skipped. Returns `None` when all three models
    /// are absent.
    pub fn cloud_cover(&self) -> Option<(CloudSource, &[DataPoint])> {
        if let Some(points) = self.rdps_cloud_cover.as_deref() {
            return Some((CloudSource::Rdps, points));
        }
        if let Some(points) = self.nam_cloud_cover.as_deref() {
            return Some((CloudSource::Nam, points));
        }
        if let Some(points) = self.gfs_cloud_cover.as_deref() {
            return Some((CloudSource::Gfs, points));
        }
        None
    }

    /// Wall-clock start of the forecast, parsed from `LocalStartTime`.
    ///
    /// The upstream emits local time without a UTC offset. A redundant
    /// trailing offset or `Z` suffix is dropped rather than rejected, since
    /// the wall-clock part is what positions the hourly samples.
    pub fn local_start(&self) -> Result<NaiveDateTime> {
        let raw = self.local_start_time.as_str();
        let wall_clock = match raw.find(&['Z', 'z', '+'][..]) {
            Some(idx) => &raw[..idx],
            // A '-' after the date part can only start a negative offset
            None => match raw.rfind('-') {
                Some(idx) if idx > 10 => &raw[..idx],
                _ => raw,
            },
        };

        NaiveDateTime::parse_from_str(wall_clock, "%Y-%m-%dT%H:%M:%S%.f").map_err(|e| {
            Error::InvalidForecast(format!("Unparseable LocalStartTime '{}': {}", raw, e))
        })
    }
}

/// Parse a forecast payload from a JSON string
pub fn parse_forecast_str(json_str: &str) -> Result<ForecastResponse> {
    let response: ForecastResponse = serde_json::from_str(json_str)?;
    Ok(response)
}

/// Parse a forecast payload from a JSON file
pub fn parse_forecast_file(path: &Path) -> anyhow::Result<ForecastResponse> {
    let json_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read forecast file: {}", path.display()))?;

    parse_forecast_str(&json_content)
        .with_context(|| format!("Failed to parse forecast file: {}", path.display()))
}
