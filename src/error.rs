//! Error types for nightcast

use thiserror::Error;

/// Result type for nightcast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during forecast normalization and analysis
#[derive(Error, Debug)]
pub enum Error {
    /// All prioritized cloud-cover model arrays were absent from the payload.
    /// Cloud cover drives the hour loop, so there is nothing to analyze.
    #[error("No cloud cover data available")]
    NoCloudCoverData,

    /// Payload parsed as JSON but violates the forecast model
    #[error("Invalid forecast: {0}")]
    InvalidForecast(String),

    /// Dark period with a non-positive duration
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
