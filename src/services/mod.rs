//! Analysis services over normalized forecast hours.
//!
//! The pipeline runs left to right: [`normalizer`] turns a parsed payload
//! into scored [`HourlyForecast`](crate::models::HourlyForecast) records,
//! [`night`] optionally narrows them to a dark period, and [`analysis`]
//! produces the final decision record using [`windows`] for the
//! consecutive-run search. [`report`] formats results for delivery and
//! [`failure_log`] throttles repeated fetch-failure logging.

pub mod analysis;
pub mod failure_log;
pub mod night;
pub mod normalizer;
pub mod report;
pub mod scoring;
pub mod windows;

#[cfg(test)]
mod normalizer_tests;

pub use analysis::analyze_night;
pub use failure_log::FailureLog;
pub use night::night_hours;
pub use normalizer::normalize_forecast;
pub use report::{
    astrospheric_url, clear_outside_image_url, clear_outside_url, format_night_summary, Rating,
};
pub use windows::find_best_window;
