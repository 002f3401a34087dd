//! Parsers for raw forecast payloads.
//!
//! The upstream weather service answers with one JSON document per fetch:
//! scalar metadata (start times, location, credit counter) plus one nullable
//! data-point array per weather model and quantity. This module owns that
//! wire model and nothing else; turning it into scored hours is the
//! normalizer's job.
//!
//! # Example
//!
//! ```no_run
//! use nightcast::parsing::parse_forecast_file;
//! use std::path::Path;
//!
//! let response = parse_forecast_file(Path::new("forecast.json"))
//!     .expect("Failed to parse forecast");
//! ```

pub mod forecast_parser;


pub use forecast_parser::{
    parse_forecast_file, parse_forecast_str, CloudSource, DataPoint, DataPointValue,
    ForecastResponse,
};
