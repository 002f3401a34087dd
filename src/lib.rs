//! # nightcast
//!
//! Night-quality scoring and consecutive-window analysis for amateur
//! astrophotography planning.
//!
//! Given an hourly weather forecast (cloud cover, seeing, transparency,
//! temperature, dew point), this crate scores each hour with a weighted
//! multi-factor formula, finds the best run of consecutive imageable hours,
//! applies a rain deal-breaker veto, and produces a go/no-go notification
//! decision with a human-readable reason.
//!
//! ## Pipeline
//!
//! - **Parse**: deserialize the raw forecast payload ([`parsing`])
//! - **Normalize**: one scored record per forecast hour, humidity derived
//!   via the Magnus formula ([`services::normalizer`])
//! - **Filter**: narrow to astronomical night, given a dark period from an
//!   external twilight calculator ([`services::night`])
//! - **Analyze**: deal-breaker scan, best-window search, final score and
//!   decision ([`services::analysis`])
//! - **Format**: MarkdownV2 summary block and forecast-site links for the
//!   notification sink ([`services::report`])
//!
//! The analysis core is pure and stateless: every invocation is a function
//! of its input hours, with no caching or cross-call state. The only
//! stateful piece is the injectable [`services::FailureLog`] that throttles
//! repeated fetch-failure logging.
//!
//! ## Example
//!
//! ```no_run
//! use nightcast::parsing::parse_forecast_file;
//! use nightcast::services::{analyze_night, normalize_forecast};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let response = parse_forecast_file(Path::new("forecast.json"))?;
//! let hours = normalize_forecast(&response)?;
//! if let Some(night) = analyze_night(hours) {
//!     println!("{}: {}", night.score, night.reason);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use error::{Error, Result};
