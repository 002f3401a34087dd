//! Dark-period interval used to narrow a forecast to astronomical night.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Astronomical-night interval in the forecast's local time scale.
///
/// The twilight times themselves come from an external sun-position
/// calculator; this crate only consumes the resulting interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DarkPeriod {
    /// Start of astronomical night
    pub start: NaiveDateTime,
    /// End of astronomical night (dawn)
    pub end: NaiveDateTime,
}

impl DarkPeriod {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidPeriod(format!(
                "end {} is not after start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Check if a given instant lies inside this interval (inclusive start, exclusive end).
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }

    /// Length of the interval in hours.
    pub fn duration(&self) -> qtty::Hours {
        qtty::Hours::new((self.end - self.start).num_minutes() as f64 / 60.0)
    }
}
