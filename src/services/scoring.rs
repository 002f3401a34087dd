//! Per-hour quality scoring.
//!
//! Four independent piecewise curves (cloud cover, seeing, transparency,
//! humidity) each map a raw reading to 0-100, combined into one weighted
//! composite per hour. The weights favor cloud cover heavily: clouds block
//! all photon collection, while the other factors only degrade the frames.

use qtty::Arcseconds;

/// Composite weights. Must sum to 1.0.
const CLOUD_WEIGHT: f64 = 0.50;
const SEEING_WEIGHT: f64 = 0.30;
const TRANSPARENCY_WEIGHT: f64 = 0.15;
const HUMIDITY_WEIGHT: f64 = 0.05;

/// Imageability gate: tolerate thin clouds, reject only saturated air.
const MAX_IMAGEABLE_CLOUD_PCT: f64 = 40.0;
const MAX_IMAGEABLE_HUMIDITY_PCT: f64 = 98.0;

/// Score cloud cover (0-100, inverted - fewer clouds = higher score).
/// Non-linear: heavily penalizes high cloud cover.
pub fn score_cloud_cover(cloud_pct: f64) -> f64 {
    if cloud_pct >= 70.0 {
        0.0 // Unusable
    } else if cloud_pct >= 50.0 {
        30.0 // Poor
    } else if cloud_pct >= 30.0 {
        60.0 // Fair
    } else if cloud_pct >= 15.0 {
        80.0 // Good
    } else {
        100.0 - cloud_pct // Excellent
    }
}

/// Score seeing (0-100). Lower arc-seconds = tighter stars = higher score.
/// 1" is excellent, 2" good, 3" average, 4"+ poor.
pub fn score_seeing(seeing: Arcseconds) -> f64 {
    let arcsec = seeing.value();
    if arcsec <= 1.0 {
        100.0
    } else if arcsec <= 1.5 {
        90.0
    } else if arcsec <= 2.0 {
        75.0
    } else if arcsec <= 2.5 {
        60.0
    } else if arcsec <= 3.0 {
        40.0
    } else if arcsec <= 4.0 {
        20.0
    } else {
        0.0
    }
}

/// Score transparency (0-100). The extinction index is lower-is-better,
/// roughly 0-30 where values near 0 are excellent.
pub fn score_transparency(index: f64) -> f64 {
    if index <= 5.0 {
        100.0
    } else if index <= 10.0 {
        85.0
    } else if index <= 15.0 {
        65.0
    } else if index <= 20.0 {
        40.0
    } else if index <= 25.0 {
        20.0
    } else {
        0.0
    }
}

/// Score humidity (0-100, inverted). Mostly a dew-formation concern, so the
/// penalty stays gentle until the air approaches saturation.
pub fn score_humidity(humidity_pct: f64) -> f64 {
    if humidity_pct >= 98.0 {
        0.0 // Dew certain
    } else if humidity_pct >= 90.0 {
        50.0 // High risk
    } else if humidity_pct >= 80.0 {
        70.0 // Moderate
    } else {
        100.0 - humidity_pct * 0.3
    }
}

/// Weighted composite score for one hour (0-100, unrounded).
pub fn score_hour(cloud_pct: f64, seeing: Arcseconds, transparency: f64, humidity_pct: f64) -> f64 {
    score_cloud_cover(cloud_pct) * CLOUD_WEIGHT
        + score_seeing(seeing) * SEEING_WEIGHT
        + score_transparency(transparency) * TRANSPARENCY_WEIGHT
        + score_humidity(humidity_pct) * HUMIDITY_WEIGHT
}

/// Check if an hour meets the minimum thresholds for imaging.
///
/// A coarse gate, independent of the composite score: an hour can pass it
/// and still score poorly, while cloud cover over 40% fails it no matter
/// how good the rest of the sky is.
pub fn is_imageable(cloud_pct: f64, humidity_pct: f64) -> bool {
    cloud_pct <= MAX_IMAGEABLE_CLOUD_PCT && humidity_pct < MAX_IMAGEABLE_HUMIDITY_PCT
}

/// Convert Kelvin to Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Relative humidity (0-100) from temperature and dew point in Celsius,
/// via the Magnus approximation. This is the canonical humidity source;
/// no raw humidity reading from the upstream is consumed.
pub fn relative_humidity(temperature_c: f64, dew_point_c: f64) -> f64 {
    const A: f64 = 17.27;
    const B: f64 = 237.7;

    let alpha_t = (A * temperature_c) / (B + temperature_c);
    let alpha_td = (A * dew_point_c) / (B + dew_point_c);
    let rh = 100.0 * (alpha_td - alpha_t).exp();

    rh.clamp(0.0, 100.0)
}
