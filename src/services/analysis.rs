//! Night analysis: deal-breaker veto, final score, go/no-go decision.

use log::{debug, info};

use crate::models::{HourlyForecast, ImagingWindow, NightAnalysis};
use crate::services::windows::find_best_window;

/// Rain-likely hours at or above this count veto the whole night.
const RAIN_HOURS_VETO: usize = 3;

/// Notification requires at least this many consecutive hours...
const MIN_NOTIFY_HOURS: usize = 6;
/// ...and at least this final score.
const MIN_NOTIFY_SCORE: u32 = 60;

/// Dew point depression (temperature minus dew point). Small values mean
/// near-saturated air.
fn dew_point_depression(hour: &HourlyForecast) -> f64 {
    hour.temperature_c - hour.dew_point_c
}

/// Check if rain is likely for a given hour, from cloud cover plus
/// saturation indicators.
pub(crate) fn is_rain_likely(hour: &HourlyForecast) -> bool {
    // Full overcast = definite rain
    if hour.cloud_cover_pct >= 100.0 {
        return true;
    }
    // High clouds + near-saturation
    if hour.cloud_cover_pct >= 80.0 && dew_point_depression(hour) < 3.0 {
        return true;
    }
    // Very high clouds + high humidity = rain or drizzle
    if hour.cloud_cover_pct >= 70.0 && hour.humidity_pct > 95.0 {
        return true;
    }
    false
}

/// Scan the whole night for deal-breakers that veto imaging outright.
///
/// Fog needs no rule of its own: it shows up as low cloud in the cloud-cover
/// series and the window search handles those hours.
pub(crate) fn detect_deal_breaker(hours: &[HourlyForecast]) -> Option<String> {
    let rain_hours = hours.iter().filter(|h| is_rain_likely(h)).count();
    if rain_hours >= RAIN_HOURS_VETO {
        return Some(format!(
            "Rain likely ({} hours with rain indicators)",
            rain_hours
        ));
    }
    None
}

struct Decision {
    score: u32,
    should_notify: bool,
    reason: String,
}

/// Final score and notification decision from the best window.
///
/// The length bonus is non-linear: 6+ hour windows are rewarded heavily
/// because setup overhead makes short sessions barely worth it.
fn decide(best_window: Option<&ImagingWindow>) -> Decision {
    let window = match best_window {
        Some(w) => w,
        None => {
            return Decision {
                score: 0,
                should_notify: false,
                reason: "No consecutive clear hours found".to_string(),
            }
        }
    };

    let length = window.length;
    let length_score = if length >= 8 {
        100.0
    } else if length >= 6 {
        80.0 + (length - 6) as f64 * 10.0 // 80-100
    } else if length >= 4 {
        50.0 + (length - 4) as f64 * 15.0 // 50-80
    } else {
        length as f64 * 15.0 // 0-45
    };

    // 60% length, 40% quality
    let score = (length_score * 0.60 + f64::from(window.avg_quality) * 0.40).round() as u32;
    let should_notify = length >= MIN_NOTIFY_HOURS && score >= MIN_NOTIFY_SCORE;

    let reason = if should_notify {
        format!(
            "{} consecutive clear hours with {}% quality",
            length, window.avg_quality
        )
    } else if length < MIN_NOTIFY_HOURS {
        format!("Only {} consecutive hours (need 6+)", length)
    } else {
        format!("Quality too low: {}/100", score)
    };

    Decision {
        score,
        should_notify,
        reason,
    }
}

/// Analyze a night of scored hours and produce the full decision record.
///
/// Returns `None` for an empty input. A deal-breaker bypasses the score
/// computation entirely (score 0, no notification, the veto as the reason)
/// but the best window and the summary statistics are still reported.
pub fn analyze_night(hours: Vec<HourlyForecast>) -> Option<NightAnalysis> {
    if hours.is_empty() {
        return None;
    }

    let deal_breaker = detect_deal_breaker(&hours);
    let best_window = find_best_window(&hours);

    let decision = match &deal_breaker {
        Some(reason) => {
            debug!("Night vetoed: {}", reason);
            Decision {
                score: 0,
                should_notify: false,
                reason: reason.clone(),
            }
        }
        None => decide(best_window.as_ref()),
    };

    // Summary stats over the whole input, not just the window
    let n = hours.len() as f64;
    let avg_cloud_cover = hours.iter().map(|h| h.cloud_cover_pct).sum::<f64>() / n;
    let avg_transparency = hours.iter().map(|h| h.transparency).sum::<f64>() / n;
    let min_temp_c = hours
        .iter()
        .map(|h| h.temperature_c)
        .fold(f64::INFINITY, f64::min);
    let max_humidity_pct = hours
        .iter()
        .map(|h| h.humidity_pct)
        .fold(f64::NEG_INFINITY, f64::max);

    info!(
        "Analyzed {} hours: score {}, notify {}",
        hours.len(),
        decision.score,
        decision.should_notify
    );

    let has_deal_breaker = deal_breaker.is_some();
    Some(NightAnalysis {
        hours,
        avg_cloud_cover,
        avg_transparency,
        min_temp_c,
        max_humidity_pct,
        best_window,
        score: decision.score,
        should_notify: decision.should_notify,
        reason: decision.reason,
        has_deal_breaker,
        deal_breaker_reason: deal_breaker.unwrap_or_default(),
    })
}
