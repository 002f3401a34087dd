//! Summary formatting for the notification sink.
//!
//! Everything here is pure string construction: the score-to-rating ladder,
//! the MarkdownV2-safe night summary block, and the forecast-site links that
//! accompany a notification. Message delivery itself lives outside this
//! crate.

use std::fmt;

use chrono::NaiveDateTime;

use crate::models::NightAnalysis;

/// Coarse quality bin over a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Rating::Excellent
        } else if score >= 60 {
            Rating::Good
        } else if score >= 40 {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }

    /// Traffic-light marker for compact message headers.
    pub fn emoji(&self) -> &'static str {
        match self {
            Rating::Excellent => "🟢",
            Rating::Good => "🟡",
            Rating::Fair => "🟠",
            Rating::Poor => "🔴",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

/// One-word sky description from mean cloud cover.
pub fn cloud_description(avg_cloud_cover: f64) -> &'static str {
    if avg_cloud_cover < 15.0 {
        "Clear"
    } else if avg_cloud_cover < 30.0 {
        "Mostly clear"
    } else if avg_cloud_cover < 50.0 {
        "Partly cloudy"
    } else {
        "Cloudy"
    }
}

/// Characters Telegram's MarkdownV2 dialect requires escaping.
const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Backslash-escape text for MarkdownV2.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 12-hour clock without a leading zero, e.g. "9:30 PM".
fn format_time(t: NaiveDateTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// Display rounding with ties toward +∞, so -3.5 renders as -3.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Build the MarkdownV2 night summary block.
///
/// Up to three lines joined by newlines: the best-window line (omitted when
/// no window was found), the conditions line, and the deal-breaker warning
/// (omitted when none fired).
pub fn format_night_summary(night: &NightAnalysis) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(window) = &night.best_window {
        lines.push(format!(
            "*Clear {} \\- {}* \\({} hours\\)",
            escape_markdown_v2(&format_time(window.start_hour)),
            escape_markdown_v2(&format_time(window.end_hour)),
            window.length
        ));
    }

    lines.push(format!(
        "☁️ {} \\(~{}%\\) \\| 🌡️ Low {}°C",
        cloud_description(night.avg_cloud_cover),
        round_half_up(night.avg_cloud_cover),
        round_half_up(night.min_temp_c)
    ));

    if night.has_deal_breaker {
        lines.push(format!(
            "⚠️ {}",
            escape_markdown_v2(&night.deal_breaker_reason)
        ));
    }

    lines.join("\n")
}

/// Clear Outside forecast page. The site expects coordinates rounded to two
/// decimal places.
pub fn clear_outside_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://clearoutside.com/forecast/{:.2}/{:.2}",
        latitude, longitude
    )
}

/// Clear Outside's rendered forecast strip, same coordinate rounding.
pub fn clear_outside_image_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://clearoutside.com/forecast_image_large/{:.2}/{:.2}/forecast.png",
        latitude, longitude
    )
}

/// Astrospheric dashboard, coordinates passed through unrounded.
pub fn astrospheric_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://www.astrospheric.com/?Lat={}&Lon={}",
        latitude, longitude
    )
}
