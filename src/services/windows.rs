//! Consecutive-window search over scored hours.

use log::debug;

use crate::models::{HourlyForecast, ImagingWindow};

/// Runs shorter than this never become candidate windows.
const MIN_WINDOW_HOURS: usize = 3;

/// Candidate run during the scan; quality stays unrounded for ranking.
struct Candidate<'a> {
    hours: &'a [HourlyForecast],
    avg_quality: f64,
}

/// Find the best consecutive window of imageable hours.
///
/// One left-to-right scan collects maximal runs of `imageable` hours (a
/// virtual non-imageable hour past the end closes a trailing run), dropping
/// runs under 3 hours. "Consecutive" means adjacent in the input sequence;
/// hour offsets are not inspected, so gaps the caller left in the sequence
/// are invisible here.
///
/// Ranking is by length, then by unrounded mean score, and the sort is
/// stable, so among full ties the earliest run wins. The winner's
/// `avg_quality` is rounded only at this point.
pub fn find_best_window(hours: &[HourlyForecast]) -> Option<ImagingWindow> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut current_start: Option<usize> = None;

    for i in 0..=hours.len() {
        let imageable = i < hours.len() && hours[i].imageable;

        match (imageable, current_start) {
            (true, None) => current_start = Some(i),
            (false, Some(start)) => {
                let run = &hours[start..i];
                if run.len() >= MIN_WINDOW_HOURS {
                    let avg_quality =
                        run.iter().map(|h| h.score).sum::<f64>() / run.len() as f64;
                    candidates.push(Candidate {
                        hours: run,
                        avg_quality,
                    });
                }
                current_start = None;
            }
            _ => {}
        }
    }

    if candidates.is_empty() {
        return None;
    }

    // Stable sort: length (primary), unrounded quality (secondary)
    candidates.sort_by(|a, b| {
        b.hours.len().cmp(&a.hours.len()).then_with(|| {
            b.avg_quality
                .partial_cmp(&a.avg_quality)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    let best = &candidates[0];
    debug!(
        "Best window: {} hours from {}, avg quality {:.1}",
        best.hours.len(),
        best.hours[0].local_time,
        best.avg_quality
    );

    Some(ImagingWindow {
        start_hour: best.hours[0].local_time,
        end_hour: best.hours[best.hours.len() - 1].local_time,
        length: best.hours.len(),
        avg_quality: best.avg_quality.round() as u32,
    })
}
