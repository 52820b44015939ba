//! Activity scoring and recommendation.
//!
//! This module is the pure core of the crate: it turns an hourly forecast
//! block into per-activity rankings, top-10 averages, and a single
//! recommended activity. It performs no I/O and holds no state between
//! invocations; scoring the same payload twice yields identical results.

pub mod hourly;
pub mod ranking;
pub mod recommend;
pub mod rules;
pub mod types;
pub mod utility;

pub use types::{
    Activity, ActivityScoreResult, HourScore, RankedEntry, RankedHour, ScoreDebug, ScoringReport,
};

use crate::models::{ForecastHourly, SiteMeta};
use hourly::HourlyReading;

/// Scores every forecast hour, ranks them per activity, and selects a
/// recommendation.
///
/// The loop bound is `hourly.time`; every other series is resolved through
/// [`HourlyReading::resolve`] so missing or short series degrade to defaults
/// instead of failing. With zero forecast hours the report carries empty
/// rankings and `result` is `None`.
pub fn score_hourly_activities(hourly: &ForecastHourly, meta: &SiteMeta) -> ScoringReport {
    let mut hourly_scores = Vec::with_capacity(hourly.time.len());

    for (idx, time) in hourly.time.iter().enumerate() {
        let reading = HourlyReading::resolve(hourly, idx);
        let scores = rules::score_hour(&reading, meta.elevation);
        hourly_scores.push(HourScore {
            time: time.clone(),
            scores,
        });
    }

    let activity_rankings = ranking::build_rankings(&hourly_scores);
    let activity_top_avg = ranking::top_averages(&activity_rankings);
    let adjusted_activity_top_avg = recommend::adjust_top_averages(&activity_top_avg);
    let result = recommend::select(&activity_rankings, &adjusted_activity_top_avg);

    ScoringReport {
        result,
        debug: ScoreDebug {
            hourly_scores,
            activity_rankings,
            activity_top_avg,
            adjusted_activity_top_avg,
        },
    }
}
