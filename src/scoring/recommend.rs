//! Turns per-activity aggregates into the final recommendation.

use std::collections::BTreeMap;

use crate::scoring::ranking::TOP_N;
use crate::scoring::types::{Activity, ActivityScoreResult, RankedEntry, RankedHour};

/// Fixed reduction applied to the Outdoor sightseeing top-10 average before
/// activities are compared. The value is tuning policy inherited from the
/// production rule set; change it here, nowhere else.
pub const OUTDOOR_TOP_AVG_PENALTY: f64 = 3.0;

/// Copies the aggregates, reducing only the Outdoor sightseeing entry by
/// [`OUTDOOR_TOP_AVG_PENALTY`], floored at 0.
pub fn adjust_top_averages(top_avg: &BTreeMap<Activity, f64>) -> BTreeMap<Activity, f64> {
    let mut adjusted = top_avg.clone();
    if let Some(v) = adjusted.get_mut(&Activity::OutdoorSightseeing) {
        *v = (*v - OUTDOOR_TOP_AVG_PENALTY).max(0.0);
    }
    adjusted
}

/// Picks the activity with the highest adjusted aggregate and returns its
/// top-10 hours carrying their original, unadjusted scores.
///
/// Activities are scanned in their fixed declaration order and only a
/// strictly higher aggregate displaces the current best, so ties keep the
/// earlier activity. With no known activities (zero forecast hours) there is
/// nothing to recommend and the result is `None`.
pub fn select(
    rankings: &BTreeMap<Activity, Vec<RankedHour>>,
    adjusted_top_avg: &BTreeMap<Activity, f64>,
) -> Option<ActivityScoreResult> {
    let avg_of = |act: Activity| adjusted_top_avg.get(&act).copied().unwrap_or(0.0);

    let mut activities = rankings.keys().copied();
    let mut best = activities.next()?;
    for act in activities {
        if avg_of(act) > avg_of(best) {
            best = act;
        }
    }

    let top10 = rankings
        .get(&best)
        .map(|ranked| {
            ranked
                .iter()
                .take(TOP_N)
                .enumerate()
                .map(|(idx, h)| RankedEntry {
                    rank: idx + 1,
                    time: h.time.clone(),
                    score: h.score,
                })
                .collect()
        })
        .unwrap_or_default();

    Some(ActivityScoreResult {
        recommended_activity: best,
        top10,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avgs(surfing: f64, skiing: f64, outdoor: f64, indoor: f64) -> BTreeMap<Activity, f64> {
        BTreeMap::from([
            (Activity::Surfing, surfing),
            (Activity::Skiing, skiing),
            (Activity::OutdoorSightseeing, outdoor),
            (Activity::IndoorSightseeing, indoor),
        ])
    }

    fn rankings_with_hours(per_activity: usize) -> BTreeMap<Activity, Vec<RankedHour>> {
        Activity::ALL
            .into_iter()
            .map(|act| {
                let ranked = (0..per_activity)
                    .map(|i| RankedHour {
                        time: format!("2026-07-01T{i:02}:00"),
                        score: (per_activity - i) as f64,
                    })
                    .collect();
                (act, ranked)
            })
            .collect()
    }

    #[test]
    fn test_adjustment_only_touches_outdoor_sightseeing() {
        let adjusted = adjust_top_averages(&avgs(5.0, 4.0, 7.5, 3.0));

        assert_eq!(adjusted[&Activity::OutdoorSightseeing], 4.5);
        assert_eq!(adjusted[&Activity::Surfing], 5.0);
        assert_eq!(adjusted[&Activity::Skiing], 4.0);
        assert_eq!(adjusted[&Activity::IndoorSightseeing], 3.0);
    }

    #[test]
    fn test_adjustment_floors_at_zero() {
        let adjusted = adjust_top_averages(&avgs(0.0, 0.0, 2.0, 0.0));
        assert_eq!(adjusted[&Activity::OutdoorSightseeing], 0.0);
    }

    #[test]
    fn test_selects_highest_adjusted_average() {
        let rankings = rankings_with_hours(3);
        let result = select(&rankings, &avgs(4.0, 8.0, 6.0, 1.0)).unwrap();
        assert_eq!(result.recommended_activity, Activity::Skiing);
    }

    #[test]
    fn test_ties_keep_the_earlier_activity() {
        let rankings = rankings_with_hours(2);
        let result = select(&rankings, &avgs(5.0, 5.0, 5.0, 5.0)).unwrap();
        assert_eq!(result.recommended_activity, Activity::Surfing);
    }

    #[test]
    fn test_top10_is_truncated_ranked_and_unadjusted() {
        let rankings = rankings_with_hours(12);
        let result = select(&rankings, &avgs(0.0, 0.0, 9.0, 0.0)).unwrap();

        assert_eq!(result.recommended_activity, Activity::OutdoorSightseeing);
        assert_eq!(result.top10.len(), 10);
        assert_eq!(result.top10[0].rank, 1);
        assert_eq!(result.top10[9].rank, 10);
        // original ranking scores, not the adjusted aggregate
        assert_eq!(result.top10[0].score, 12.0);
    }

    #[test]
    fn test_no_activities_means_no_recommendation() {
        let rankings = BTreeMap::new();
        assert!(select(&rankings, &BTreeMap::new()).is_none());
    }
}
