//! Ranks scored hours per activity and computes the top-10 aggregate.

use std::collections::BTreeMap;

use crate::scoring::types::{Activity, HourScore, RankedHour};
use crate::scoring::utility::mean;

/// Number of leading ranked hours that feed the aggregate metric and the
/// final recommendation list.
pub const TOP_N: usize = 10;

/// Builds one ranking per activity: score descending, ties broken by
/// timestamp ascending (plain string order, timestamps are never parsed).
///
/// The activity set is taken from the first hour's score keys, so zero hours
/// produce an empty map.
pub fn build_rankings(hours: &[HourScore]) -> BTreeMap<Activity, Vec<RankedHour>> {
    let mut rankings = BTreeMap::new();

    let Some(first) = hours.first() else {
        return rankings;
    };

    for &act in first.scores.keys() {
        let mut ranked: Vec<RankedHour> = hours
            .iter()
            .map(|h| RankedHour {
                time: h.time.clone(),
                score: h.scores.get(&act).copied().unwrap_or(0.0),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.time.cmp(&b.time))
        });

        rankings.insert(act, ranked);
    }

    rankings
}

/// Mean score of each activity's first [`TOP_N`] ranked hours; 0 when an
/// activity has no ranked hours at all.
pub fn top_averages(
    rankings: &BTreeMap<Activity, Vec<RankedHour>>,
) -> BTreeMap<Activity, f64> {
    rankings
        .iter()
        .map(|(&act, ranked)| {
            let top: Vec<f64> = ranked.iter().take(TOP_N).map(|h| h.score).collect();
            (act, mean(&top))
        })
        .collect()
}
