//! Data types produced by the scoring pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The four fixed recommendation categories.
///
/// Declaration order is load-bearing: it is the order activities are scored,
/// displayed, and scanned during recommendation selection (earlier wins
/// ties). `Ord` derives from it, so `BTreeMap<Activity, _>` iterates in this
/// order too.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Activity {
    Surfing,
    Skiing,
    #[serde(rename = "Outdoor sightseeing")]
    OutdoorSightseeing,
    #[serde(rename = "Indoor sightseeing")]
    IndoorSightseeing,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Surfing,
        Activity::Skiing,
        Activity::OutdoorSightseeing,
        Activity::IndoorSightseeing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Activity::Surfing => "Surfing",
            Activity::Skiing => "Skiing",
            Activity::OutdoorSightseeing => "Outdoor sightseeing",
            Activity::IndoorSightseeing => "Indoor sightseeing",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-activity scores for a single hour.
pub type ActivityScores = BTreeMap<Activity, f64>;

/// One forecast hour with its scores, in original chronological position.
#[derive(Debug, Clone, Serialize)]
pub struct HourScore {
    pub time: String,
    pub scores: ActivityScores,
}

/// One entry of an activity ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedHour {
    pub time: String,
    pub score: f64,
}

/// One entry of the final top-10 list, numbered from 1.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub time: String,
    pub score: f64,
}

/// The recommendation for one forecast payload.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityScoreResult {
    pub recommended_activity: Activity,
    pub top10: Vec<RankedEntry>,
}

/// Intermediate pipeline data, kept for result snapshots and diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDebug {
    pub hourly_scores: Vec<HourScore>,
    pub activity_rankings: BTreeMap<Activity, Vec<RankedHour>>,
    pub activity_top_avg: BTreeMap<Activity, f64>,
    pub adjusted_activity_top_avg: BTreeMap<Activity, f64>,
}

/// Full output of one scoring run. `result` is `None` only when the payload
/// had zero forecast hours.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringReport {
    pub result: Option<ActivityScoreResult>,
    pub debug: ScoreDebug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_names_match_display_labels() {
        assert_eq!(Activity::Surfing.to_string(), "Surfing");
        assert_eq!(
            Activity::OutdoorSightseeing.to_string(),
            "Outdoor sightseeing"
        );
    }

    #[test]
    fn test_activity_serializes_to_label() {
        let json = serde_json::to_string(&Activity::IndoorSightseeing).unwrap();
        assert_eq!(json, r#""Indoor sightseeing""#);
    }

    #[test]
    fn test_btreemap_iterates_in_declaration_order() {
        let mut map = ActivityScores::new();
        for act in Activity::ALL {
            map.insert(act, 0.0);
        }
        let order: Vec<_> = map.keys().copied().collect();
        assert_eq!(order.as_slice(), Activity::ALL.as_slice());
    }
}
