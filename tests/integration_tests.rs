use activity_advisor::models::{ForecastResponse, SiteMeta};
use activity_advisor::scoring::{Activity, score_hourly_activities};

fn alpine_report() -> activity_advisor::scoring::ScoringReport {
    let forecast: ForecastResponse =
        serde_json::from_str(include_str!("fixtures/forecast_alpine.json"))
            .expect("Failed to parse fixture");
    let meta = SiteMeta {
        latitude: forecast.latitude,
        longitude: forecast.longitude,
        elevation: forecast.elevation.unwrap_or(0.0),
    };
    score_hourly_activities(&forecast.hourly, &meta)
}

#[test]
fn test_full_pipeline_recommends_skiing_for_alpine_winter() {
    let report = alpine_report();
    let result = report.result.expect("12-hour payload must yield a result");

    assert_eq!(result.recommended_activity, Activity::Skiing);
    assert_eq!(result.top10.len(), 10);
    assert_eq!(result.top10[0].rank, 1);

    // four 9.5 hours; the chronologically earliest of them leads
    assert_eq!(result.top10[0].time, "2026-01-10T00:00");
    assert_eq!(result.top10[0].score, 9.5);

    // top 10 skiing scores: 4 x 9.5, 5 x 9.0, 1 x 4.5 -> mean 8.75
    assert_eq!(report.debug.activity_top_avg[&Activity::Skiing], 8.75);
}

#[test]
fn test_rankings_are_sorted_and_tie_broken_by_time() {
    let report = alpine_report();

    for (act, ranked) in &report.debug.activity_rankings {
        assert_eq!(ranked.len(), 12, "every hour ranked for {act}");
        for pair in ranked.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{act}: scores must be non-increasing"
            );
            if pair[0].score == pair[1].score {
                assert!(
                    pair[0].time <= pair[1].time,
                    "{act}: equal scores must be in chronological order"
                );
            }
        }
    }
}

#[test]
fn test_adjustment_only_penalizes_outdoor_sightseeing() {
    let report = alpine_report();
    let original = &report.debug.activity_top_avg;
    let adjusted = &report.debug.adjusted_activity_top_avg;

    for act in Activity::ALL {
        if act == Activity::OutdoorSightseeing {
            assert_eq!(adjusted[&act], (original[&act] - 3.0).max(0.0));
        } else {
            assert_eq!(adjusted[&act], original[&act]);
        }
    }
}

#[test]
fn test_all_scores_are_non_negative() {
    let report = alpine_report();

    for hour in &report.debug.hourly_scores {
        assert_eq!(hour.scores.len(), 4);
        for (act, score) in &hour.scores {
            assert!(*score >= 0.0, "{act} at {} must be >= 0", hour.time);
        }
    }
}
