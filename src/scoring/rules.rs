//! Per-hour rule tables for the four activities.
//!
//! Every rule is an independent additive bonus (one penalty for outdoor
//! sightseeing under heavy low cloud); no rule suppresses another. After all
//! rules run, each activity score is floored at 0.
//!
//! | Activity            | Condition → Bonus |
//! |---------------------|-------------------|
//! | Surfing             | temp > 22 → +3; cloud < 60 → +1; 10 ≤ wind ≤ 25 → +2; precip < 1 → +2; 20 ≤ gust ≤ 45 → +1; visibility ≥ 10 km → +0.5 |
//! | Skiing              | temp < 5 → +3; snowfall > 0 → +4; precip > 0 → +1; elevation ≥ 500 m → +1; visibility ≥ 10 km → +0.5 |
//! | Outdoor sightseeing | 10 ≤ temp ≤ 25 → +4; cloud < 50 → +2; wind < 20 → +1; precip == 0 → +2; visibility ≥ 15 km → +1; low cloud ≥ 50 → −1 |
//! | Indoor sightseeing  | cloud > 80 → +3; precip ≥ 1 → +3; gust ≥ 40 → +1; visibility ≤ 5 km → +1; temp ≤ 0 or ≥ 32 → +1 |

use crate::scoring::hourly::HourlyReading;
use crate::scoring::types::{Activity, ActivityScores};

/// Scores one resolved hour against all four activities.
///
/// An unknown temperature is NaN, and every temperature comparison below is
/// false for NaN, so those rules contribute nothing rather than erroring.
pub fn score_hour(r: &HourlyReading, elevation: f64) -> ActivityScores {
    let mut surfing: f64 = 0.0;
    let mut skiing: f64 = 0.0;
    let mut outdoor: f64 = 0.0;
    let mut indoor: f64 = 0.0;

    // Surfing: warm water weather with a usable breeze and little rain.
    if r.temperature > 22.0 {
        surfing += 3.0;
    }
    if r.cloud_cover < 60.0 {
        surfing += 1.0;
    }
    if r.wind_speed >= 10.0 && r.wind_speed <= 25.0 {
        surfing += 2.0;
    }
    if r.precipitation < 1.0 {
        surfing += 2.0;
    }
    if r.wind_gusts >= 20.0 && r.wind_gusts <= 45.0 {
        surfing += 1.0;
    }
    if r.visibility >= 10_000.0 {
        surfing += 0.5;
    }

    // Skiing: cold, and falling snow is the strongest signal.
    if r.temperature < 5.0 {
        skiing += 3.0;
    }
    if r.snowfall > 0.0 {
        skiing += 4.0;
    }
    if r.precipitation > 0.0 {
        skiing += 1.0;
    }
    if elevation >= 500.0 {
        skiing += 1.0;
    }
    if r.visibility >= 10_000.0 {
        skiing += 0.5;
    }

    // Outdoor sightseeing: mild, dry, calm, with a far horizon.
    if r.temperature >= 10.0 && r.temperature <= 25.0 {
        outdoor += 4.0;
    }
    if r.cloud_cover < 50.0 {
        outdoor += 2.0;
    }
    if r.wind_speed < 20.0 {
        outdoor += 1.0;
    }
    if r.precipitation == 0.0 {
        outdoor += 2.0;
    }
    if r.visibility >= 15_000.0 {
        outdoor += 1.0;
    }
    if r.cloud_cover_low >= 50.0 {
        outdoor -= 1.0;
    }

    // Indoor sightseeing: the worse it is outside, the better.
    if r.cloud_cover > 80.0 {
        indoor += 3.0;
    }
    if r.precipitation >= 1.0 {
        indoor += 3.0;
    }
    if r.wind_gusts >= 40.0 {
        indoor += 1.0;
    }
    if r.visibility <= 5_000.0 {
        indoor += 1.0;
    }
    if r.temperature <= 0.0 || r.temperature >= 32.0 {
        indoor += 1.0;
    }

    // Floor at 0; scores are always finite here.
    let mut scores = ActivityScores::new();
    scores.insert(Activity::Surfing, surfing.max(0.0));
    scores.insert(Activity::Skiing, skiing.max(0.0));
    scores.insert(Activity::OutdoorSightseeing, outdoor.max(0.0));
    scores.insert(Activity::IndoorSightseeing, indoor.max(0.0));

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> HourlyReading {
        HourlyReading {
            temperature: f64::NAN,
            visibility: 0.0,
            wind_speed: 0.0,
            cloud_cover: 100.0,
            precipitation: 0.0,
            snowfall: 0.0,
            cloud_cover_low: 100.0,
            wind_gusts: 0.0,
        }
    }

    #[test]
    fn test_hot_clear_light_wind_hour() {
        let r = HourlyReading {
            temperature: 25.0,
            cloud_cover: 30.0,
            cloud_cover_low: 30.0,
            wind_speed: 15.0,
            precipitation: 0.0,
            visibility: 12_000.0,
            wind_gusts: 25.0,
            snowfall: 0.0,
        };

        let scores = score_hour(&r, 0.0);

        assert_eq!(scores[&Activity::Surfing], 9.5);
        assert_eq!(scores[&Activity::OutdoorSightseeing], 9.0);
        assert_eq!(scores[&Activity::Skiing], 0.0);
        assert_eq!(scores[&Activity::IndoorSightseeing], 0.0);
    }

    #[test]
    fn test_cold_snowy_hour_at_elevation() {
        let r = HourlyReading {
            temperature: -2.0,
            snowfall: 5.0,
            precipitation: 2.0,
            visibility: 8_000.0,
            ..reading()
        };

        let scores = score_hour(&r, 800.0);

        // temp + snowfall + precip + elevation; visibility below 10 km
        assert_eq!(scores[&Activity::Skiing], 9.0);
        // cloud defaulted to 100 (+3), precip >= 1 (+3), temp <= 0 (+1)
        assert_eq!(scores[&Activity::IndoorSightseeing], 7.0);
        assert_eq!(scores[&Activity::OutdoorSightseeing], 0.0);
    }

    #[test]
    fn test_nan_temperature_earns_no_temperature_bonus() {
        let warm = score_hour(
            &HourlyReading {
                temperature: 25.0,
                ..reading()
            },
            0.0,
        );
        let unknown = score_hour(&reading(), 0.0);

        // Surfing loses only the temperature bonus
        assert_eq!(warm[&Activity::Surfing] - unknown[&Activity::Surfing], 3.0);
        // Indoor's extreme-temperature rule is also false for NaN:
        // overcast (+3) and zero visibility (+1) remain
        assert_eq!(unknown[&Activity::IndoorSightseeing], 4.0);
    }

    #[test]
    fn test_low_cloud_penalty_never_goes_negative() {
        let r = HourlyReading {
            temperature: 5.0,
            wind_speed: 30.0,
            precipitation: 0.5,
            cloud_cover: 90.0,
            cloud_cover_low: 90.0,
            visibility: 14_000.0,
            ..reading()
        };

        let scores = score_hour(&r, 0.0);

        // only the -1 low-cloud rule fires for outdoor; clamped to 0
        assert_eq!(scores[&Activity::OutdoorSightseeing], 0.0);
        assert!(scores.values().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_every_hour_scores_all_four_activities() {
        let scores = score_hour(&reading(), 0.0);
        assert_eq!(scores.len(), 4);
        let keys: Vec<_> = scores.keys().copied().collect();
        assert_eq!(keys.as_slice(), Activity::ALL.as_slice());
    }
}
