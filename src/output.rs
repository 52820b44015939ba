//! Result sinks: per-city JSON snapshots, human-readable summaries, and an
//! optional CSV of per-hour scores.
//!
//! Every writer returns the path it wrote so callers can log it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::{City, GeoCandidate};
use crate::scoring::{Activity, HourScore, ScoringReport};

/// Machine-readable snapshot for one scored city.
#[derive(Serialize)]
pub struct ResultSnapshot<'a> {
    /// When this snapshot was produced; forecast timestamps stay opaque
    /// local-time strings, this is the only wall-clock field.
    pub generated_at: DateTime<Utc>,
    pub city: &'a City,
    pub location: &'a GeoCandidate,
    pub recommended: Option<Activity>,
    pub report: &'a ScoringReport,
}

/// Writes the full scoring snapshot as pretty JSON to `<stem>_result.json`.
pub fn write_result_json(dir: &Path, stem: &str, snapshot: &ResultSnapshot<'_>) -> Result<PathBuf> {
    write_json(dir, &format!("{stem}_result.json"), snapshot)
}

/// Records a per-city failure (`<stem>_<kind>.json`), e.g.
/// `Munich_geocode_error.json`. Failures are data, not aborts: the batch
/// keeps going after writing one of these.
pub fn write_failure_json(
    dir: &Path,
    stem: &str,
    kind: &str,
    payload: &impl Serialize,
) -> Result<PathBuf> {
    write_json(dir, &format!("{stem}_{kind}.json"), payload)
}

fn write_json(dir: &Path, file_name: &str, value: &impl Serialize) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_vec_pretty(value)?)?;
    debug!(path = %path.display(), "Wrote JSON record");
    Ok(path)
}

/// Writes the ranked text summary to `<stem>_result.txt`.
pub fn write_summary(dir: &Path, stem: &str, city_name: &str, report: &ScoringReport) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}_result.txt"));
    fs::write(&path, render_summary(city_name, report))?;
    debug!(path = %path.display(), "Wrote text summary");
    Ok(path)
}

/// Renders the human-readable ranked summary: recommendation header, then
/// the top 10 hours of every activity in fixed display order.
pub fn render_summary(city_name: &str, report: &ScoringReport) -> String {
    let recommended = report
        .result
        .as_ref()
        .map(|r| r.recommended_activity.name())
        .unwrap_or("None (no forecast hours)");

    let mut out = format!("City Name: {city_name}\n");
    out.push_str(&format!("Recommended Activity: {recommended}\n\n"));

    for act in Activity::ALL {
        out.push_str(&format!("{act}:\n"));

        let ranking = report
            .debug
            .activity_rankings
            .get(&act)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        if ranking.is_empty() {
            out.push_str("  No data available\n\n");
            continue;
        }

        for (idx, entry) in ranking.iter().take(10).enumerate() {
            out.push_str(&format!(
                "  {}: {} (score: {})\n",
                idx + 1,
                entry.time,
                format_score(entry.score)
            ));
        }
        out.push('\n');
    }

    out
}

/// Whole scores print without a decimal point, fractional ones with one
/// digit (`9` vs `9.5`).
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

/// Flat CSV row for one scored hour.
#[derive(Serialize)]
struct HourScoreRow<'a> {
    time: &'a str,
    surfing: f64,
    skiing: f64,
    outdoor_sightseeing: f64,
    indoor_sightseeing: f64,
}

impl<'a> HourScoreRow<'a> {
    fn from_hour(hour: &'a HourScore) -> Self {
        let score = |act: Activity| hour.scores.get(&act).copied().unwrap_or(0.0);
        Self {
            time: &hour.time,
            surfing: score(Activity::Surfing),
            skiing: score(Activity::Skiing),
            outdoor_sightseeing: score(Activity::OutdoorSightseeing),
            indoor_sightseeing: score(Activity::IndoorSightseeing),
        }
    }
}

/// Appends per-hour score rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_hourly_scores(path: &Path, hours: &[HourScore]) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending hourly score rows");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for hour in hours {
        writer.serialize(HourScoreRow::from_hour(hour))?;
    }
    writer.flush()?;

    Ok(())
}
