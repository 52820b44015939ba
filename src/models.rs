//! Serde models for the Open-Meteo payloads and the batch input file.
//!
//! The forecast schema is deliberately permissive: every hourly series except
//! `time` is optional, series may be shorter than `time`, and individual
//! samples may be `null`. The scoring layer resolves all of that to
//! documented defaults; deserialization only fails when the payload is
//! structurally broken (no `hourly` block or no `time` series at all).

use serde::{Deserialize, Serialize};

/// One entry of the batch input file (`[{"name": ..., "country_code": ...}]`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct City {
    pub name: String,
    pub country_code: Option<String>,
}

impl City {
    /// Filesystem-safe variant of the city name, used for result file names.
    pub fn file_stem(&self) -> String {
        self.name.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

/// Response envelope of the Open-Meteo geocoding endpoint. A missing or
/// empty `results` array means "no candidates", not an error.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeoCandidate>,
}

/// One geocoding candidate. Only the fields the pipeline consumes are
/// modeled, so noisy extras (postcodes and the like) never reach the result
/// snapshots.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
    pub admin1: Option<String>,
}

/// Open-Meteo forecast response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub timezone: Option<String>,
    pub utc_offset_seconds: Option<i64>,
    pub hourly: ForecastHourly,
}

/// The hourly block: parallel arrays indexed by position in `time`.
/// Timestamps are local-time strings as returned by the API (`timezone=auto`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForecastHourly {
    pub time: Vec<String>,
    pub temperature_2m: Option<Vec<Option<f64>>>,
    pub visibility: Option<Vec<Option<f64>>>,
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    pub wind_direction_10m: Option<Vec<Option<f64>>>,
    pub cloud_cover: Option<Vec<Option<f64>>>,
    pub precipitation: Option<Vec<Option<f64>>>,
    /// Snowfall in cm.
    pub snowfall: Option<Vec<Option<f64>>>,
    pub cloud_cover_low: Option<Vec<Option<f64>>>,
    pub wind_gusts_10m: Option<Vec<Option<f64>>>,
}

/// Site metadata fed to the scorer alongside the hourly series.
#[derive(Debug, Clone, Copy)]
pub struct SiteMeta {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level; callers substitute 0 when unknown.
    pub elevation: f64,
}

impl SiteMeta {
    pub fn from_candidate(loc: &GeoCandidate) -> Self {
        Self {
            latitude: loc.latitude,
            longitude: loc.longitude,
            elevation: loc.elevation.unwrap_or(0.0),
        }
    }
}
