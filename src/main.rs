//! CLI entry point for the activity advisor.
//!
//! Provides subcommands for running a batch of cities from a test-data file,
//! scoring a single forecast payload, and inspecting geocoding candidates.

mod services;

use crate::services::weather_api::WeatherApiClient;
use activity_advisor::fetch::{BasicClient, fetch_json};
use activity_advisor::models::{City, ForecastResponse, SiteMeta};
use activity_advisor::output::{
    self, ResultSnapshot, append_hourly_scores, write_failure_json, write_result_json,
};
use activity_advisor::scoring::score_hourly_activities;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::Instrument;
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "activity_advisor")]
#[command(about = "Recommends the best activity window from hourly weather forecasts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every city listed in a JSON test-data file
    Run {
        /// JSON file with [{"name": ..., "country_code": ...}] entries
        #[arg(value_name = "CITIES_FILE", default_value = "testdata/cities.json")]
        cities: String,

        /// Directory to write per-city result files to
        #[arg(short, long, default_value = "results")]
        results_dir: String,

        /// Also append per-hour scores to <city>_hourly.csv
        #[arg(long, default_value_t = false)]
        hourly_csv: bool,
    },
    /// Score a single forecast payload from a file or URL
    Score {
        /// Path to a forecast JSON file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Site elevation in meters, used when the payload carries none
        #[arg(long, default_value_t = 0.0)]
        elevation: f64,
    },
    /// List geocoding candidates for a place name
    Geocode {
        /// Place name to look up
        name: String,

        /// Optional ISO country code filter
        #[arg(short, long)]
        country_code: Option<String>,
    },
}

/// How one city of a batch run ended. Exactly one outcome is recorded per
/// city; no outcome ever aborts the batch.
enum CityOutcome {
    Scored,
    GeocodeFailed,
    NoGeocodeResults,
    ForecastFailed,
    EmptyForecast,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/activity_advisor.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("activity_advisor.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            cities,
            results_dir,
            hourly_csv,
        } => {
            run_batch(&cities, Path::new(&results_dir), hourly_csv).await?;
        }
        Commands::Score { source, elevation } => {
            let forecast = load_forecast(&source).await?;
            let meta = SiteMeta {
                latitude: forecast.latitude,
                longitude: forecast.longitude,
                elevation: forecast.elevation.unwrap_or(elevation),
            };

            let report = score_hourly_activities(&forecast.hourly, &meta);
            match &report.result {
                Some(result) => {
                    info!(recommended = %result.recommended_activity, "Forecast scored")
                }
                None => warn!("Forecast payload contained zero hours"),
            }

            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Geocode { name, country_code } => {
            let client = WeatherApiClient::new();
            let candidates = client.geocode(&name, country_code.as_deref(), 10).await?;

            if candidates.is_empty() {
                warn!(place = %name, "No geocoding candidates");
            }
            for loc in &candidates {
                info!(
                    name = %loc.name,
                    latitude = loc.latitude,
                    longitude = loc.longitude,
                    elevation = loc.elevation,
                    country = loc.country_code.as_deref().unwrap_or(""),
                    "Candidate"
                );
            }
            info!(total = candidates.len(), "Geocoding lookup complete");
        }
    }

    Ok(())
}

/// Loads a forecast payload from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
async fn load_forecast(source: &str) -> Result<ForecastResponse> {
    if source.starts_with("http") {
        let client = BasicClient::new();
        Ok(fetch_json(&client, source).await?)
    } else {
        let bytes = fs::read(source).with_context(|| format!("reading {source}"))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing forecast in {source}"))
    }
}

/// Scores every city from the test-data file sequentially, recording one
/// outcome per city. A single failing city never stops the batch.
#[tracing::instrument(skip(hourly_csv), fields(cities_file, results_dir = %results_dir.display()))]
async fn run_batch(cities_file: &str, results_dir: &Path, hourly_csv: bool) -> Result<()> {
    let raw = fs::read_to_string(cities_file)
        .with_context(|| format!("reading cities file {cities_file}"))?;
    let cities: Vec<City> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {cities_file}"))?;

    if cities.is_empty() {
        warn!("No cities in test data, nothing to do");
        return Ok(());
    }

    fs::create_dir_all(results_dir)?;

    // One client for the whole batch; dropped on every exit path.
    let client = WeatherApiClient::new();

    info!(city_count = cities.len(), "Starting batch run");

    let mut scored = 0usize;
    let mut geocode_failed = 0usize;
    let mut no_geocode = 0usize;
    let mut forecast_failed = 0usize;
    let mut empty_forecast = 0usize;

    for city in &cities {
        let span = tracing::info_span!("process_city", city = %city.name);
        let outcome = process_city(&client, city, results_dir, hourly_csv)
            .instrument(span)
            .await;

        match outcome {
            CityOutcome::Scored => scored += 1,
            CityOutcome::GeocodeFailed => geocode_failed += 1,
            CityOutcome::NoGeocodeResults => no_geocode += 1,
            CityOutcome::ForecastFailed => forecast_failed += 1,
            CityOutcome::EmptyForecast => empty_forecast += 1,
        }
    }

    info!(
        scored,
        geocode_failed, no_geocode, forecast_failed, empty_forecast, "Batch run complete"
    );
    Ok(())
}

/// Runs geocode → forecast → score → sinks for one city. Every failure kind
/// is logged and written as its own JSON record next to the successes.
async fn process_city(
    client: &WeatherApiClient,
    city: &City,
    results_dir: &Path,
    hourly_csv: bool,
) -> CityOutcome {
    let stem = city.file_stem();

    let candidates = match client
        .geocode(&city.name, city.country_code.as_deref(), 1)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            error!(error = %e, "Geocoding request failed");
            let payload = json!({ "city": city, "error": e.to_string() });
            if let Err(e) = write_failure_json(results_dir, &stem, "geocode_error", &payload) {
                error!(error = %e, "Failed to write geocode error record");
            }
            return CityOutcome::GeocodeFailed;
        }
    };

    let Some(loc) = candidates.first() else {
        warn!("No geocoding results");
        let payload = json!({ "city": city });
        if let Err(e) = write_failure_json(results_dir, &stem, "no_geocode", &payload) {
            error!(error = %e, "Failed to write no-geocode record");
        }
        return CityOutcome::NoGeocodeResults;
    };

    let forecast = match client.forecast(loc.latitude, loc.longitude).await {
        Ok(forecast) => forecast,
        Err(e) => {
            error!(error = %e, "Forecast request failed");
            let payload = json!({ "city": city, "location": loc, "error": e.to_string() });
            if let Err(e) = write_failure_json(results_dir, &stem, "forecast_error", &payload) {
                error!(error = %e, "Failed to write forecast error record");
            }
            return CityOutcome::ForecastFailed;
        }
    };

    let meta = SiteMeta::from_candidate(loc);
    let report = score_hourly_activities(&forecast.hourly, &meta);

    let Some(result) = &report.result else {
        warn!("Forecast contained zero hours");
        let payload = json!({ "city": city, "location": loc });
        if let Err(e) = write_failure_json(results_dir, &stem, "no_forecast", &payload) {
            error!(error = %e, "Failed to write empty-forecast record");
        }
        return CityOutcome::EmptyForecast;
    };

    let snapshot = ResultSnapshot {
        generated_at: chrono::Utc::now(),
        city,
        location: loc,
        recommended: Some(result.recommended_activity),
        report: &report,
    };
    if let Err(e) = write_result_json(results_dir, &stem, &snapshot) {
        error!(error = %e, "Failed to write result snapshot");
    }
    if let Err(e) = output::write_summary(results_dir, &stem, &city.name, &report) {
        error!(error = %e, "Failed to write text summary");
    }
    if hourly_csv {
        let csv_path = results_dir.join(format!("{stem}_hourly.csv"));
        if let Err(e) = append_hourly_scores(&csv_path, &report.debug.hourly_scores) {
            error!(error = %e, "Failed to append hourly score rows");
        }
    }

    info!(recommended = %result.recommended_activity, "City processed");
    CityOutcome::Scored
}
