//! Open-Meteo geocoding and forecast client.
//!
//! One client is built per batch run and passed by reference; dropping it on
//! any exit path releases the underlying connection pool. Base URLs are
//! overridable through `GEOCODING_BASE` and `FORECAST_BASE` for CI stubs.

use activity_advisor::fetch::{BasicClient, FetchError, fetch_json};
use activity_advisor::models::{ForecastResponse, GeoCandidate, GeocodingResponse};

const DEFAULT_GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";
const DEFAULT_FORECAST_BASE: &str = "https://api.open-meteo.com/v1";

/// Hourly variables requested from the forecast endpoint. Wind direction is
/// not scored but kept in the snapshot for downstream readers.
const HOURLY_VARS: &str = "temperature_2m,visibility,wind_speed_10m,wind_direction_10m,\
cloud_cover,precipitation,snowfall,cloud_cover_low,wind_gusts_10m";

pub struct WeatherApiClient {
    http: BasicClient,
    geocoding_base: String,
    forecast_base: String,
}

impl WeatherApiClient {
    pub fn new() -> Self {
        Self {
            http: BasicClient::new(),
            geocoding_base: std::env::var("GEOCODING_BASE")
                .unwrap_or_else(|_| DEFAULT_GEOCODING_BASE.to_string()),
            forecast_base: std::env::var("FORECAST_BASE")
                .unwrap_or_else(|_| DEFAULT_FORECAST_BASE.to_string()),
        }
    }

    /// Looks up candidate locations for a place name.
    ///
    /// Returns `Ok(vec![])` when the service answers but knows no such
    /// place; transport and status failures are [`FetchError`]s.
    pub async fn geocode(
        &self,
        name: &str,
        country_code: Option<&str>,
        count: usize,
    ) -> Result<Vec<GeoCandidate>, FetchError> {
        let mut url = base_url(&self.geocoding_base, "search")?;
        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("count", &count.to_string())
            .append_pair("language", "en")
            .append_pair("format", "json");
        if let Some(code) = country_code {
            url.query_pairs_mut().append_pair("country_code", code);
        }

        let resp: GeocodingResponse = fetch_json(&self.http, url.as_str()).await?;
        Ok(resp.results)
    }

    /// Fetches the hourly forecast for a coordinate, with timestamps in the
    /// site's local timezone (`timezone=auto`).
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, FetchError> {
        let mut url = base_url(&self.forecast_base, "forecast")?;
        url.query_pairs_mut()
            .append_pair("latitude", &latitude.to_string())
            .append_pair("longitude", &longitude.to_string())
            .append_pair("hourly", HOURLY_VARS)
            .append_pair("timezone", "auto");

        fetch_json(&self.http, url.as_str()).await
    }
}

impl Default for WeatherApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn base_url(base: &str, endpoint: &str) -> Result<reqwest::Url, FetchError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), endpoint);
    joined
        .parse()
        .map_err(|e| FetchError::Url(format!("{joined}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_tolerates_trailing_slash() {
        let url = base_url("https://geocoding-api.open-meteo.com/v1/", "search").unwrap();
        assert_eq!(
            url.as_str(),
            "https://geocoding-api.open-meteo.com/v1/search"
        );
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        assert!(base_url("not a url", "search").is_err());
    }
}
