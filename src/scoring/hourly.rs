//! Resolves one hour of the forecast's parallel arrays into concrete values.

use crate::models::ForecastHourly;

/// One timestep's resolved weather variables.
///
/// Units follow the Open-Meteo request: °C, meters (visibility), km/h
/// (wind and gusts), % (cloud cover), mm (precipitation), cm (snowfall).
#[derive(Debug, Clone, Copy)]
pub struct HourlyReading {
    /// NaN when the payload has no temperature for this hour. Every
    /// temperature rule compares against NaN as false, so an unknown
    /// temperature simply earns no temperature bonus.
    pub temperature: f64,
    pub visibility: f64,
    pub wind_speed: f64,
    pub cloud_cover: f64,
    pub precipitation: f64,
    pub snowfall: f64,
    pub cloud_cover_low: f64,
    pub wind_gusts: f64,
}

/// Reads `series[idx]`, treating an absent series, a short series, and a
/// null sample identically.
fn sample(series: &Option<Vec<Option<f64>>>, idx: usize) -> Option<f64> {
    series.as_ref().and_then(|s| s.get(idx).copied().flatten())
}

impl HourlyReading {
    /// Resolves the reading at `idx`, substituting per-variable defaults for
    /// anything missing. Unknown cloud cover defaults to fully overcast
    /// (100%), and low cloud cover falls back to the hour's resolved cloud
    /// cover.
    pub fn resolve(hourly: &ForecastHourly, idx: usize) -> Self {
        let cloud_cover = sample(&hourly.cloud_cover, idx).unwrap_or(100.0);

        Self {
            temperature: sample(&hourly.temperature_2m, idx).unwrap_or(f64::NAN),
            visibility: sample(&hourly.visibility, idx).unwrap_or(0.0),
            wind_speed: sample(&hourly.wind_speed_10m, idx).unwrap_or(0.0),
            cloud_cover,
            precipitation: sample(&hourly.precipitation, idx).unwrap_or(0.0),
            snowfall: sample(&hourly.snowfall, idx).unwrap_or(0.0),
            cloud_cover_low: sample(&hourly.cloud_cover_low, idx).unwrap_or(cloud_cover),
            wind_gusts: sample(&hourly.wind_gusts_10m, idx).unwrap_or(0.0),
        }
    }
}
