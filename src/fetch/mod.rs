//! HTTP plumbing for the Open-Meteo collaborators.
//!
//! The scoring engine never touches this layer; it exists so the CLI can
//! fetch geocoding and forecast payloads and so tests can stub the transport
//! behind [`HttpClient`].

mod basic;

pub use basic::BasicClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Transport abstraction so callers can stub the network in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

/// Transport-level failures, kept distinct from "the call succeeded but
/// returned nothing" (an empty candidate list is `Ok`).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("invalid url: {0}")]
    Url(String),
}

/// Issues a GET for `url` and deserializes the JSON response body.
///
/// Non-success statuses become [`FetchError::Status`] with the body text
/// preserved for logging.
pub async fn fetch_json<C: HttpClient, T: DeserializeOwned>(
    client: &C,
    url: &str,
) -> Result<T, FetchError> {
    let parsed = url
        .parse()
        .map_err(|e| FetchError::Url(format!("{url}: {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(FetchError::Status { status, body });
    }

    Ok(resp.json::<T>().await?)
}
