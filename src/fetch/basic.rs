use super::HttpClient;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "HTTP client builder failed, falling back to a client without timeouts");
                reqwest::Client::new()
            });
        Self(client)
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_a_client() {
        // The builder config used here must always be constructible; the
        // warn-and-fallback path is only for exotic TLS environments.
        let _client = BasicClient::new();
        let _default = BasicClient::default();
    }
}
