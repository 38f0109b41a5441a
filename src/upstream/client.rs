//! TMDb HTTP client
//!
//! Performs a single authenticated GET against the TMDb REST API and parses
//! the body as JSON. Caching lives one layer up in [`super::CachedFetcher`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{AddonError, Result};

/// Anything that can answer a GET for an upstream path with a JSON body.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value>;
}

/// Client for the TMDb v3 API
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a client against `base_url` (e.g. `https://api.themoviedb.org/3`).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    /// Create a client with a custom reqwest client
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Full URL for `path`, without the credential.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Upstream for TmdbClient {
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.endpoint_url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AddonError::UpstreamStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let client = TmdbClient::new("https://api.themoviedb.org/3", "key");
        assert_eq!(
            client.endpoint_url("/movie/603/similar"),
            "https://api.themoviedb.org/3/movie/603/similar"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = TmdbClient::new("http://localhost:8080/3/", "key");
        assert_eq!(
            client.endpoint_url("/movie/1/similar"),
            "http://localhost:8080/3/movie/1/similar"
        );
    }
}
