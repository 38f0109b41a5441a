//! Configuration Module
//!
//! Handles loading and managing addon configuration from environment variables.

use std::env;

use crate::error::{AddonError, Result};

/// Default TMDb API root, without trailing slash
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default poster prefix (image host + size segment)
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Addon configuration parameters.
///
/// Everything except the API key has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDb API key, sent as the `api_key` query parameter
    pub api_key: String,
    /// HTTP server port
    pub server_port: u16,
    /// Cache lifetime in seconds
    pub cache_ttl: u64,
    /// Upstream API root
    pub api_base_url: String,
    /// Prefix prepended to poster paths
    pub image_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TMDB_API_KEY` - Upstream credential (required)
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Cache lifetime in seconds (default: 3600)
    /// - `TMDB_API_URL` - Upstream API root (default: https://api.themoviedb.org/3)
    /// - `TMDB_IMAGE_URL` - Poster prefix (default: https://image.tmdb.org/t/p/w500)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::with_api_key(String::new());

        let api_key = lookup("TMDB_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AddonError::MissingConfig("TMDB_API_KEY".to_string()))?;

        Ok(Self {
            api_key,
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cache_ttl: lookup("CACHE_TTL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            api_base_url: lookup("TMDB_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            image_base_url: lookup("TMDB_IMAGE_URL").unwrap_or(defaults.image_base_url),
        })
    }

    /// Default configuration around the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            server_port: 3000,
            cache_ttl: 3600,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}
