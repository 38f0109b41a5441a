//! Error types for the addon
//!
//! Provides unified error handling using thiserror. None of these ever reach
//! a client: the meta handler degrades every variant to an empty response.

use thiserror::Error;

// == Addon Error Enum ==
/// Unified error type for the addon.
#[derive(Error, Debug)]
pub enum AddonError {
    /// Required configuration value is missing or empty
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// Transport-level failure talking to upstream
    #[error("Upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    /// Upstream body was not valid JSON
    #[error("Malformed upstream body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested id cannot be turned into an upstream path
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

impl AddonError {
    /// True for failures that come from talking to upstream.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AddonError::Network(_) | AddonError::UpstreamStatus(_) | AddonError::Decode(_)
        )
    }
}

// == Result Type Alias ==
/// Convenience Result type for the addon.
pub type Result<T> = std::result::Result<T, AddonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_classification() {
        assert!(AddonError::UpstreamStatus(503).is_upstream());
        let decode = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(AddonError::from(decode).is_upstream());
        assert!(!AddonError::InvalidId("a/b".to_string()).is_upstream());
        assert!(!AddonError::MissingConfig("TMDB_API_KEY".to_string()).is_upstream());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AddonError::UpstreamStatus(401).to_string(),
            "Upstream returned status 401"
        );
        assert_eq!(
            AddonError::InvalidId("".to_string()).to_string(),
            "Invalid id: "
        );
    }
}
