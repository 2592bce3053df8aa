//! Prediction service client configuration
//!
//! The base address of the prediction backend comes from the
//! `PREDICTION_API_URL` environment variable and falls back to the local
//! development server.

use std::env;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable overriding the prediction backend address
pub const API_URL_ENV: &str = "PREDICTION_API_URL";

/// Address used when no override is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed
    #[error("Invalid prediction API URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The base URL uses a scheme other than http or https
    #[error("Unsupported scheme '{0}' for prediction API URL")]
    UnsupportedScheme(String),
}

/// Client configuration for the prediction backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base address, without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    /// Create a configuration for the given base address
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the configuration from the environment
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!("Using prediction API URL from {}: {}", API_URL_ENV, url);
                Self::new(url)
            }
            Ok(_) => {
                warn!("{} is set but empty - using {}", API_URL_ENV, DEFAULT_API_URL);
                Self::default()
            }
            Err(_) => {
                debug!("{} not set - using {}", API_URL_ENV, DEFAULT_API_URL);
                Self::default()
            }
        }
    }

    /// Check that the base address is an absolute http(s) URL
    pub fn validate(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Build the full URL of an operation path such as `/predict/`
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://example.org:9000/");
        assert_eq!(config.endpoint("/predict/"), "http://example.org:9000/predict/");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let config = ApiConfig::new("https://example.org/api");
        assert_eq!(config.endpoint("/send_alert/"), "https://example.org/api/send_alert/");
        assert_eq!(config.endpoint("/"), "https://example.org/api/");
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(matches!(
            ApiConfig::new("not a url").validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert_eq!(
            ApiConfig::new("ftp://example.org").validate(),
            Err(ConfigError::UnsupportedScheme("ftp".to_string()))
        );
    }
}
