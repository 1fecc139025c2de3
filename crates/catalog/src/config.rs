//! Client configuration.
//!
//! Settings come from the environment (`TMDB_API_KEY`, `TMDB_BASE_URL`) or
//! are set explicitly by the caller, e.g. from command-line flags.

use crate::error::{CatalogError, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const API_KEY_VAR: &str = "TMDB_API_KEY";
pub const BASE_URL_VAR: &str = "TMDB_BASE_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the HTTP client needs to reach the catalog
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API read access token, sent as `Authorization: Bearer ...`
    pub api_key: String,
    /// No trailing slash, e.g. `https://api.themoviedb.org/3`
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at another server (a proxy, or a local mock in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key/value source
    ///
    /// An empty or whitespace-only API key counts as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(CatalogError::MissingApiKey { var: API_KEY_VAR })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }
        Ok(config)
    }

    /// Check the settings before any request is made
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(CatalogError::MissingApiKey { var: API_KEY_VAR });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CatalogError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults_base_url() {
        let config = ClientConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "token")])).unwrap();
        assert_eq!(config.api_key, "token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_lookup_overrides_base_url_and_trims_slash() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "token"),
            (BASE_URL_VAR, "http://localhost:8080/3/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/3");
    }

    #[test]
    fn test_missing_or_blank_key_is_an_error() {
        let missing = ClientConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(missing, Err(CatalogError::MissingApiKey { .. })));

        let blank = ClientConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert!(matches!(blank, Err(CatalogError::MissingApiKey { .. })));
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let config = ClientConfig::new("token").with_base_url("ftp://example.invalid");
        assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl { .. })));
        assert!(ClientConfig::new("token").validate().is_ok());
    }
}
