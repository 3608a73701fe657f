//! Client configuration read from the environment.

use std::env;

use tracing::info;

pub const API_URL_VAR: &str = "REGISTRY_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
        }
    }

    /// Read `REGISTRY_API_URL`, falling back to the local development server.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                info!("{API_URL_VAR} not set, using default: {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            });
        Self { api_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_lookup(|_| Some("  ".to_string())).api_url,
            DEFAULT_API_URL
        );
    }

    #[test]
    fn reads_api_url() {
        let config = ClientConfig::from_lookup(|key| {
            (key == API_URL_VAR).then(|| "https://registry.example.org".to_string())
        });
        assert_eq!(config.api_url, "https://registry.example.org");
    }
}
