use serde::{Deserialize, Serialize};

use crate::{DashboardError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "DASHBOARD_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `DASHBOARD_API_URL`, falling back to the default
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// The base URL is used verbatim, so only the scheme is checked.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            return Ok(());
        }
        Err(DashboardError::Config(format!(
            "base URL must start with http:// or https://, got '{}'",
            self.base_url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:8000");
    }

    #[test]
    fn test_lookup_prefers_environment() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "http://automation:9000".to_string())
        });
        assert_eq!(config.base_url, "http://automation:9000");
    }

    #[test]
    fn test_lookup_ignores_blank_value() {
        let config = ClientConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_lookup_trims_surrounding_whitespace() {
        let config = ClientConfig::from_lookup(|_| Some(" http://dash.internal:9000\n".to_string()));
        assert_eq!(config.base_url, "http://dash.internal:9000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_scheme() {
        assert!(ClientConfig::new("localhost:8000").validate().is_err());
        assert!(ClientConfig::new("https://dash.example.com/").validate().is_ok());
    }
}
