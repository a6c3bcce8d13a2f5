//! Drug-label registry endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from("https://api.fda.gov/drug/label.json")
}

fn default_user_agent() -> String {
    String::from("fdadash/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Drug-label endpoint; `search` and `limit` are appended per request.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl RegistryConfig {
    /// Only plain HTTP(S) endpoints are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any other scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.starts_with("https://") || self.base_url.starts_with("http://") {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "registry.base_url".to_string(),
            reason: format!("expected an http(s) URL, got '{}'", self.base_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_openfda() {
        let config = RegistryConfig::default();
        assert_eq!(config.base_url, "https://api.fda.gov/drug/label.json");
        assert_eq!(config.user_agent, "fdadash/0.1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn plain_http_is_accepted() {
        let config = RegistryConfig {
            base_url: "http://127.0.0.1:8080/label.json".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn other_schemes_are_rejected() {
        let config = RegistryConfig {
            base_url: "ftp://api.fda.gov/drug/label.json".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("registry.base_url"));
    }
}
