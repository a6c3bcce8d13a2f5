//! # fda-registry
//!
//! HTTP client for the openFDA drug-label registry.
//!
//! One [`QuerySpec`](fda_core::QuerySpec) in, one GET out. The client does not
//! retry, page, or cache: a failed request is reported once and the caller
//! decides what to do next.

mod error;
mod http;
mod label;

pub use error::RegistryError;

/// Public openFDA drug-label endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fda.gov/drug/label.json";

/// `User-Agent` sent when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = "fdadash/0.1";

/// HTTP client for the drug-label registry.
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryClient {
    /// Client for the public openFDA endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_BASE_URL, DEFAULT_USER_AGENT)
    }

    /// Client for an arbitrary endpoint, e.g. a mirror or a test server.
    ///
    /// No request timeout is set; the transport default applies.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_endpoint(base_url: impl Into<String>, user_agent: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
