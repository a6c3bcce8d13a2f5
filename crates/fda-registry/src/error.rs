//! Registry error types.

use thiserror::Error;

/// Errors that can occur while fetching drug labels.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// HTTP transport error (DNS, connection refused, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Registry API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the registry.
        status: u16,
        /// Registry error message or response body.
        message: String,
    },

    /// A success response whose body is not the expected JSON object.
    #[error("parse error: {0}")]
    Parse(String),
}
