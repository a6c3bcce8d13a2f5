//! Error types shared by the fdadash crates.
//!
//! Network failures live in `fda-registry` and configuration failures in
//! `fda-config`. The CLI converges them into a single `anyhow` chain.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The search filter was rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A month label could not be parsed as `YYYY-MM`.
    #[error("invalid month period '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),
}
