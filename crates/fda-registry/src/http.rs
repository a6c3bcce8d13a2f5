//! Shared HTTP response helpers.
//!
//! Every non-success status becomes [`RegistryError::Api`]. openFDA answers
//! errors with an envelope like
//! `{"error": {"code": "NOT_FOUND", "message": "No matches found!"}}`;
//! when present, its code and message replace the raw body in the error.

use serde::Deserialize;

use crate::error::RegistryError;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Check an HTTP response, returning it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RegistryError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());
    Err(RegistryError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Best human-readable message for an error body, if it has any content.
fn error_message(body: &str) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        let ErrorDetail { code, message } = envelope.error;
        let detail = match (code, message) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        };
        if detail.is_some() {
            return detail;
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
