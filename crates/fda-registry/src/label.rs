//! Drug-label endpoint: request URL and response body mapping.

use fda_core::{QuerySpec, RawRecord};
use serde_json::Value;

use crate::{RegistryClient, error::RegistryError, http::check_response};

impl RegistryClient {
    /// Full request URL for `spec`, with `search` percent-encoded.
    #[must_use]
    pub fn request_url(&self, spec: &QuerySpec) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}search={}&limit={}",
            self.base_url,
            urlencoding::encode(&spec.expression),
            spec.limit
        )
    }

    /// Run `spec` against the registry and return the raw `results` array.
    ///
    /// Issues exactly one GET. A missing, `null` or empty `results` array is
    /// an empty success.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] on transport failure,
    /// [`RegistryError::Api`] on any non-success status and
    /// [`RegistryError::Parse`] when the body is not a JSON object.
    pub async fn fetch(&self, spec: &QuerySpec) -> Result<Vec<RawRecord>, RegistryError> {
        let url = self.request_url(spec);
        tracing::debug!(%url, "fetching drug labels");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let records = parse_results(&body)?;

        tracing::debug!(records = records.len(), "registry returned");
        Ok(records)
    }
}

/// Extract the `results` array from a success body. The body must be a JSON
/// object; `meta` and other siblings of `results` are ignored.
fn parse_results(body: &str) -> Result<Vec<RawRecord>, RegistryError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| RegistryError::Parse(e.to_string()))?;
    let Value::Object(mut object) = value else {
        return Err(RegistryError::Parse(format!(
            "expected a JSON object, got {}",
            kind(&value)
        )));
    };

    match object.remove("results") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(records)) => Ok(records),
        Some(other) => Err(RegistryError::Parse(format!(
            "`results` must be an array, got {}",
            kind(&other)
        ))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
