//! Raw registry record → fixed-shape row.
//!
//! Normalization never fails. Missing or malformed string fields collapse to
//! [`SENTINEL`]; an unparsable `effective_time` becomes `None` so that the
//! monthly aggregation can skip the row instead of bucketing a fake date.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record exactly as it appears in the registry's `results` array.
pub type RawRecord = Value;

/// Placeholder for missing string fields.
pub const SENTINEL: &str = "N/A";

/// One drug label reduced to the columns the dashboard shows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NormalizedRow {
    pub brand_name: String,
    pub generic_name: String,
    pub manufacturer_name: String,
    /// `None` when the source value is absent or not a `YYYYMMDD` date.
    pub effective_time: Option<NaiveDate>,
}

/// Normalize a single record.
#[must_use]
pub fn normalize(raw: &RawRecord) -> NormalizedRow {
    NormalizedRow {
        brand_name: openfda_first(raw, "brand_name"),
        generic_name: openfda_first(raw, "generic_name"),
        manufacturer_name: openfda_first(raw, "manufacturer_name"),
        effective_time: raw
            .get("effective_time")
            .and_then(Value::as_str)
            .and_then(parse_compact_date),
    }
}

/// Normalize every record, keeping registry order.
#[must_use]
pub fn normalize_all(records: &[RawRecord]) -> Vec<NormalizedRow> {
    records.iter().map(normalize).collect()
}

/// First element of `openfda.<field>`, or [`SENTINEL`].
fn openfda_first(raw: &RawRecord, field: &str) -> String {
    raw.get("openfda")
        .and_then(|openfda| openfda.get(field))
        .and_then(Value::as_array)
        .and_then(|values| values.first())
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map_or_else(|| SENTINEL.to_string(), str::to_string)
}

/// Strict `YYYYMMDD` parse: exactly eight ASCII digits forming a real date.
fn parse_compact_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").ok()
}
