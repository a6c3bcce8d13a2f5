//! Search-expression construction for the drug-label registry.
//!
//! Clauses are joined left to right with `AND`. User text is inserted
//! verbatim: quotes, colons or brackets in a manufacturer or generic name
//! change the meaning of the expression. Callers that accept untrusted input
//! must treat the expression as unescaped.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filter::SearchFilter;

/// Fixed result cap sent with every request.
pub const QUERY_LIMIT: u32 = 500;

/// Number of leading characters kept for prefix-wildcard clauses.
const PREFIX_CHARS: usize = 4;

const MANUFACTURER_FIELD: &str = "openfda.manufacturer_name";
const GENERIC_FIELD: &str = "openfda.generic_name";
const GENERIC_EXACT_FIELD: &str = "openfda.generic_name.exact";

/// Request parameters derived from a [`SearchFilter`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuerySpec {
    /// Value of the `search` query parameter.
    pub expression: String,
    /// Value of the `limit` query parameter; always [`QUERY_LIMIT`].
    pub limit: u32,
}

/// Build the registry query for `filter`.
///
/// Does not validate the date range; see [`SearchFilter::validate`].
#[must_use]
pub fn build(filter: &SearchFilter) -> QuerySpec {
    let mut clauses = vec![format!(
        "effective_time:[{} TO {}]",
        compact_date(filter.start_date),
        compact_date(filter.end_date)
    )];

    if let Some(manufacturer) = filter.manufacturer() {
        clauses.push(prefix_clause(MANUFACTURER_FIELD, manufacturer));
    }

    if let Some(generic) = filter.generic() {
        if generic.chars().count() > PREFIX_CHARS {
            clauses.push(format!("{GENERIC_EXACT_FIELD}:\"{generic}\""));
        } else {
            clauses.push(prefix_clause(GENERIC_FIELD, generic));
        }
    }

    QuerySpec {
        expression: clauses.join(" AND "),
        limit: QUERY_LIMIT,
    }
}

fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn prefix_clause(field: &str, value: &str) -> String {
    let prefix: String = value.chars().take(PREFIX_CHARS).collect();
    format!("{field}:{prefix}*")
}
