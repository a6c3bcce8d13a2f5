//! Response types returned as JSON by `fdadash` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::{self, MonthlyCount};
use crate::normalize::NormalizedRow;
use crate::query::QuerySpec;

/// Response from `fdadash fetch`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FetchReport {
    pub query: QuerySpec,
    pub rows: Vec<NormalizedRow>,
    pub monthly: MonthlyCount,
    pub total_rows: usize,
}

impl FetchReport {
    /// Assemble a report, deriving the monthly counts from `rows`.
    #[must_use]
    pub fn new(query: QuerySpec, rows: Vec<NormalizedRow>) -> Self {
        let monthly = aggregate::aggregate(&rows);
        Self {
            query,
            total_rows: rows.len(),
            rows,
            monthly,
        }
    }

    /// Zero matching records is a normal outcome, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
