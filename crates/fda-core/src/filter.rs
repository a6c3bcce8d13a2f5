use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// User-supplied filter for one fetch.
///
/// Built fresh for every fetch and passed by reference down the pipeline.
/// Empty strings in the optional fields behave exactly like `None`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchFilter {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Manufacturer name; only the first 4 characters reach the query.
    pub manufacturer_prefix: Option<String>,
    /// Generic name; matched exactly when longer than 4 characters.
    pub generic_name: Option<String>,
}

impl SearchFilter {
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            manufacturer_prefix: None,
            generic_name: None,
        }
    }

    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer_prefix = Some(manufacturer.into());
        self
    }

    #[must_use]
    pub fn with_generic_name(mut self, generic_name: impl Into<String>) -> Self {
        self.generic_name = Some(generic_name.into());
        self
    }

    /// Reject filters whose start date falls after the end date.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `start_date > end_date`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.start_date > self.end_date {
            return Err(CoreError::Validation(
                "Start Date must be before End Date.".to_string(),
            ));
        }
        Ok(())
    }

    /// Manufacturer input, or `None` when absent or empty.
    #[must_use]
    pub fn manufacturer(&self) -> Option<&str> {
        non_empty(self.manufacturer_prefix.as_deref())
    }

    /// Generic-name input, or `None` when absent or empty.
    #[must_use]
    pub fn generic(&self) -> Option<&str> {
        non_empty(self.generic_name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
