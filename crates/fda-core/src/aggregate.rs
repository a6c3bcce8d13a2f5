//! Group-by-month counting over normalized rows.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::normalize::NormalizedRow;

/// A calendar month. Orders chronologically and renders as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl From<MonthPeriod> for String {
    fn from(period: MonthPeriod) -> Self {
        period.to_string()
    }
}

impl TryFrom<String> for MonthPeriod {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Number of rows whose `effective_time` falls in `month`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// Month label in `YYYY-MM` form.
    #[schemars(with = "String")]
    pub month: MonthPeriod,
    pub count: usize,
}

/// Buckets in ascending month order, without zero-filled gaps.
pub type MonthlyCount = Vec<MonthlyBucket>;

/// Count rows per calendar month. Rows without an `effective_time` are
/// left out entirely.
#[must_use]
pub fn aggregate(rows: &[NormalizedRow]) -> MonthlyCount {
    let mut counts: BTreeMap<MonthPeriod, usize> = BTreeMap::new();
    for date in rows.iter().filter_map(|row| row.effective_time) {
        *counts.entry(MonthPeriod::of(date)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(month, count)| MonthlyBucket { month, count })
        .collect()
}
