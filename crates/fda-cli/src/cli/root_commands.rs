use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use fda_core::SearchFilter;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch drug labels and show the table and monthly chart.
    Fetch(FetchArgs),
    /// Print the registry query for a filter without sending it.
    Query(FilterArgs),
    /// Dump JSON schema for an output type.
    Schema(SchemaArgs),
}

/// Search filter shared by `fetch` and `query`.
#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    /// Start of the effective-date range (YYYY-MM-DD).
    #[arg(long, default_value = "2024-10-01")]
    pub start: NaiveDate,
    /// End of the effective-date range, inclusive (YYYY-MM-DD).
    #[arg(long, default_value = "2024-10-30")]
    pub end: NaiveDate,
    /// Manufacturer name (first 4 characters are used).
    #[arg(short, long)]
    pub manufacturer: Option<String>,
    /// Generic name (exact match when longer than 4 characters, prefix otherwise).
    #[arg(short, long)]
    pub generic: Option<String>,
}

impl FilterArgs {
    #[must_use]
    pub fn to_filter(&self) -> SearchFilter {
        SearchFilter {
            start_date: self.start,
            end_date: self.end,
            manufacturer_prefix: self.manufacturer.clone(),
            generic_name: self.generic.clone(),
        }
    }
}

/// Arguments for `fdadash fetch`.
#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// Export rows as CSV (to the configured file name when no path is given).
    #[arg(long, value_name = "PATH")]
    pub csv: Option<Option<PathBuf>>,
}

/// Arguments for `fdadash schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    FetchReport,
    NormalizedRow,
    QuerySpec,
    SearchFilter,
}
