//! # fda-core
//!
//! Core types and the pure half of the fdadash pipeline.
//!
//! This crate holds everything that does not touch the network:
//! - [`SearchFilter`] and its date-range validation
//! - [`query::build`], turning a filter into the registry search expression
//! - [`normalize::normalize`], mapping raw registry records to fixed-shape rows
//! - [`aggregate::aggregate`], counting rows per calendar month
//! - Response types rendered by the CLI

pub mod aggregate;
pub mod errors;
pub mod filter;
pub mod normalize;
pub mod query;
pub mod responses;

pub use aggregate::{MonthPeriod, MonthlyBucket, MonthlyCount};
pub use errors::CoreError;
pub use filter::SearchFilter;
pub use normalize::{NormalizedRow, RawRecord, SENTINEL};
pub use query::{QUERY_LIMIT, QuerySpec};
