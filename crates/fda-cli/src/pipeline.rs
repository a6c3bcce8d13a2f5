//! Validate → build → fetch → normalize → aggregate.

use fda_core::normalize::normalize_all;
use fda_core::responses::FetchReport;
use fda_core::{CoreError, SearchFilter, query};
use fda_registry::{RegistryClient, RegistryError};
use thiserror::Error;

/// Why a fetch produced no report. Both kinds end the current fetch.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Rejected before any network activity.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The single registry request failed.
    #[error("Error fetching data from FDA API: {0}")]
    Network(#[from] RegistryError),
}

/// Run one fetch for `filter`.
///
/// An empty result is an `Ok` report with no rows.
pub async fn run(
    client: &RegistryClient,
    filter: &SearchFilter,
) -> Result<FetchReport, PipelineError> {
    filter.validate()?;

    let spec = query::build(filter);
    tracing::info!(search = %spec.expression, limit = spec.limit, "querying drug-label registry");

    let records = client.fetch(&spec).await?;
    let report = FetchReport::new(spec, normalize_all(&records));

    tracing::info!(
        rows = report.total_rows,
        months = report.monthly.len(),
        "fetch complete"
    );
    Ok(report)
}
