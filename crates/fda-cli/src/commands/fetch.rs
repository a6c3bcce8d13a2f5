use std::path::PathBuf;

use fda_config::FdaConfig;
use fda_registry::RegistryClient;

use crate::cli::root_commands::FetchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::export;
use crate::output::report::{NO_RESULTS_MESSAGE, render_report};
use crate::pipeline;
use crate::progress::FetchSpinner;

/// Handle `fdadash fetch`.
pub async fn handle(
    args: &FetchArgs,
    config: &FdaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = args.filter.to_filter();
    let client =
        RegistryClient::with_endpoint(&config.registry.base_url, &config.registry.user_agent);

    let spinner = FetchSpinner::start(&filter);
    let report = match pipeline::run(&client, &filter).await {
        Ok(report) => {
            spinner.done();
            report
        }
        Err(error) => {
            spinner.failed();
            return Err(error.into());
        }
    };

    // JSON formats carry the empty report itself; only the dashboard says so.
    if report.is_empty() && flags.format == OutputFormat::Table {
        if !flags.quiet {
            eprintln!("{NO_RESULTS_MESSAGE}");
        }
        return Ok(());
    }

    println!(
        "{}",
        render_report(&report, flags.format, config.general.chart_width)?
    );

    if let Some(path) = csv_path(args, config) {
        if report.is_empty() {
            tracing::info!(path = %path.display(), "no rows; CSV not written");
        } else {
            export::write_csv(&path, &report.rows)?;
            if !flags.quiet {
                eprintln!("Wrote {} rows to {}", report.total_rows, path.display());
            }
        }
    }

    Ok(())
}

/// Explicit `--csv PATH`, or the configured file name for a bare `--csv`.
fn csv_path(args: &FetchArgs, config: &FdaConfig) -> Option<PathBuf> {
    args.csv.as_ref().map(|path| {
        path.clone()
            .unwrap_or_else(|| PathBuf::from(&config.export.file_name))
    })
}
