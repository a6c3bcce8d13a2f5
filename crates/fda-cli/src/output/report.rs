//! Table + chart view of a [`FetchReport`].

use fda_core::MonthPeriod;
use fda_core::responses::FetchReport;

use super::chart::{self, ChartOptions, X_LABEL};
use super::table::{self, EMPTY_CELL, TableOptions};
use crate::cli::OutputFormat;

pub const NO_RESULTS_MESSAGE: &str = "No drug labels found for the selected parameters.";

const ROW_HEADERS: [&str; 5] = [
    "Brand Name",
    "Generic Name",
    "Manufacturer Name",
    "Effective Time",
    X_LABEL,
];

/// Render `report`; JSON formats serialize it whole.
pub fn render_report(
    report: &FetchReport,
    format: OutputFormat,
    chart_width: usize,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let table_options = super::table_options();
            let chart_options = ChartOptions {
                width: chart_width,
                color: table_options.color,
            };
            Ok(render_dashboard(report, table_options, chart_options))
        }
        OutputFormat::Json | OutputFormat::Raw => super::render(report, format),
    }
}

fn render_dashboard(
    report: &FetchReport,
    table_options: TableOptions,
    chart_options: ChartOptions,
) -> String {
    let rows = report
        .rows
        .iter()
        .map(|row| {
            let (effective_time, month) = row.effective_time.map_or_else(
                || (EMPTY_CELL.to_string(), EMPTY_CELL.to_string()),
                |date| {
                    (
                        date.format("%Y-%m-%d").to_string(),
                        MonthPeriod::of(date).to_string(),
                    )
                },
            );
            vec![
                row.brand_name.clone(),
                row.generic_name.clone(),
                row.manufacturer_name.clone(),
                effective_time,
                month,
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "{}\n\n{}",
        table::render_table(&ROW_HEADERS, &rows, table_options),
        chart::render_bar_chart(&report.monthly, chart_options)
    )
}

#[cfg(test)]
mod tests {
    use fda_core::normalize::normalize_all;
    use fda_core::{QuerySpec, SearchFilter, query};
    use serde_json::json;

    use super::*;

    fn report() -> FetchReport {
        let spec: QuerySpec = query::build(&SearchFilter::new(
            "2024-10-01".parse().unwrap(),
            "2024-11-30".parse().unwrap(),
        ));
        let records = vec![
            json!({ "effective_time": "20241005", "openfda": { "brand_name": ["Advil"] } }),
            json!({ "effective_time": "20241120" }),
            json!({ "effective_time": "bad-date" }),
        ];
        FetchReport::new(spec, normalize_all(&records))
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    const CHART: ChartOptions = ChartOptions {
        width: 4,
        color: false,
    };

    #[test]
    fn dashboard_has_table_then_chart() {
        let out = render_dashboard(&report(), PLAIN, CHART);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("Brand Name"));
        assert!(lines[0].trim_end().ends_with("Approval Month"));
        assert!(lines[2].starts_with("Advil"));
        assert!(lines[2].contains("2024-10-05"));
        assert!(lines[2].trim_end().ends_with("2024-10"));
        assert!(lines[4].starts_with("N/A"));
        assert!(lines[4].trim_end().ends_with('-'));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], chart::CHART_TITLE);
        assert!(out.ends_with("2024-11         ████ 1"));
    }

    #[test]
    fn json_report_round_trips() {
        let report = report();
        let out = render_report(&report, OutputFormat::Json, 40).unwrap();
        let back: FetchReport = serde_json::from_str(&out).unwrap();
        assert_eq!(back, report);
    }
}
