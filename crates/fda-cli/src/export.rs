//! CSV export of normalized rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use fda_core::NormalizedRow;

pub const CSV_HEADERS: [&str; 4] = [
    "Brand Name",
    "Generic Name",
    "Manufacturer Name",
    "Effective Time",
];

/// Write `rows` to `path`, replacing any existing file.
pub fn write_csv(path: &Path, rows: &[NormalizedRow]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create CSV file {}", path.display()))?;
    write_rows(file, rows).with_context(|| format!("failed to write CSV file {}", path.display()))
}

/// Header plus one record per row. Missing dates are written as empty cells.
pub fn write_rows<W: Write>(writer: W, rows: &[NormalizedRow]) -> anyhow::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADERS)?;
    for row in rows {
        let effective_time = row
            .effective_time
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        out.write_record([
            row.brand_name.as_str(),
            row.generic_name.as_str(),
            row.manufacturer_name.as_str(),
            effective_time.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fda_core::SENTINEL;
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows() -> Vec<NormalizedRow> {
        vec![
            NormalizedRow {
                brand_name: "Advil".to_string(),
                generic_name: "IBUPROFEN".to_string(),
                manufacturer_name: "Haleon US Holdings LLC".to_string(),
                effective_time: NaiveDate::from_ymd_opt(2024, 10, 15),
            },
            NormalizedRow {
                brand_name: "Children's Motrin, Berry".to_string(),
                generic_name: SENTINEL.to_string(),
                manufacturer_name: SENTINEL.to_string(),
                effective_time: None,
            },
        ]
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "Brand Name,Generic Name,Manufacturer Name,Effective Time\n\
             Advil,IBUPROFEN,Haleon US Holdings LLC,2024-10-15\n\
             \"Children's Motrin, Berry\",N/A,N/A,\n"
        );
    }

    #[test]
    fn empty_rows_write_header_only() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Brand Name,Generic Name,Manufacturer Name,Effective Time\n"
        );
    }

    #[test]
    fn write_csv_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drug_labels.csv");

        write_csv(&path, &rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Brand Name,"));
    }

    #[test]
    fn write_csv_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_csv(&path, &rows()).unwrap_err();
        assert!(err.to_string().contains("failed to create CSV file"));
    }
}
