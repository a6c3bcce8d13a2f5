use fda_core::responses::FetchReport;
use fda_core::{NormalizedRow, QuerySpec, SearchFilter};
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `fdadash schema`. Always JSON; `--format raw` prints it on one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::FetchReport => schema_for!(FetchReport),
        SchemaType::NormalizedRow => schema_for!(NormalizedRow),
        SchemaType::QuerySpec => schema_for!(QuerySpec),
        SchemaType::SearchFilter => schema_for!(SearchFilter),
    };

    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_report_schema_names_all_fields() {
        let schema = serde_json::to_value(schema_for!(FetchReport)).unwrap();
        let properties = schema["properties"].as_object().expect("object schema");
        for field in ["query", "rows", "monthly", "total_rows"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn month_is_described_as_string() {
        let schema = serde_json::to_value(schema_for!(fda_core::MonthlyBucket)).unwrap();
        assert_eq!(schema["properties"]["month"]["type"], "string");
    }
}
