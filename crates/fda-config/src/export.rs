//! CSV export configuration.

use serde::{Deserialize, Serialize};

fn default_file_name() -> String {
    String::from("drug_labels.csv")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// File written by `fetch --csv` when no path is given.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}
