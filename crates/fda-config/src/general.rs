//! General presentation settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound for `chart_width`; bars are built one block per column.
pub const MAX_CHART_WIDTH: usize = 1000;

const fn default_chart_width() -> usize {
    40
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Columns used by the longest bar in the monthly chart.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            chart_width: default_chart_width(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `chart_width` is outside
    /// `1..=MAX_CHART_WIDTH`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CHART_WIDTH).contains(&self.chart_width) {
            return Err(ConfigError::InvalidValue {
                field: "general.chart_width".to_string(),
                reason: format!("must be between 1 and {MAX_CHART_WIDTH}"),
            });
        }
        Ok(())
    }
}
