//! # fda-config
//!
//! Layered configuration loading for fdadash using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FDADASH_*` prefix, `__` as separator)
//! 2. Project-level `.fdadash/config.toml`
//! 3. User-level `~/.config/fdadash/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FDADASH_REGISTRY__BASE_URL` -> `registry.base_url`,
//! `FDADASH_EXPORT__FILE_NAME` -> `export.file_name`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fda_config::FdaConfig;
//!
//! let config = FdaConfig::load_with_dotenv().expect("config");
//! println!("registry: {}", config.registry.base_url);
//! ```

mod error;
mod export;
mod general;
mod registry;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::GeneralConfig;
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding the project-local config file.
pub const PROJECT_DIR: &str = ".fdadash";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FdaConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FdaConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be read or
    /// extracted and [`ConfigError::InvalidValue`] when validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if any) before building the
    /// figment, so its `FDADASH_*` entries act as environment overrides.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FDADASH_").split("__"))
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry.validate()?;
        self.general.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fdadash").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FdaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.export.file_name, "drug_labels.csv");
        assert_eq!(config.general.chart_width, 40);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config =
                FdaConfig::from_figment(&FdaConfig::figment()).map_err(|e| e.to_string())?;
            assert_eq!(config.registry.base_url, "https://api.fda.gov/drug/label.json");
            Ok(())
        });
    }
}
