//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use fda_config::{ConfigError, FdaConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[registry]
base_url = "http://127.0.0.1:9000/drug/label.json"
user_agent = "fdadash-ci/1"

[export]
file_name = "october.csv"

[general]
chart_width = 60
"#,
        )?;

        let config: FdaConfig = Figment::from(Serialized::defaults(FdaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.registry.base_url, "http://127.0.0.1:9000/drug/label.json");
        assert_eq!(config.registry.user_agent, "fdadash-ci/1");
        assert_eq!(config.export.file_name, "october.csv");
        assert_eq!(config.general.chart_width, 60);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[registry]
user_agent = "custom/2"
"#,
        )?;

        let config: FdaConfig = Figment::from(Serialized::defaults(FdaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.registry.base_url, "https://api.fda.gov/drug/label.json");
        assert_eq!(config.registry.user_agent, "custom/2");
        assert_eq!(config.export.file_name, "drug_labels.csv");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".fdadash")?;
        jail.create_file(
            ".fdadash/config.toml",
            r#"
[export]
file_name = "project.csv"
"#,
        )?;

        let config = FdaConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.export.file_name, "project.csv");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[registry]
base_url = "api.fda.gov/drug/label.json"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(FdaConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = FdaConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "registry.base_url"));
        Ok(())
    });
}

#[test]
fn wrong_type_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
chart_width = "wide"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(FdaConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = FdaConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
