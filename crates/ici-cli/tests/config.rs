//! Configuration loading tests.

use std::fs;

use ici_cli::config::{AppConfig, load_config};
use ici_core::{HorizonMap, LineLabels};
use ici_model::{KeyColumns, ShapeOrder};

#[test]
fn empty_config_uses_defaults() {
    let config = AppConfig::from_toml("").unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.columns, KeyColumns::default());
    assert_eq!(config.order, ShapeOrder::RegimenMajor);
    assert_eq!(config.horizons.months_for("2"), Some("24"));
}

#[test]
fn sections_override_defaults() {
    let config = AppConfig::from_toml(
        r#"
order = "component-major"

[columns]
cancer_type = "cancer"
line_of_therapy = "line"

[horizons]
"3" = "36"

[line_labels]
"1" = "First line"
"#,
    )
    .unwrap();

    assert_eq!(config.order, ShapeOrder::ComponentMajor);
    assert_eq!(config.columns.cancer_type, "cancer");
    assert_eq!(config.columns.line_of_therapy, "line");
    assert_eq!(config.columns.regimen, "regimen");
    assert_eq!(
        config.horizons,
        HorizonMap::new([("3".to_string(), "36".to_string())])
    );
    assert_eq!(config.horizons.months_for("1"), None);
    assert_eq!(
        config.line_labels,
        LineLabels::new([("1".to_string(), "First line".to_string())])
    );
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(AppConfig::from_toml("colour = \"red\"").is_err());
}

#[test]
fn blank_key_column_is_rejected() {
    let err = AppConfig::from_toml("[columns]\nregimen = \"  \"").unwrap_err();
    assert!(format!("{err:#}").contains("regimen"));
}

#[test]
fn explicit_order_overrides_config() {
    let config = AppConfig::from_toml("order = \"component-major\"").unwrap();

    assert_eq!(
        config.pipeline_options(None).order,
        ShapeOrder::ComponentMajor
    );
    assert_eq!(
        config
            .pipeline_options(Some(ShapeOrder::RegimenMajor))
            .order,
        ShapeOrder::RegimenMajor
    );
}

#[test]
fn load_config_without_path_is_default() {
    assert_eq!(load_config(None).unwrap(), AppConfig::default());
}

#[test]
fn load_config_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ici.toml");
    fs::write(&path, "[columns]\nregimen = \"arm\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.columns.regimen, "arm");
}

#[test]
fn load_config_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = load_config(Some(&path)).unwrap_err();

    assert!(format!("{err:#}").contains("missing.toml"));
}
