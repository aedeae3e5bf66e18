//! End-to-end tests for the subcommands, reading CSV files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use ici_cli::cli::{CatalogArgs, ComputeArgs, DataArgs, OrderArg, OutputFormatArg};
use ici_cli::commands::{run_catalog, run_compute};
use ici_model::LongRecord;
use tempfile::TempDir;

const TRIALS: &str = "\
cancer_type,line_of_therapy,regimen,ORR_value,ORR_CI_low,PFS12_value,PFS24_value
Melanoma,1,Nivolumab,0.40,0.35,0.5,
Melanoma,1,Pembrolizumab,0.45,,0.55,0.41
Melanoma,2+,Ipilimumab,0.11,0.08,N/A,
NSCLC,1,Atezolizumab,0.30,0.25,0.4,0.2
";

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("trials.csv");
    fs::write(&path, TRIALS).unwrap();
    path
}

fn compute_args(data: &Path) -> ComputeArgs {
    ComputeArgs {
        source: DataArgs {
            data: data.to_path_buf(),
            config: None,
        },
        cancer: Some("Melanoma".to_string()),
        line: Some("1".to_string()),
        metric: None,
        base: None,
        year: None,
        order: None,
        output: OutputFormatArg::Table,
    }
}

#[test]
fn compute_by_metric_name() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(&dir);
    let args = ComputeArgs {
        metric: Some("ORR".to_string()),
        ..compute_args(&data)
    };

    let table = run_compute(&args).unwrap();

    assert_eq!(
        table.records(),
        &[
            LongRecord::new("Nivolumab", "value", Some(0.40)),
            LongRecord::new("Nivolumab", "CI_low", Some(0.35)),
            LongRecord::new("Pembrolizumab", "value", Some(0.45)),
            LongRecord::new("Pembrolizumab", "CI_low", None),
        ]
    );
}

#[test]
fn compute_by_base_and_year() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(&dir);
    let args = ComputeArgs {
        base: Some("pfs".to_string()),
        year: Some("2".to_string()),
        ..compute_args(&data)
    };

    let table = run_compute(&args).unwrap();

    assert_eq!(
        table.records(),
        &[
            LongRecord::new("Nivolumab", "value", None),
            LongRecord::new("Pembrolizumab", "value", Some(0.41)),
        ]
    );
}

#[test]
fn unknown_year_yields_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(&dir);
    let args = ComputeArgs {
        base: Some("OVS".to_string()),
        year: Some("5".to_string()),
        ..compute_args(&data)
    };

    assert!(run_compute(&args).unwrap().is_empty());
}

#[test]
fn component_major_order_from_flag() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(&dir);
    let args = ComputeArgs {
        metric: Some("ORR".to_string()),
        order: Some(OrderArg::ComponentMajor),
        ..compute_args(&data)
    };

    let table = run_compute(&args).unwrap();

    assert_eq!(table.components(), vec!["value", "CI_low"]);
    assert_eq!(table.records()[1].regimen, "Pembrolizumab");
    assert_eq!(table.records()[1].component, "value");
}

#[test]
fn missing_metric_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(&dir);

    let err = run_compute(&compute_args(&data)).unwrap_err();

    assert!(format!("{err:#}").contains("metric"));
}

#[test]
fn config_renames_key_columns() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("renamed.csv");
    fs::write(&data, "cancer,line,arm,ORR_value\nMelanoma,1,Nivolumab,0.4\n").unwrap();
    let config = dir.path().join("ici.toml");
    fs::write(
        &config,
        "[columns]\ncancer_type = \"cancer\"\nline_of_therapy = \"line\"\nregimen = \"arm\"\n",
    )
    .unwrap();
    let mut args = ComputeArgs {
        metric: Some("ORR".to_string()),
        ..compute_args(&data)
    };
    args.source.config = Some(config);

    let table = run_compute(&args).unwrap();

    assert_eq!(
        table.records(),
        &[LongRecord::new("Nivolumab", "value", Some(0.4))]
    );
}

#[test]
fn missing_key_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("nokeys.csv");
    fs::write(&data, "cancer_type,regimen,ORR_value\nMelanoma,Nivolumab,0.4\n").unwrap();
    let args = ComputeArgs {
        metric: Some("ORR".to_string()),
        ..compute_args(&data)
    };

    let err = run_compute(&args).unwrap_err();

    assert!(format!("{err:#}").contains("line_of_therapy"));
}

#[test]
fn catalog_lists_dataset_choices() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(&dir);
    let args = CatalogArgs {
        source: DataArgs { data, config: None },
        output: OutputFormatArg::Json,
    };

    let catalog = run_catalog(&args).unwrap();

    assert_eq!(catalog.cancer_types, vec!["Melanoma", "NSCLC"]);
    let lines: Vec<&str> = catalog
        .lines_of_therapy
        .iter()
        .map(|line| line.value.as_str())
        .collect();
    assert_eq!(lines, vec!["1", "2+"]);
    assert_eq!(catalog.metrics, vec!["ORR", "PFS12", "PFS24"]);
}
