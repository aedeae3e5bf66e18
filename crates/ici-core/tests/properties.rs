//! Property tests for filtering, resolution and reshaping.

use ici_common::cell_to_string;
use ici_core::{TrialDataset, compute, filter_rows, resolve_for_dataset, resolve_metric_columns};
use ici_model::{ComputeRequest, FilterCriteria, MetricName};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::{Just, Strategy, prop, prop_assert, prop_assert_eq, prop_oneof, proptest};

const CANCERS: [&str; 3] = ["Melanoma", "NSCLC", "RCC"];
const LINES: [&str; 2] = ["1", "2+"];

#[derive(Debug, Clone)]
struct Row {
    cancer: &'static str,
    line: &'static str,
    regimen: String,
    orr: Option<f64>,
    orr_low: Option<f64>,
}

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        prop::sample::select(CANCERS.to_vec()),
        prop::sample::select(LINES.to_vec()),
        "[A-Z][a-z]{2,8}",
        prop::option::of(0.0f64..1.0),
        prop::option::of(0.0f64..1.0),
    )
        .prop_map(|(cancer, line, regimen, orr, orr_low)| Row {
            cancer,
            line,
            regimen,
            orr,
            orr_low,
        })
}

fn dataset(rows: &[Row]) -> TrialDataset {
    let frame = DataFrame::new(vec![
        Series::new(
            "cancer_type".into(),
            rows.iter().map(|r| r.cancer).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "line_of_therapy".into(),
            rows.iter().map(|r| r.line).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "regimen".into(),
            rows.iter().map(|r| r.regimen.as_str()).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "ORR_value".into(),
            rows.iter().map(|r| r.orr).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "ORR_CI_low".into(),
            rows.iter().map(|r| r.orr_low).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "PFS12_value".into(),
            rows.iter().map(|r| r.orr).collect::<Vec<_>>(),
        )
        .into_column(),
    ])
    .unwrap();
    TrialDataset::new(frame).unwrap()
}

fn metric_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ORR".to_string()),
        Just("PFS12".to_string()),
        Just("PFS".to_string()),
        Just("XYZ".to_string()),
    ]
}

proptest! {
    #[test]
    fn filter_keeps_exactly_the_matching_rows(
        rows in prop::collection::vec(row_strategy(), 0..12),
        cancer in prop::sample::select(CANCERS.to_vec()),
        line in prop::sample::select(LINES.to_vec()),
    ) {
        let data = dataset(&rows);
        let filtered = filter_rows(&data, &FilterCriteria::new(cancer, line)).unwrap();

        let expected: Vec<&str> = rows
            .iter()
            .filter(|r| r.cancer == cancer && r.line == line)
            .map(|r| r.regimen.as_str())
            .collect();
        let frame = filtered.frame();
        let regimen = frame.column("regimen").unwrap();
        let cancer_col = frame.column("cancer_type").unwrap();
        let line_col = frame.column("line_of_therapy").unwrap();
        let mut actual = Vec::new();
        for row in 0..filtered.height() {
            prop_assert_eq!(cell_to_string(cancer_col.get(row).unwrap()), cancer);
            prop_assert_eq!(cell_to_string(line_col.get(row).unwrap()), line);
            actual.push(cell_to_string(regimen.get(row).unwrap()));
        }
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn output_length_is_rows_times_columns(
        rows in prop::collection::vec(row_strategy(), 0..12),
        cancer in prop::sample::select(CANCERS.to_vec()),
        line in prop::sample::select(LINES.to_vec()),
        metric in metric_strategy(),
    ) {
        let data = dataset(&rows);
        let filtered = filter_rows(&data, &FilterCriteria::new(cancer, line)).unwrap();
        let columns = resolve_for_dataset(&data, &MetricName::new(metric.as_str()).unwrap());

        let table = compute(&data, &ComputeRequest::new(cancer, line, metric)).unwrap();

        prop_assert_eq!(table.len(), filtered.height() * columns.len());
    }

    #[test]
    fn compute_is_deterministic(
        rows in prop::collection::vec(row_strategy(), 0..12),
        cancer in prop::sample::select(CANCERS.to_vec()),
        line in prop::sample::select(LINES.to_vec()),
        metric in metric_strategy(),
    ) {
        let data = dataset(&rows);
        let request = ComputeRequest::new(cancer, line, metric);

        let first = compute(&data, &request).unwrap();
        let second = compute(&data, &request).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn resolver_matches_exactly_the_prefixed_columns(
        schema in prop::collection::vec("[A-C_]{1,6}", 0..16),
        metric in "[A-C]{1,3}",
    ) {
        let name = MetricName::new(metric.as_str()).unwrap();
        let resolved = resolve_metric_columns(&name, &schema);

        let prefix = format!("{metric}_");
        let expected: Vec<&String> = schema.iter().filter(|c| c.starts_with(&prefix)).collect();
        prop_assert_eq!(resolved.len(), expected.len());
        for (column, name) in resolved.iter().zip(expected) {
            prop_assert_eq!(&column.name, name);
            prop_assert!(column.name.ends_with(&column.component));
            prop_assert_eq!(column.component.as_str(), &name[prefix.len()..]);
        }
    }
}
