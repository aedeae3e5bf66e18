//! Option lists derived from a dataset: the cancer types, lines of therapy
//! and metrics a user can choose from.

use std::collections::{BTreeMap, BTreeSet};

use ici_common::cell_to_key;
use ici_model::metric_base_of;
use serde::{Deserialize, Serialize};

use crate::dataset::TrialDataset;
use crate::error::Result;

/// Metrics listed first, in this order, when present.
pub const PREFERRED_METRIC_ORDER: [&str; 5] = ["ORR", "PFS12", "OVS12", "PFS24", "OVS24"];

/// Line of therapy value → display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineLabels(BTreeMap<String, String>);

impl Default for LineLabels {
    fn default() -> Self {
        Self(BTreeMap::from([
            ("1".to_string(), "No prior treatment".to_string()),
            ("2+".to_string(), "At least one prior treatment".to_string()),
        ]))
    }
}

impl LineLabels {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Label for `value`, or `value` itself when unlabelled.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.0.get(value).map_or(value, String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOption {
    pub value: String,
    pub label: String,
}

/// Everything a selection UI needs to offer for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetCatalog {
    pub cancer_types: Vec<String>,
    pub lines_of_therapy: Vec<LineOption>,
    pub metrics: Vec<String>,
}

impl DatasetCatalog {
    pub fn build(dataset: &TrialDataset, labels: &LineLabels) -> Result<Self> {
        Ok(Self {
            cancer_types: cancer_types(dataset)?,
            lines_of_therapy: lines_of_therapy(dataset, labels)?,
            metrics: metrics(dataset),
        })
    }
}

/// Distinct non-blank cancer types, sorted.
pub fn cancer_types(dataset: &TrialDataset) -> Result<Vec<String>> {
    Ok(distinct_keys(dataset, &dataset.keys().cancer_type)?
        .into_iter()
        .collect())
}

/// Distinct non-blank lines of therapy with labels, `"1"` first.
pub fn lines_of_therapy(dataset: &TrialDataset, labels: &LineLabels) -> Result<Vec<LineOption>> {
    let mut values: Vec<String> = distinct_keys(dataset, &dataset.keys().line_of_therapy)?
        .into_iter()
        .collect();
    values.sort_by(|a, b| (a != "1", a).cmp(&(b != "1", b)));
    Ok(values
        .into_iter()
        .map(|value| LineOption {
            label: labels.label_for(&value).to_string(),
            value,
        })
        .collect())
}

/// Distinct metric base names, preferred metrics first, the rest sorted.
pub fn metrics(dataset: &TrialDataset) -> Vec<String> {
    let bases: BTreeSet<&str> = dataset
        .metric_schema()
        .into_iter()
        .filter_map(metric_base_of)
        .collect();
    let mut ordered: Vec<String> = PREFERRED_METRIC_ORDER
        .iter()
        .filter(|metric| bases.contains(*metric))
        .map(|metric| (*metric).to_string())
        .collect();
    ordered.extend(
        bases
            .iter()
            .filter(|base| !PREFERRED_METRIC_ORDER.contains(base))
            .map(|base| (*base).to_string()),
    );
    ordered
}

fn distinct_keys(dataset: &TrialDataset, column: &str) -> Result<BTreeSet<String>> {
    let column = dataset.frame().column(column)?;
    let mut values = BTreeSet::new();
    for row in 0..column.len() {
        if let Some(value) = cell_to_key(column.get(row)?) {
            values.insert(value);
        }
    }
    Ok(values)
}
