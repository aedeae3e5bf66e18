//! Metric name → column resolution.
//!
//! A column belongs to metric `m` exactly when its name starts with `m_`.
//! Resolution is a pure function of the metric and the schema order, so the
//! same inputs always produce the same sequence.

use ici_model::MetricName;
use tracing::debug;

use crate::dataset::TrialDataset;

/// A schema column matched to a metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Full column name, e.g. `ORR_CI_low`.
    pub name: String,
    /// Suffix after `<metric>_`, e.g. `CI_low`.
    pub component: String,
}

/// Resolve `metric` against an explicit column list.
///
/// Output follows schema order. Repeated names are all returned; nothing is
/// deduplicated here.
pub fn resolve_metric_columns<S: AsRef<str>>(
    metric: &MetricName,
    schema: &[S],
) -> Vec<ResolvedColumn> {
    schema
        .iter()
        .filter_map(|column| {
            let name = column.as_ref();
            metric.component_of(name).map(|component| ResolvedColumn {
                name: name.to_string(),
                component: component.to_string(),
            })
        })
        .collect()
}

/// Resolve `metric` against the dataset's non-key columns.
pub fn resolve_for_dataset(dataset: &TrialDataset, metric: &MetricName) -> Vec<ResolvedColumn> {
    let resolved = resolve_metric_columns(metric, &dataset.metric_schema());
    debug!(
        metric = %metric,
        columns = resolved.len(),
        "resolved metric columns"
    );
    resolved
}
