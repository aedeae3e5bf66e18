//! Filter → resolve → reshape orchestration.

use ici_model::{ComputeRequest, FilterCriteria, LongTable, MetricName, ShapeOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn};

use crate::dataset::TrialDataset;
use crate::error::{PipelineError, Result};
use crate::filter::filter_rows;
use crate::reshape::reshape_long;
use crate::resolver::resolve_for_dataset;

/// Options applied to every pipeline call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub order: ShapeOrder,
}

impl PipelineOptions {
    #[must_use]
    pub fn with_order(mut self, order: ShapeOrder) -> Self {
        self.order = order;
        self
    }
}

/// Compute the long-format table for one selection with default options.
///
/// # Errors
///
/// Fails only on structural problems: a selection that was not supplied at
/// all, or an empty metric name. Supplied values that match nothing,
/// whitespace included, return an empty table.
pub fn compute(dataset: &TrialDataset, request: &ComputeRequest) -> Result<LongTable> {
    compute_with_options(dataset, request, PipelineOptions::default())
}

/// Compute the long-format table for one selection.
pub fn compute_with_options(
    dataset: &TrialDataset,
    request: &ComputeRequest,
    options: PipelineOptions,
) -> Result<LongTable> {
    let (criteria, metric) = validate_request(request)?;
    let span = info_span!(
        "compute",
        cancer_type = %criteria.cancer_type,
        line_of_therapy = %criteria.line_of_therapy,
        metric = %metric,
    );
    let _guard = span.enter();

    let filtered = filter_rows(dataset, &criteria)?;
    if filtered.is_empty() {
        debug!("no rows match selection");
        return Ok(LongTable::empty());
    }

    let columns = resolve_for_dataset(dataset, &metric);
    if columns.is_empty() {
        debug!("metric has no columns in dataset");
        return Ok(LongTable::empty());
    }

    let table = reshape_long(&filtered, &columns, options.order)?;
    let duplicates = table.duplicate_keys();
    if !duplicates.is_empty() {
        warn!(
            count = duplicates.len(),
            "output has repeated (regimen, component) keys"
        );
    }
    Ok(table)
}

fn validate_request(request: &ComputeRequest) -> Result<(FilterCriteria, MetricName)> {
    let cancer_type = required(request.cancer_type.as_deref(), "cancer_type")?;
    let line_of_therapy = required(request.line_of_therapy.as_deref(), "line_of_therapy")?;
    let metric = request
        .metric
        .as_deref()
        .ok_or(PipelineError::MissingCriterion {
            criterion: "metric",
        })?;
    let metric = MetricName::new(metric)?;
    Ok((FilterCriteria::new(cancer_type, line_of_therapy), metric))
}

fn required<'a>(value: Option<&'a str>, criterion: &'static str) -> Result<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(PipelineError::MissingCriterion { criterion }),
    }
}
