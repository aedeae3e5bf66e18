//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use ici_core::{DatasetCatalog, MetricSelection, TrialDataset, compute_with_options};
use ici_ingest::read_trial_table;
use ici_model::{ComputeRequest, LongTable};
use tracing::info;

use crate::cli::{CatalogArgs, ComputeArgs, DataArgs};
use crate::config::{AppConfig, load_config};

/// Load configuration and the dataset named by `source`.
pub fn load_dataset(source: &DataArgs) -> Result<(AppConfig, TrialDataset)> {
    let config = load_config(source.config.as_deref())?;
    let dataset = open_dataset(&source.data, &config)?;
    Ok((config, dataset))
}

fn open_dataset(path: &Path, config: &AppConfig) -> Result<TrialDataset> {
    let frame = read_trial_table(path).with_context(|| format!("load dataset: {}", path.display()))?;
    TrialDataset::with_keys(frame, config.columns.clone())
        .with_context(|| format!("invalid dataset: {}", path.display()))
}

/// Run the pipeline for one selection.
pub fn run_compute(args: &ComputeArgs) -> Result<LongTable> {
    let (config, dataset) = load_dataset(&args.source)?;
    let Some(metric) = metric_name(args, &config) else {
        info!("metric selection has no data for the chosen year");
        return Ok(LongTable::empty());
    };
    let request = ComputeRequest {
        cancer_type: args.cancer.clone(),
        line_of_therapy: args.line.clone(),
        metric,
    };
    let options = config.pipeline_options(args.order.map(Into::into));
    let table = compute_with_options(&dataset, &request, options)?;
    info!(records = table.len(), "computed long table");
    Ok(table)
}

/// Build the catalog of choices offered by a dataset.
pub fn run_catalog(args: &CatalogArgs) -> Result<DatasetCatalog> {
    let (config, dataset) = load_dataset(&args.source)?;
    Ok(DatasetCatalog::build(&dataset, &config.line_labels)?)
}

/// The metric to request.
///
/// `None` means the selection itself cannot have data; `Some(None)` means no
/// metric was chosen, which the pipeline reports as a missing selection.
fn metric_name(args: &ComputeArgs, config: &AppConfig) -> Option<Option<String>> {
    if let Some(metric) = &args.metric {
        return Some(Some(metric.clone()));
    }
    match &args.base {
        Some(base) => MetricSelection::new(base.as_str(), args.year.clone())
            .to_metric_name(&config.horizons)
            .map(Some),
        None => Some(None),
    }
}
