//! Wide → long reshaping of filtered trial rows.
//!
//! Each (row, resolved column) pair becomes one [`LongRecord`]. Cells that are
//! empty or not numeric are kept as missing values so that charts can tell
//! "no data" apart from zero.

use ici_common::cell_to_f64;
use ici_model::{LongRecord, LongTable, ShapeOrder};
use polars::prelude::Column;
use tracing::{debug, warn};

use crate::dataset::TrialDataset;
use crate::error::{PipelineError, Result};
use crate::resolver::ResolvedColumn;

/// Melt `filtered` into long format over `columns`.
///
/// The output always has `filtered.height() * columns.len()` records, in the
/// order selected by `order`.
pub fn reshape_long(
    filtered: &TrialDataset,
    columns: &[ResolvedColumn],
    order: ShapeOrder,
) -> Result<LongTable> {
    if columns.is_empty() || filtered.is_empty() {
        return Ok(LongTable::empty());
    }

    let sources = columns
        .iter()
        .map(|resolved| {
            filtered
                .frame()
                .column(&resolved.name)
                .map(|column| (resolved, column))
                .map_err(|_| PipelineError::MissingColumn {
                    column: resolved.name.clone(),
                })
        })
        .collect::<Result<Vec<(&ResolvedColumn, &Column)>>>()?;
    let regimens = (0..filtered.height())
        .map(|row| filtered.regimen_at(row))
        .collect::<Result<Vec<String>>>()?;
    if regimens.iter().any(String::is_empty) {
        warn!("filtered rows include a blank regimen");
    }

    let mut records = Vec::with_capacity(regimens.len() * sources.len());
    match order {
        ShapeOrder::RegimenMajor => {
            for (row, regimen) in regimens.iter().enumerate() {
                for (resolved, column) in &sources {
                    records.push(long_record(regimen, resolved, column, row)?);
                }
            }
        }
        ShapeOrder::ComponentMajor => {
            for (resolved, column) in &sources {
                for (row, regimen) in regimens.iter().enumerate() {
                    records.push(long_record(regimen, resolved, column, row)?);
                }
            }
        }
    }

    let missing = records.iter().filter(|r| r.is_missing()).count();
    debug!(
        records = records.len(),
        missing,
        ?order,
        "reshaped to long format"
    );
    Ok(LongTable::new(records))
}

fn long_record(
    regimen: &str,
    resolved: &ResolvedColumn,
    column: &Column,
    row: usize,
) -> Result<LongRecord> {
    let value = cell_to_f64(column.get(row)?);
    Ok(LongRecord::new(regimen, resolved.component.as_str(), value))
}
