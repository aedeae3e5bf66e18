//! Validated ownership of a raw trial table.

use ici_common::cell_to_string;
use ici_model::KeyColumns;
use polars::prelude::{AnyValue, DataFrame};

use crate::error::{PipelineError, Result};

/// A trial outcome table with its key columns checked.
///
/// The frame is never mutated; filtering produces a new `TrialDataset`
/// sharing the same key column names.
#[derive(Debug, Clone)]
pub struct TrialDataset {
    frame: DataFrame,
    keys: KeyColumns,
}

impl TrialDataset {
    /// Wrap a frame using the default key column names.
    pub fn new(frame: DataFrame) -> Result<Self> {
        Self::with_keys(frame, KeyColumns::default())
    }

    /// Wrap a frame, failing when the schema is empty or a key column is absent.
    pub fn with_keys(frame: DataFrame, keys: KeyColumns) -> Result<Self> {
        keys.validate()?;
        if frame.width() == 0 {
            return Err(PipelineError::EmptySchema);
        }
        for (_, name) in keys.roles() {
            if frame.column(name).is_err() {
                return Err(PipelineError::MissingColumn {
                    column: name.to_string(),
                });
            }
        }
        Ok(Self { frame, keys })
    }

    /// Build a dataset from an already validated parent. Used by the row filter.
    pub(crate) fn derived(&self, frame: DataFrame) -> Self {
        Self {
            frame,
            keys: self.keys.clone(),
        }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn keys(&self) -> &KeyColumns {
        &self.keys
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// All column names in schema order.
    pub fn schema(&self) -> Vec<&str> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect()
    }

    /// Column names in schema order, key columns excluded.
    pub fn metric_schema(&self) -> Vec<&str> {
        self.schema()
            .into_iter()
            .filter(|name| !self.keys.contains(name))
            .collect()
    }

    /// Regimen label of `row`, empty when blank.
    pub(crate) fn regimen_at(&self, row: usize) -> Result<String> {
        Ok(cell_to_string(self.cell(&self.keys.regimen, row)?))
    }

    pub(crate) fn cell(&self, column: &str, row: usize) -> Result<AnyValue<'_>> {
        let column = self
            .frame
            .column(column)
            .map_err(|_| PipelineError::MissingColumn {
                column: column.to_string(),
            })?;
        Ok(column.get(row)?)
    }
}
