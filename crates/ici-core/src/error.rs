use ici_model::ModelError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Structural failures of a pipeline call.
///
/// Unmatched selections are not errors; they produce an empty table.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("dataset has no columns")]
    EmptySchema,

    #[error("dataset is missing required column `{column}`")]
    MissingColumn { column: String },

    #[error("required selection `{criterion}` was not provided")]
    MissingCriterion { criterion: &'static str },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
