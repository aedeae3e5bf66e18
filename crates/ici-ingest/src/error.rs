use std::path::PathBuf;

use polars::prelude::PolarsError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {path} has no worksheet")]
    NoWorksheet { path: PathBuf },

    #[error("table {path} has no header row")]
    EmptyFile { path: PathBuf },

    #[error("table {path} has duplicate column `{header}`")]
    DuplicateHeader { path: PathBuf, header: String },

    #[error("failed to build dataframe: {0}")]
    Polars(#[from] PolarsError),
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn workbook(path: impl Into<PathBuf>, source: calamine::Error) -> Self {
        Self::Workbook {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
