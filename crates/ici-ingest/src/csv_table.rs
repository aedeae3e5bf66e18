use std::collections::BTreeSet;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Raw text table as read from disk: one header row, then data rows padded
/// to the header width. Produced by both the CSV and the workbook readers.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Build a dataframe of nullable string columns.
    ///
    /// Empty cells become nulls. Columns with a blank header are dropped.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.headers.len());
        for (idx, header) in self.headers.iter().enumerate() {
            if header.is_empty() {
                warn!(position = idx, "dropping column with blank header");
                continue;
            }
            let values: Vec<Option<String>> = self
                .rows
                .iter()
                .map(|row| {
                    row.get(idx)
                        .filter(|value| !value.is_empty())
                        .cloned()
                })
                .collect();
            columns.push(Series::new(header.as_str().into(), values).into_column());
        }
        Ok(DataFrame::new(columns)?)
    }

    /// Assemble a table from normalized rows, fully blank rows already removed.
    ///
    /// The first row is the header. Duplicate headers are rejected and data
    /// rows are resized to the header width.
    pub(crate) fn from_rows(path: &Path, raw_rows: Vec<Vec<String>>) -> Result<Self> {
        let mut raw_rows = raw_rows.into_iter();
        let Some(header_row) = raw_rows.next() else {
            return Err(IngestError::EmptyFile {
                path: path.to_path_buf(),
            });
        };
        let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();

        let mut seen = BTreeSet::new();
        for header in headers.iter().filter(|h| !h.is_empty()) {
            if !seen.insert(header.as_str()) {
                return Err(IngestError::DuplicateHeader {
                    path: path.to_path_buf(),
                    header: header.clone(),
                });
            }
        }

        let width = headers.len();
        let rows: Vec<Vec<String>> = raw_rows
            .map(|mut row| {
                if row.len() > width {
                    warn!(
                        extra = row.len() - width,
                        "ignoring cells beyond the header row"
                    );
                }
                row.resize(width, String::new());
                row
            })
            .collect();
        debug!(
            path = %path.display(),
            columns = width,
            rows = rows.len(),
            "read trial table"
        );
        Ok(Self { headers, rows })
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Read a CSV file into a [`TextTable`].
///
/// The first non-blank line is the header row. Fully blank lines are skipped
/// and short rows are padded with empty cells.
pub fn read_csv_table(path: &Path) -> Result<TextTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    TextTable::from_rows(path, raw_rows)
}

/// Read a trial outcome CSV straight into a dataframe.
pub fn read_trial_csv(path: &Path) -> Result<DataFrame> {
    read_csv_table(path)?.to_frame()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_header_whitespace() {
        assert_eq!(normalize_header("  ORR_value "), "ORR_value");
        assert_eq!(normalize_header("\u{feff}cancer_type"), "cancer_type");
        assert_eq!(normalize_header("line  of\ttherapy"), "line of therapy");
    }

    #[test]
    fn blank_cells_become_nulls() {
        let table = TextTable {
            headers: vec!["regimen".to_string(), "ORR_value".to_string()],
            rows: vec![
                vec!["Nivolumab".to_string(), String::new()],
                vec!["Pembrolizumab".to_string(), "0.45".to_string()],
            ],
        };
        let frame = table.to_frame().unwrap();
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.column("ORR_value").unwrap().null_count(), 1);
    }

    #[test]
    fn drops_blank_header_columns() {
        let table = TextTable {
            headers: vec!["regimen".to_string(), String::new()],
            rows: vec![vec!["Nivolumab".to_string(), "stray".to_string()]],
        };
        let frame = table.to_frame().unwrap();
        assert_eq!(frame.width(), 1);
    }
}
