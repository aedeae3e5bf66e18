//! Spreadsheet workbooks (`.xlsx` and friends) via `calamine`.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use polars::prelude::DataFrame;

use crate::csv_table::{TextTable, normalize_cell};
use crate::error::{IngestError, Result};

/// Read the first worksheet of a workbook into a [`TextTable`].
///
/// Same rules as the CSV reader: the first non-blank row is the header and
/// fully blank rows are skipped.
pub fn read_xlsx_table(path: &Path) -> Result<TextTable> {
    let mut workbook =
        open_workbook_auto(path).map_err(|source| IngestError::workbook(path, source))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::workbook(path, source))?;
    TextTable::from_rows(path, sheet_rows(&range))
}

/// Read a trial outcome workbook straight into a dataframe.
pub fn read_trial_xlsx(path: &Path) -> Result<DataFrame> {
    read_xlsx_table(path)?.to_frame()
}

fn sheet_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|row| !row.iter().all(String::is_empty))
        .collect()
}

/// Text form of a cell. Whole floats print without a fraction, so a line of
/// therapy typed as `1` reads back as `"1"`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => normalize_cell(s),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
