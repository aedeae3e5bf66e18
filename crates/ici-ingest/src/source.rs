//! Picking a reader from the file extension.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;

use crate::csv_table::read_trial_csv;
use crate::error::Result;
use crate::workbook::read_trial_xlsx;

/// Extensions handled by the workbook reader.
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Workbook,
}

impl TableFormat {
    /// Workbook for spreadsheet extensions (case-insensitive), CSV otherwise.
    pub fn from_path(path: &Path) -> Self {
        let is_workbook = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                WORKBOOK_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if is_workbook { Self::Workbook } else { Self::Csv }
    }
}

/// Read a trial outcome table in whichever format its extension names.
pub fn read_trial_table(path: &Path) -> Result<DataFrame> {
    let format = TableFormat::from_path(path);
    debug!(path = %path.display(), ?format, "reading trial table");
    match format {
        TableFormat::Csv => read_trial_csv(path),
        TableFormat::Workbook => read_trial_xlsx(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(TableFormat::from_path(Path::new("third_clean.xlsx")), TableFormat::Workbook);
        assert_eq!(TableFormat::from_path(Path::new("TRIALS.XLSX")), TableFormat::Workbook);
        assert_eq!(TableFormat::from_path(Path::new("trials.csv")), TableFormat::Csv);
        assert_eq!(TableFormat::from_path(Path::new("trials")), TableFormat::Csv);
    }
}
