//! Loading of trial outcome tables.
//!
//! The loaders do not infer cell types: every column comes back
//! as nullable text and numeric coercion is left to the reshaping step.

pub mod csv_table;
pub mod error;
pub mod source;
pub mod workbook;

pub use csv_table::{TextTable, read_csv_table, read_trial_csv};
pub use error::{IngestError, Result};
pub use source::{TableFormat, read_trial_table};
pub use workbook::{read_trial_xlsx, read_xlsx_table};
