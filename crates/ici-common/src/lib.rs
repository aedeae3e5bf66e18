//! Shared utilities for the ICI outcome crates.
//!
//! Trial tables arrive with loosely typed cells (numbers as text, `N/A`
//! markers, blanks). This crate turns polars `AnyValue`s into the strings and
//! numbers the pipeline compares and emits.

pub mod cell;

pub use cell::{cell_to_f64, cell_to_key, cell_to_string, format_numeric, parse_f64};
