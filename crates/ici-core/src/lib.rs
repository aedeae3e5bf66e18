//! Core of the ICI outcome explorer.
//!
//! A user selection (cancer type, line of therapy, metric) is turned into a
//! long-format table in three steps:
//!
//! - **filter**: keep the rows of the chosen (cancer type, line) group
//! - **resolver**: find the `<metric>_<component>` columns of the metric
//! - **reshape**: emit one record per regimen and component
//!
//! [`pipeline::compute`] runs them in order. Unmatched selections yield an
//! empty table; only structurally invalid input is an error.
//!
//! Supporting modules: **catalog** lists the choices a dataset offers,
//! **selection** maps a metric base plus year to a horizon-specific metric,
//! **frame** converts output back into a polars frame.

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod frame;
pub mod pipeline;
pub mod reshape;
pub mod resolver;
pub mod selection;

pub use catalog::{DatasetCatalog, LineLabels, LineOption, PREFERRED_METRIC_ORDER};
pub use dataset::TrialDataset;
pub use error::{PipelineError, Result};
pub use filter::filter_rows;
pub use frame::long_table_to_frame;
pub use pipeline::{PipelineOptions, compute, compute_with_options};
pub use reshape::reshape_long;
pub use resolver::{ResolvedColumn, resolve_for_dataset, resolve_metric_columns};
pub use selection::{HorizonMap, MetricSelection};
