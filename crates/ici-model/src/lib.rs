//! Data model for immune checkpoint inhibitor trial outcome tables.
//!
//! These types carry no dataframe dependency; they describe what the
//! pipeline accepts and what it hands to the rendering layer.

pub mod criteria;
pub mod error;
pub mod long;
pub mod metric;
pub mod options;

pub use criteria::{ComputeRequest, FilterCriteria};
pub use error::{ModelError, Result};
pub use long::{LongRecord, LongTable};
pub use metric::{METRIC_SEPARATOR, MetricName, metric_base_of};
pub use options::{KeyColumns, ShapeOrder};
