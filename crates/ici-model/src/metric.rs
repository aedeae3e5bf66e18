//! Metric identifiers.
//!
//! A metric is the logical name a user picks (e.g. `ORR`). Its concrete data
//! columns are named `<metric>_<component>`, so `ORR_value` and `ORR_CI_low`
//! both belong to `ORR`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Separator between a metric base name and its component suffix.
pub const METRIC_SEPARATOR: char = '_';

/// A validated, non-empty metric name.
///
/// Matching against column names is case-sensitive; the name is stored
/// exactly as given. Whitespace is not trimmed, so `"  "` is a valid name
/// that simply matches no column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MetricName(String);

impl MetricName {
    /// Create a metric name, rejecting empty input.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyMetricName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The column prefix owned by this metric, e.g. `ORR_`.
    pub fn column_prefix(&self) -> String {
        format!("{}{METRIC_SEPARATOR}", self.0)
    }

    /// Returns the component suffix if `column` belongs to this metric.
    ///
    /// ```
    /// use ici_model::MetricName;
    ///
    /// let orr = MetricName::new("ORR").unwrap();
    /// assert_eq!(orr.component_of("ORR_CI_low"), Some("CI_low"));
    /// assert_eq!(orr.component_of("ORRX_value"), None);
    /// assert_eq!(orr.component_of("orr_value"), None);
    /// ```
    pub fn component_of<'a>(&self, column: &'a str) -> Option<&'a str> {
        column
            .strip_prefix(self.0.as_str())
            .and_then(|rest| rest.strip_prefix(METRIC_SEPARATOR))
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MetricName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for MetricName {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MetricName> for String {
    fn from(value: MetricName) -> Self {
        value.0
    }
}

/// Base name of a metric column: the text before the first separator.
///
/// Returns `None` for columns without a separator or with an empty base.
pub fn metric_base_of(column: &str) -> Option<&str> {
    let (base, _) = column.split_once(METRIC_SEPARATOR)?;
    if base.is_empty() { None } else { Some(base) }
}
