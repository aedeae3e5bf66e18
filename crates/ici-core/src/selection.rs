//! Turning a (metric base, year) choice into a metric name.
//!
//! Survival metrics are stored per horizon (`PFS12`, `OVS24`, ...) while users
//! pick a base metric and a year. Response rate has no horizon.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Base metric without a time horizon.
pub const RESPONSE_RATE: &str = "ORR";

/// Base metrics that need a horizon suffix.
pub const TIME_TO_EVENT: [&str; 2] = ["PFS", "OVS"];

/// Year → months lookup used to build horizon-specific metric names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HorizonMap(BTreeMap<String, String>);

impl Default for HorizonMap {
    fn default() -> Self {
        Self(BTreeMap::from([
            ("1".to_string(), "12".to_string()),
            ("2".to_string(), "24".to_string()),
        ]))
    }
}

impl HorizonMap {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn months_for(&self, year: &str) -> Option<&str> {
        self.0
            .get(year.trim())
            .map(String::as_str)
            .filter(|months| !months.trim().is_empty())
    }
}

/// A user's metric choice before horizon resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSelection {
    pub base: String,
    pub year: Option<String>,
}

impl MetricSelection {
    pub fn new(base: impl Into<String>, year: Option<String>) -> Self {
        Self {
            base: base.into(),
            year,
        }
    }

    /// The metric name to resolve, or `None` when the selection cannot have
    /// data (blank base, or a survival metric without a mapped year).
    ///
    /// Known bases match case-insensitively; anything else is passed through
    /// unchanged.
    ///
    /// ```
    /// use ici_core::{HorizonMap, MetricSelection};
    ///
    /// let horizons = HorizonMap::default();
    /// let pfs = MetricSelection::new("pfs", Some("1".to_string()));
    /// assert_eq!(pfs.to_metric_name(&horizons).as_deref(), Some("PFS12"));
    /// let orr = MetricSelection::new("ORR", Some("2".to_string()));
    /// assert_eq!(orr.to_metric_name(&horizons).as_deref(), Some("ORR"));
    /// ```
    pub fn to_metric_name(&self, horizons: &HorizonMap) -> Option<String> {
        let base = self.base.trim();
        if base.is_empty() {
            return None;
        }
        let upper = base.to_ascii_uppercase();
        if upper == RESPONSE_RATE {
            return Some(upper);
        }
        if TIME_TO_EVENT.contains(&upper.as_str()) {
            let months = horizons.months_for(self.year.as_deref()?)?;
            return Some(format!("{upper}{months}"));
        }
        Some(base.to_string())
    }
}
