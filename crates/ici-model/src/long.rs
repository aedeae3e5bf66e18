//! Long-format (tidy) output records.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One observation: a single metric component for a single regimen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRecord {
    pub regimen: String,
    /// Column suffix after the metric base, e.g. `CI_low` for `ORR_CI_low`.
    pub component: String,
    /// `None` when the source cell was empty or not numeric.
    pub value: Option<f64>,
}

impl LongRecord {
    pub fn new(regimen: impl Into<String>, component: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            regimen: regimen.into(),
            component: component.into(),
            value,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Ordered sequence of [`LongRecord`]s ready for charting.
///
/// An empty table is a valid result meaning "no data for this selection".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LongTable {
    records: Vec<LongRecord>,
}

impl LongTable {
    pub fn new(records: Vec<LongRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LongRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LongRecord> {
        self.records.iter()
    }

    /// Distinct regimens in first-seen order.
    pub fn regimens(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(|r| r.regimen.as_str()))
    }

    /// Distinct components in first-seen order.
    pub fn components(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(|r| r.component.as_str()))
    }

    /// (regimen, component) pairs that occur more than once.
    ///
    /// A well-formed table has none; duplicates come from a regimen repeated
    /// within a filtered group or from colliding metric columns.
    pub fn duplicate_keys(&self) -> Vec<(&str, &str)> {
        let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for record in &self.records {
            *counts
                .entry((record.regimen.as_str(), record.component.as_str()))
                .or_default() += 1;
        }
        let mut reported = BTreeSet::new();
        let mut duplicates = Vec::new();
        for record in &self.records {
            let key = (record.regimen.as_str(), record.component.as_str());
            if counts.get(&key).copied().unwrap_or(0) > 1 && reported.insert(key) {
                duplicates.push(key);
            }
        }
        duplicates
    }
}

impl From<Vec<LongRecord>> for LongTable {
    fn from(records: Vec<LongRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<LongRecord> for LongTable {
    fn from_iter<I: IntoIterator<Item = LongRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for LongTable {
    type Item = LongRecord;
    type IntoIter = std::vec::IntoIter<LongRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a LongTable {
    type Item = &'a LongRecord;
    type IntoIter = std::slice::Iter<'a, LongRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}
