//! Row selection by cancer type and line of therapy.

use std::collections::BTreeSet;

use ici_common::cell_to_key;
use ici_model::FilterCriteria;
use polars::prelude::{BooleanChunked, NewChunkedArray};
use tracing::{debug, warn};

use crate::dataset::TrialDataset;
use crate::error::Result;

/// Keep rows whose cancer type and line of therapy both equal the criteria.
///
/// Comparison is exact on the cell's string form, so an integer line `1`
/// matches the criterion `"1"`. Blank cells never match. Row order is
/// preserved and an empty result is valid.
pub fn filter_rows(dataset: &TrialDataset, criteria: &FilterCriteria) -> Result<TrialDataset> {
    let keys = dataset.keys();
    let frame = dataset.frame();
    let cancer = frame.column(&keys.cancer_type)?;
    let line = frame.column(&keys.line_of_therapy)?;

    let mut mask = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let keep = cell_to_key(cancer.get(row)?).as_deref() == Some(criteria.cancer_type.as_str())
            && cell_to_key(line.get(row)?).as_deref() == Some(criteria.line_of_therapy.as_str());
        mask.push(keep);
    }
    let mask = BooleanChunked::from_slice("mask".into(), &mask);
    let filtered = dataset.derived(frame.filter(&mask)?);
    debug!(
        cancer_type = %criteria.cancer_type,
        line_of_therapy = %criteria.line_of_therapy,
        matched = filtered.height(),
        total = dataset.height(),
        "filtered trial rows"
    );
    warn_on_repeated_regimens(&filtered, criteria)?;
    Ok(filtered)
}

/// A regimen should appear once per (cancer type, line) group. Repeats are
/// passed through untouched and reported.
fn warn_on_repeated_regimens(filtered: &TrialDataset, criteria: &FilterCriteria) -> Result<()> {
    let mut seen = BTreeSet::new();
    let mut repeated = BTreeSet::new();
    for row in 0..filtered.height() {
        let regimen = filtered.regimen_at(row)?;
        if !seen.insert(regimen.clone()) {
            repeated.insert(regimen);
        }
    }
    for regimen in &repeated {
        warn!(
            cancer_type = %criteria.cancer_type,
            line_of_therapy = %criteria.line_of_therapy,
            regimen = %regimen,
            "regimen appears more than once in group"
        );
    }
    Ok(())
}
