//! Long table → polars frame, for plotting collaborators that consume frames.

use ici_model::LongTable;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

pub const REGIMEN_COLUMN: &str = "regimen";
pub const COMPONENT_COLUMN: &str = "component";
pub const VALUE_COLUMN: &str = "value";

/// Build a `regimen`, `component`, `value` frame; missing values are nulls.
pub fn long_table_to_frame(table: &LongTable) -> crate::Result<DataFrame> {
    let regimens: Vec<&str> = table.iter().map(|r| r.regimen.as_str()).collect();
    let components: Vec<&str> = table.iter().map(|r| r.component.as_str()).collect();
    let values: Vec<Option<f64>> = table.iter().map(|r| r.value).collect();
    let frame = DataFrame::new(vec![
        Series::new(REGIMEN_COLUMN.into(), regimens).into_column(),
        Series::new(COMPONENT_COLUMN.into(), components).into_column(),
        Series::new(VALUE_COLUMN.into(), values).into_column(),
    ])?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ici_model::LongRecord;

    #[test]
    fn keeps_missing_values_as_nulls() {
        let table = LongTable::new(vec![
            LongRecord::new("Nivolumab", "value", Some(0.38)),
            LongRecord::new("Nivolumab", "CI_low", None),
        ]);
        let frame = long_table_to_frame(&table).unwrap();
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.column(VALUE_COLUMN).unwrap().null_count(), 1);
    }

    #[test]
    fn empty_table_gives_empty_frame_with_schema() {
        let frame = long_table_to_frame(&LongTable::empty()).unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), 3);
    }
}
