//! Output rendering for long tables and dataset catalogs.

use anyhow::{Context, Result, anyhow};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ici_common::format_numeric;
use ici_core::DatasetCatalog;
use ici_model::LongTable;

/// Shown instead of an empty chart.
pub const NO_DATA_MESSAGE: &str = "No data available for this selection.";

/// Marker for a missing value in human-readable output.
pub const MISSING_MARKER: &str = "-";

/// CSV with a `regimen,component,value` header; missing values are empty.
pub fn render_csv(table: &LongTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["regimen", "component", "value"])?;
    for record in table {
        let value = record.value.map(format_numeric).unwrap_or_default();
        writer.write_record([record.regimen.as_str(), record.component.as_str(), value.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("flush csv output: {}", err.error()))?;
    String::from_utf8(bytes).context("csv output is not UTF-8")
}

/// JSON array of `{regimen, component, value}` objects; missing values are `null`.
pub fn render_json(table: &LongTable) -> Result<String> {
    serde_json::to_string_pretty(table).context("serialize long table")
}

/// Terminal table of the long-format records.
pub fn render_table(table: &LongTable) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Regimen"),
        header_cell("Component"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut out);
    if let Some(column) = out.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for record in table {
        let value = match record.value {
            Some(value) => Cell::new(format_numeric(value)),
            None => dim_cell(MISSING_MARKER),
        };
        out.add_row(vec![
            Cell::new(&record.regimen),
            Cell::new(&record.component),
            value,
        ]);
    }
    out
}

/// Terminal tables for the catalog: one per option list.
pub fn render_catalog(catalog: &DatasetCatalog) -> Vec<(&'static str, Table)> {
    let mut cancers = Table::new();
    cancers.set_header(vec![header_cell("Cancer type")]);
    apply_table_style(&mut cancers);
    for cancer in &catalog.cancer_types {
        cancers.add_row(vec![Cell::new(cancer)]);
    }

    let mut lines = Table::new();
    lines.set_header(vec![header_cell("Line"), header_cell("Label")]);
    apply_table_style(&mut lines);
    for line in &catalog.lines_of_therapy {
        lines.add_row(vec![Cell::new(&line.value), Cell::new(&line.label)]);
    }

    let mut metrics = Table::new();
    metrics.set_header(vec![header_cell("Metric")]);
    apply_table_style(&mut metrics);
    for metric in &catalog.metrics {
        metrics.add_row(vec![Cell::new(metric)]);
    }

    vec![
        ("Cancer types", cancers),
        ("Lines of therapy", lines),
        ("Metrics", metrics),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}
