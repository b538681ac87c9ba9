//! Conversion summary table printed after a successful run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use strac_model::ConversionSummary;

/// Print the summary to stderr; stdout may be carrying the converted CSV.
pub fn print_summary(summary: &ConversionSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![Cell::new("Rows written"), Cell::new(summary.rows_written)]);
    table.add_row(vec![
        Cell::new("Header warnings"),
        count_cell(summary.header_warnings.len()),
    ]);
    table.add_row(vec![
        Cell::new("Missing required values"),
        count_cell(summary.missing_required_count()),
    ]);
    table.add_row(vec![
        Cell::new("Values outside allow-list"),
        count_cell(summary.invalid_value_count()),
    ]);
    table.add_row(vec![
        Cell::new("Extraction failures"),
        count_cell(summary.extract_failure_count()),
    ]);
    eprintln!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
