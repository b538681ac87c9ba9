//! Row mapping: apply a field-specification table to one record.

use strac_model::{FieldTable, RowDiagnostic, SourceRecord};

/// Map one record through the table, producing the output row and any
/// diagnostics, in specification order.
///
/// Row-level problems never abort: an extraction failure or a missing
/// required value degrades to a diagnostic and an empty cell, and an
/// out-of-list value is flagged but written through unchanged. `row_num` is
/// 1-based and appears only in diagnostics.
pub fn map_row(
    record: &SourceRecord,
    row_num: u64,
    table: &FieldTable,
) -> (Vec<String>, Vec<RowDiagnostic>) {
    let mut cells = Vec::with_capacity(table.len());
    let mut diagnostics = Vec::new();

    for spec in table.specs() {
        let Some(extractor) = &spec.extractor else {
            // Deliberately unmapped placeholder column.
            cells.push(String::new());
            continue;
        };

        let value = match extractor.apply(record) {
            Ok(value) => value,
            Err(err) => {
                diagnostics.push(RowDiagnostic::ExtractFailed {
                    row: row_num,
                    field: spec.name.clone(),
                    message: err.to_string(),
                });
                cells.push(String::new());
                continue;
            }
        };

        if spec.required && value.is_empty() {
            diagnostics.push(RowDiagnostic::MissingRequired {
                row: row_num,
                field: spec.name.clone(),
            });
            cells.push(String::new());
            continue;
        }

        if let Some(allowed) = &spec.allowed_values {
            if !allowed.is_empty() && !value.is_empty() && !allowed.contains(&value) {
                diagnostics.push(RowDiagnostic::InvalidValue {
                    row: row_num,
                    field: spec.name.clone(),
                    value: value.clone(),
                });
            }
        }

        cells.push(value);
    }

    (cells, diagnostics)
}
