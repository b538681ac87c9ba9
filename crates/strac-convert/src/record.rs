//! Materializing source records from raw rows.

use strac_model::{SourceRecord, StracColumn};

use crate::header::HeaderIndex;

/// Build a [`SourceRecord`] from one data row using the header index.
///
/// Columns without an index entry, and indexed positions past the end of
/// the row, read as empty. This never fails on its own; rows whose width
/// contradicts the header are rejected earlier by the CSV reader.
pub fn materialize(row: &csv::StringRecord, index: &HeaderIndex) -> SourceRecord {
    let mut record = SourceRecord::new();
    for column in StracColumn::ALL {
        if let Some(position) = index.position(column) {
            record.set(column, row.get(position).unwrap_or(""));
        }
    }
    record
}
