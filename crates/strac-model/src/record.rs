//! Decoded representation of one STRAC input row.

use crate::schema::StracColumn;

/// One decoded input row, queryable by canonical column.
///
/// Columns whose canonical name was absent from the input header resolve to
/// an empty string rather than erroring. Records are built fresh per row and
/// carry no cross-row state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    values: Vec<String>,
}

impl SourceRecord {
    /// An empty record: every canonical column resolves to "".
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); StracColumn::COUNT],
        }
    }

    /// Value for a canonical column, or "" when the column was not present.
    pub fn get(&self, column: StracColumn) -> &str {
        self.values
            .get(column.ordinal())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set(&mut self, column: StracColumn, value: impl Into<String>) {
        self.values[column.ordinal()] = value.into();
    }

    /// True when every canonical column is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_columns_read_empty() {
        let record = SourceRecord::new();
        assert_eq!(record.get(StracColumn::PtFname), "");
        assert!(record.is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut record = SourceRecord::new();
        record.set(StracColumn::PtFname, "Jane");
        record.set(StracColumn::PtLname, "Doe");
        assert_eq!(record.get(StracColumn::PtFname), "Jane");
        assert_eq!(record.get(StracColumn::PtLname), "Doe");
        assert_eq!(record.get(StracColumn::PtZip), "");
        assert!(!record.is_empty());
    }
}
