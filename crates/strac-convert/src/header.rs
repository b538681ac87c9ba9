//! Header validation and indexing.

use std::collections::BTreeMap;

use strac_model::{HeaderIssue, HeaderReport, StracColumn};

/// Position lookup from canonical column to its index in the actual input
/// header. Built once per stream. Canonical columns absent from the input
/// have no entry.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: BTreeMap<StracColumn, usize>,
}

impl HeaderIndex {
    pub fn position(&self, column: StracColumn) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    pub fn contains(&self, column: StracColumn) -> bool {
        self.positions.contains_key(&column)
    }

    /// Number of canonical columns located in the input header.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Validate an input header against the canonical schema and build the
/// position index.
///
/// Scans left to right. Empty cells are skipped outright, which tolerates
/// ragged or padded exports. The first occurrence of a canonical column
/// wins; repeats are duplicate-column errors and do not overwrite the
/// index. Non-canonical names are unexpected-column warnings. Canonical
/// columns never seen become missing-column errors, in schema order.
///
/// Never aborts: always returns a best-effort index plus full diagnostics.
/// The caller decides whether any error is fatal.
pub fn index_header<'a, I>(header: I) -> (HeaderIndex, HeaderReport)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index = HeaderIndex::default();
    let mut report = HeaderReport::default();

    for (position, cell) in header.into_iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        match StracColumn::from_name(cell) {
            Some(column) => {
                if index.contains(column) {
                    report.errors.push(HeaderIssue::Duplicate {
                        column: cell.to_string(),
                    });
                } else {
                    index.positions.insert(column, position);
                }
            }
            None => {
                report.warnings.push(HeaderIssue::Unexpected {
                    column: cell.to_string(),
                });
            }
        }
    }

    for column in StracColumn::ALL {
        if !index.contains(column) {
            report.errors.push(HeaderIssue::NotFound {
                column: column.as_str().to_string(),
            });
        }
    }

    (index, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_header() -> Vec<&'static str> {
        StracColumn::ALL.iter().map(|col| col.as_str()).collect()
    }

    #[test]
    fn full_header_indexes_cleanly() {
        let header = canonical_header();
        let (index, report) = index_header(header.iter().copied());
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(index.len(), StracColumn::COUNT);
        for (pos, column) in StracColumn::ALL.iter().enumerate() {
            assert_eq!(index.position(*column), Some(pos));
        }
    }

    #[test]
    fn empty_header_reports_every_column_missing() {
        let (index, report) = index_header(std::iter::empty());
        assert!(index.is_empty());
        assert_eq!(report.error_count(), StracColumn::COUNT);
        assert!(report
            .errors
            .iter()
            .all(|issue| matches!(issue, HeaderIssue::NotFound { .. })));
    }

    #[test]
    fn missing_columns_error_one_each() {
        let header = ["Pt_Fname", "Pt_Lname"];
        let (index, report) = index_header(header);
        assert_eq!(index.len(), 2);
        assert_eq!(report.error_count(), StracColumn::COUNT - 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn duplicate_keeps_first_position() {
        let mut header = canonical_header();
        header.push("Pt_Fname");
        let (index, report) = index_header(header.iter().copied());
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.errors[0],
            HeaderIssue::Duplicate {
                column: "Pt_Fname".to_string()
            }
        );
        assert_eq!(
            index.position(StracColumn::PtFname),
            Some(StracColumn::PtFname.ordinal())
        );
    }

    #[test]
    fn unexpected_columns_warn_only() {
        let mut header = canonical_header();
        header.insert(0, "Fax_Number");
        let (index, report) = index_header(header.iter().copied());
        assert!(report.errors.is_empty());
        assert_eq!(
            report.warnings,
            vec![HeaderIssue::Unexpected {
                column: "Fax_Number".to_string()
            }]
        );
        // Positions shift by the inserted column.
        assert_eq!(index.position(StracColumn::ReportingFacilityName), Some(1));
    }

    #[test]
    fn empty_cells_are_skipped() {
        let mut header = canonical_header();
        header.insert(3, "");
        header.push("");
        let (_, report) = index_header(header.iter().copied());
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let header = ["pt_fname"];
        let (index, report) = index_header(header);
        assert!(index.is_empty());
        assert_eq!(
            report.warnings,
            vec![HeaderIssue::Unexpected {
                column: "pt_fname".to_string()
            }]
        );
    }
}
