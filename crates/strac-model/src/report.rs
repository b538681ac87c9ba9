//! Validation and diagnostic reporting types.
//!
//! Header issues are produced once per stream by the header indexer; row
//! diagnostics accumulate while streaming. Diagnostics never abort a run by
//! themselves: the converter is a best-effort transform with an audit trail,
//! and partial flagged data beats silently dropped rows.

use std::fmt;

use serde::Serialize;

/// One observation about the input header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderIssue {
    /// A canonical column appeared more than once. Error.
    Duplicate { column: String },
    /// A canonical column was absent from the input header. Error.
    NotFound { column: String },
    /// The header contained a column outside the canonical set. Warning;
    /// the column is ignored thereafter.
    Unexpected { column: String },
}

impl fmt::Display for HeaderIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderIssue::Duplicate { column } => write!(f, "duplicate column: {column}"),
            HeaderIssue::NotFound { column } => write!(f, "column not found: {column}"),
            HeaderIssue::Unexpected { column } => write!(f, "unexpected column: {column}"),
        }
    }
}

/// Result of validating one input header against the canonical schema.
///
/// Errors are fatal to the whole stream; warnings are reported but do not
/// alter output. The indexer itself never aborts, so a report always comes
/// paired with a best-effort index and the caller decides what to do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderReport {
    pub errors: Vec<HeaderIssue>,
    pub warnings: Vec<HeaderIssue>,
}

impl HeaderReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

/// A non-fatal observation about one data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowDiagnostic {
    /// A required field produced an empty value. The cell stays empty.
    MissingRequired { row: u64, field: String },
    /// A value fell outside the field's allow-list. The value is still
    /// written through unchanged; validation is advisory, not corrective.
    InvalidValue {
        row: u64,
        field: String,
        value: String,
    },
    /// The field's extraction rule signalled a failure. The cell stays
    /// empty for that row.
    ExtractFailed {
        row: u64,
        field: String,
        message: String,
    },
}

impl RowDiagnostic {
    pub fn row(&self) -> u64 {
        match self {
            RowDiagnostic::MissingRequired { row, .. }
            | RowDiagnostic::InvalidValue { row, .. }
            | RowDiagnostic::ExtractFailed { row, .. } => *row,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            RowDiagnostic::MissingRequired { field, .. }
            | RowDiagnostic::InvalidValue { field, .. }
            | RowDiagnostic::ExtractFailed { field, .. } => field,
        }
    }
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDiagnostic::MissingRequired { row, field } => {
                write!(f, "row {row}: missing value for {field}")
            }
            RowDiagnostic::InvalidValue { row, field, value } => {
                write!(f, "row {row}: invalid value for {field}: {value}")
            }
            RowDiagnostic::ExtractFailed {
                row,
                field,
                message,
            } => {
                write!(f, "row {row}: extract {field}: {message}")
            }
        }
    }
}

/// Accumulated outcome of one conversion run, returned to the caller.
///
/// This is the explicit diagnostics collector: no global log state, so runs
/// are test-isolated and a future parallel mapper stays possible.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionSummary {
    /// Data rows written to the output (the header row is not counted).
    pub rows_written: u64,
    /// Advisory header warnings from validation.
    pub header_warnings: Vec<HeaderIssue>,
    /// Row diagnostics in emission order.
    pub diagnostics: Vec<RowDiagnostic>,
}

impl ConversionSummary {
    pub fn missing_required_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| matches!(diag, RowDiagnostic::MissingRequired { .. }))
            .count()
    }

    pub fn invalid_value_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| matches!(diag, RowDiagnostic::InvalidValue { .. }))
            .count()
    }

    pub fn extract_failure_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| matches!(diag, RowDiagnostic::ExtractFailed { .. }))
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.header_warnings.is_empty() && self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_messages_match_reporting_format() {
        let dup = HeaderIssue::Duplicate {
            column: "Pt_Fname".to_string(),
        };
        let missing = HeaderIssue::NotFound {
            column: "Sex".to_string(),
        };
        let extra = HeaderIssue::Unexpected {
            column: "Fax".to_string(),
        };
        assert_eq!(dup.to_string(), "duplicate column: Pt_Fname");
        assert_eq!(missing.to_string(), "column not found: Sex");
        assert_eq!(extra.to_string(), "unexpected column: Fax");
    }

    #[test]
    fn diagnostic_messages() {
        let missing = RowDiagnostic::MissingRequired {
            row: 3,
            field: "PatientZipCode".to_string(),
        };
        let invalid = RowDiagnostic::InvalidValue {
            row: 7,
            field: "PatientGender".to_string(),
            value: "F".to_string(),
        };
        assert_eq!(missing.to_string(), "row 3: missing value for PatientZipCode");
        assert_eq!(
            invalid.to_string(),
            "row 7: invalid value for PatientGender: F"
        );
        assert_eq!(missing.row(), 3);
        assert_eq!(invalid.field(), "PatientGender");
    }

    #[test]
    fn summary_counts_by_category() {
        let summary = ConversionSummary {
            rows_written: 2,
            header_warnings: vec![HeaderIssue::Unexpected {
                column: "Fax".to_string(),
            }],
            diagnostics: vec![
                RowDiagnostic::MissingRequired {
                    row: 1,
                    field: "DOB".to_string(),
                },
                RowDiagnostic::InvalidValue {
                    row: 2,
                    field: "Gender".to_string(),
                    value: "X".to_string(),
                },
                RowDiagnostic::InvalidValue {
                    row: 2,
                    field: "Race".to_string(),
                    value: "Y".to_string(),
                },
            ],
        };
        assert_eq!(summary.missing_required_count(), 1);
        assert_eq!(summary.invalid_value_count(), 2);
        assert_eq!(summary.extract_failure_count(), 0);
        assert!(!summary.is_clean());
    }
}
