//! STRAC case-report data model.
//!
//! Canonical source schema, decoded records, field-specification tables,
//! and the diagnostic types shared by the conversion engine and CLI.

pub mod record;
pub mod report;
pub mod schema;
pub mod spec;

pub use record::SourceRecord;
pub use report::{ConversionSummary, HeaderIssue, HeaderReport, RowDiagnostic};
pub use schema::StracColumn;
pub use spec::{ExtractError, Extractor, FieldSpec, FieldTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes() {
        let summary = ConversionSummary {
            rows_written: 1,
            header_warnings: vec![],
            diagnostics: vec![RowDiagnostic::MissingRequired {
                row: 1,
                field: "DOB".to_string(),
            }],
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        assert!(json.contains("\"rows_written\":1"));
        assert!(json.contains("missing_required"));
    }
}
