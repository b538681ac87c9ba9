//! Error types for conversion runs.
//!
//! Only stream-level failures surface here: unreadable or invalid headers,
//! CSV syntax errors, and write failures. Row-level data quality problems
//! are diagnostics, not errors (see `strac_model::report`).

use thiserror::Error;

use strac_model::HeaderReport;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("missing header row")]
    MissingHeader,
    #[error("read header: {0}")]
    ReadHeader(#[source] csv::Error),
    #[error("header validation failed: {} error(s)", report.error_count())]
    HeaderValidation { report: HeaderReport },
    #[error("read row {row}: {source}")]
    ReadRow {
        row: u64,
        #[source]
        source: csv::Error,
    },
    #[error("write row: {0}")]
    WriteRow(#[source] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
