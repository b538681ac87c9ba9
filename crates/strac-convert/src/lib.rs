//! Schema-validated streaming transform engine for STRAC case reports.
//!
//! The pipeline: raw bytes → BOM-stripped reader → header indexer →
//! per-row record materialization → field mapping → CSV emission. Header
//! validation errors are fatal before any output; row-level data quality
//! problems degrade to diagnostics collected in the returned summary.

pub mod bom;
pub mod convert;
pub mod error;
pub mod header;
pub mod mapper;
pub mod record;

pub use bom::strip_bom;
pub use convert::convert;
pub use error::{ConvertError, Result};
pub use header::{HeaderIndex, index_header};
pub use mapper::map_row;
pub use record::materialize;
