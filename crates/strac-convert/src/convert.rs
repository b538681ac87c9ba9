//! End-to-end streaming transform.
//!
//! Drives the pipeline: BOM strip, header read and validation, target
//! header emission, then one row in, one row out until end of input. Memory
//! use is O(1) in the row count; only diagnostics accumulate.

use std::io::{Read, Write};

use tracing::{error, warn};

use strac_model::{ConversionSummary, FieldTable};

use crate::bom::strip_bom;
use crate::error::{ConvertError, Result};
use crate::header::index_header;
use crate::mapper::map_row;
use crate::record::materialize;

/// Convert a STRAC CSV stream into the target schema described by `table`.
///
/// Fatal conditions (unreadable header, header-validation errors, CSV
/// syntax errors, write failures) abort the run; header-validation failures
/// abort before any output is written. Row-level problems are collected
/// into the returned [`ConversionSummary`] and never stop the stream.
///
/// Given identical input bytes and an identical table, the output is
/// byte-identical.
pub fn convert<R: Read, W: Write>(
    input: R,
    output: W,
    table: &FieldTable,
) -> Result<ConversionSummary> {
    check_table(table);

    let input = strip_bom(input)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input);

    let mut row = csv::StringRecord::new();
    let has_header = reader
        .read_record(&mut row)
        .map_err(ConvertError::ReadHeader)?;
    if !has_header {
        return Err(ConvertError::MissingHeader);
    }

    let (index, report) = index_header(row.iter());
    for warning in &report.warnings {
        warn!("validation warning: {warning}");
    }
    if report.has_errors() {
        for issue in &report.errors {
            error!("validation error: {issue}");
        }
        return Err(ConvertError::HeaderValidation { report });
    }

    let mut writer = csv::Writer::from_writer(output);
    writer
        .write_record(table.target_header())
        .map_err(ConvertError::WriteRow)?;

    let mut summary = ConversionSummary {
        header_warnings: report.warnings,
        ..ConversionSummary::default()
    };

    let mut row_num: u64 = 0;
    loop {
        match reader.read_record(&mut row) {
            Ok(true) => {}
            Ok(false) => break,
            Err(source) => {
                return Err(ConvertError::ReadRow {
                    row: row_num + 1,
                    source,
                });
            }
        }
        row_num += 1;

        let record = materialize(&row, &index);
        let (cells, diagnostics) = map_row(&record, row_num, table);
        summary.diagnostics.extend(diagnostics);
        writer.write_record(&cells).map_err(ConvertError::WriteRow)?;
    }

    writer.flush()?;
    summary.rows_written = row_num;
    Ok(summary)
}

/// Flag table self-inconsistencies before the stream starts: a spec with no
/// extraction rule cannot satisfy a required flag or an allow-list.
fn check_table(table: &FieldTable) {
    for spec in table.specs() {
        if spec.extractor.is_some() {
            continue;
        }
        if spec
            .allowed_values
            .as_ref()
            .is_some_and(|values| !values.is_empty())
        {
            warn!(
                "column {}: no extractor defined, but a value set defined",
                spec.name
            );
        }
        if spec.required {
            warn!("column {}: no extractor defined, but marked required", spec.name);
        }
    }
}
