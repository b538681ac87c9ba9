//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use strac_convert::convert;
use strac_model::{ConversionSummary, FieldTable, RowDiagnostic};

use crate::cli::{ConvertArgs, ValidateArgs};
use crate::logging::{log_data_enabled, redact_value};

pub fn run_convert(args: &ConvertArgs) -> Result<ConversionSummary> {
    let table = resolve_table(args.state.as_deref(), args.spec_file.as_deref())?;
    let input = open_input(args.input.as_deref())?;
    let output = open_output(args.output.as_deref())?;

    let summary = convert(input, output, &table)?;
    log_diagnostics(&summary);
    info!(
        "converted {} row(s), {} diagnostic(s)",
        summary.rows_written,
        summary.diagnostics.len()
    );
    Ok(summary)
}

pub fn run_validate(args: &ValidateArgs) -> Result<ConversionSummary> {
    let table = resolve_table(args.state.as_deref(), args.spec_file.as_deref())?;
    let input = open_input(args.input.as_deref())?;

    // Same pipeline as convert, with the output discarded.
    let summary = convert(input, io::sink(), &table)?;
    log_diagnostics(&summary);
    Ok(summary)
}

pub fn run_states() {
    for id in strac_states::available() {
        println!("{id}");
    }
}

/// Resolve the field table from either a registered jurisdiction or a JSON
/// spec file. The CLI layer guarantees exactly one of the two is set.
fn resolve_table(state: Option<&str>, spec_file: Option<&Path>) -> Result<FieldTable> {
    if let Some(path) = spec_file {
        let file =
            File::open(path).with_context(|| format!("open spec file: {}", path.display()))?;
        return FieldTable::from_json_reader(BufReader::new(file))
            .with_context(|| format!("parse spec file: {}", path.display()));
    }
    let Some(state) = state else {
        bail!("one of --state or --spec-file is required");
    };
    match strac_states::lookup(state) {
        Some(table) => Ok(table),
        None => bail!(
            "state not registered: {state} (available: {})",
            strac_states::available().join(", ")
        ),
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Emit row diagnostics to the log sink. Observed cell values are patient
/// data and stay redacted unless --log-data was passed.
fn log_diagnostics(summary: &ConversionSummary) {
    for diagnostic in &summary.diagnostics {
        match diagnostic {
            RowDiagnostic::MissingRequired { row, field } => {
                warn!("row {row}: missing value for {field}");
            }
            RowDiagnostic::InvalidValue { row, field, value } => {
                warn!("row {row}: invalid value for {field}: {}", redact_value(value));
            }
            RowDiagnostic::ExtractFailed {
                row,
                field,
                message,
            } => {
                if log_data_enabled() {
                    warn!("row {row}: extract {field}: {message}");
                } else {
                    warn!("row {row}: extract {field} failed");
                }
            }
        }
    }
}
