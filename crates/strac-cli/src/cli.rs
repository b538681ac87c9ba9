//! CLI argument definitions for the STRAC converter.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "strac",
    version,
    about = "Convert STRAC case-report CSVs to jurisdiction-specific schemas",
    long_about = "Convert COVID-19 case-report data from the STRAC source format\n\
                  into jurisdiction-specific reporting schemas.\n\n\
                  Header validation errors abort the run before any output is\n\
                  written; row-level data quality problems are logged and do not\n\
                  affect the exit status."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient-level values in log output.
    ///
    /// Diagnostics can quote observed cell values. Those are patient data,
    /// so by default the value is redacted from logs; the output file is
    /// unaffected either way.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a STRAC CSV to a jurisdiction schema.
    Convert(ConvertArgs),

    /// Validate a STRAC CSV without writing output.
    Validate(ValidateArgs),

    /// List registered jurisdiction identifiers.
    States,
}

#[derive(Parser)]
#[command(group = ArgGroup::new("table").required(true).args(["state", "spec_file"]))]
pub struct ConvertArgs {
    /// Input CSV path (stdin when omitted).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output CSV path (stdout when omitted).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Jurisdiction the conversion is performed for.
    #[arg(long = "state", value_name = "ID")]
    pub state: Option<String>,

    /// Load the field-specification table from a JSON file instead of a
    /// built-in jurisdiction.
    #[arg(long = "spec-file", value_name = "PATH")]
    pub spec_file: Option<PathBuf>,

    /// Skip the conversion summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
#[command(group = ArgGroup::new("table").required(true).args(["state", "spec_file"]))]
pub struct ValidateArgs {
    /// Input CSV path (stdin when omitted).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Jurisdiction the validation applies to.
    #[arg(long = "state", value_name = "ID")]
    pub state: Option<String>,

    /// Load the field-specification table from a JSON file instead of a
    /// built-in jurisdiction.
    #[arg(long = "spec-file", value_name = "PATH")]
    pub spec_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_requires_a_table_source() {
        let result = Cli::try_parse_from(["strac", "convert", "in.csv"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["strac", "convert", "--state", "pa", "in.csv"]);
        assert!(result.is_ok());
    }
}
