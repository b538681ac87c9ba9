//! STRAC case-report converter CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use strac_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use strac_cli::commands::{run_convert, run_states, run_validate};
use strac_cli::logging::{LogConfig, LogFormat, init_logging};
use strac_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    // Row-level diagnostics never affect the exit status; only fatal
    // stream-level failures do.
    let exit_code = match cli.command {
        Command::Convert(args) => match run_convert(&args) {
            Ok(summary) => {
                if !args.no_summary {
                    print_summary(&summary);
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Validate(args) => match run_validate(&args) {
            Ok(_) => 0,
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::States => {
            run_states();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config.log_data = cli.log_data;
    config
}
