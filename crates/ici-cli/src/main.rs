//! ICI outcome explorer CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use ici_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use ici_cli::commands::{run_catalog, run_compute};
use ici_cli::logging::{LogConfig, LogFormat, init_logging};
use ici_cli::render::{NO_DATA_MESSAGE, render_catalog, render_csv, render_json, render_table};
use tracing::error;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match cli.command {
        Command::Compute(args) => run_compute(&args).and_then(|table| {
            match args.output {
                OutputFormatArg::Table if table.is_empty() => println!("{NO_DATA_MESSAGE}"),
                OutputFormatArg::Table => println!("{}", render_table(&table)),
                OutputFormatArg::Csv => print!("{}", render_csv(&table)?),
                OutputFormatArg::Json => println!("{}", render_json(&table)?),
            }
            Ok(())
        }),
        Command::Catalog(args) => run_catalog(&args).and_then(|catalog| {
            if args.output == OutputFormatArg::Json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for (title, table) in render_catalog(&catalog) {
                    println!("{title}");
                    println!("{table}");
                }
            }
            Ok(())
        }),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default().with_level_filter(cli.verbosity.tracing_level_filter());
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
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
