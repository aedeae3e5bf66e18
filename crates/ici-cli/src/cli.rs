//! CLI argument definitions for the ICI outcome explorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ici_model::ShapeOrder;

#[derive(Parser)]
#[command(
    name = "ici",
    version,
    about = "Explore immune checkpoint inhibitor trial outcomes",
    long_about = "Filter a trial outcome table by cancer type and line of therapy,\n\
                  then reshape one outcome metric (ORR, PFS, OVS, ...) into\n\
                  one row per regimen and metric component."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the long-format table for one selection.
    Compute(ComputeArgs),

    /// List the cancer types, lines of therapy and metrics in a dataset.
    Catalog(CatalogArgs),
}

/// Dataset location and optional configuration file.
#[derive(Args)]
pub struct DataArgs {
    /// Trial outcome table (CSV, or an .xlsx workbook whose first sheet is read).
    #[arg(long = "data", value_name = "FILE")]
    pub data: PathBuf,

    /// TOML configuration (key column names, order, horizons, line labels).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub source: DataArgs,

    /// Cancer type to filter on (exact match).
    #[arg(long = "cancer", value_name = "CANCER")]
    pub cancer: Option<String>,

    /// Line of therapy to filter on (exact match).
    #[arg(long = "line", value_name = "LINE")]
    pub line: Option<String>,

    /// Metric name as it appears before `_` in column names (e.g. ORR, PFS12).
    #[arg(long = "metric", value_name = "METRIC", conflicts_with_all = ["base", "year"])]
    pub metric: Option<String>,

    /// Base metric (ORR, PFS, OVS); combined with --year for survival metrics.
    #[arg(long = "base", value_name = "BASE")]
    pub base: Option<String>,

    /// Year horizon for PFS/OVS, mapped to months through the configuration.
    #[arg(long = "year", value_name = "YEAR", requires = "base")]
    pub year: Option<String>,

    /// Output row order (overrides the configuration file).
    #[arg(long = "order", value_enum)]
    pub order: Option<OrderArg>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

#[derive(Args)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub source: DataArgs,

    /// Output format (csv is treated as table).
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    RegimenMajor,
    ComponentMajor,
}

impl From<OrderArg> for ShapeOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::RegimenMajor => ShapeOrder::RegimenMajor,
            OrderArg::ComponentMajor => ShapeOrder::ComponentMajor,
        }
    }
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
