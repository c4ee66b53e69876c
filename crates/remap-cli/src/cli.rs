//! CLI argument definitions for the item remapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "item-remap",
    version,
    about = "Rewrite item identifier strings using a mapping table",
    long_about = "Replace numeric item identifiers inside structured cell strings\n\
                  with human-readable names from a mapping table, preserving the\n\
                  surrounding separators and suffixes exactly."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite one column of a source table using a mapping table.
    Map(MapArgs),

    /// Resolve individual tokens and show which fallback tier fired.
    Lookup(LookupArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the source table (CSV).
    #[arg(long = "source", value_name = "PATH")]
    pub source: PathBuf,

    /// Column letter to read from, e.g. C.
    #[arg(long = "read-col", value_name = "LETTER")]
    pub read_col: String,

    /// Column letter to write to, e.g. F or H.
    #[arg(long = "write-col", value_name = "LETTER")]
    pub write_col: String,

    /// Path to the mapping table (CSV).
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Identifier column letter in the mapping table.
    #[arg(long = "id-col", value_name = "LETTER", default_value = "A")]
    pub id_col: String,

    /// Name column letter in the mapping table.
    #[arg(long = "name-col", value_name = "LETTER", default_value = "B")]
    pub name_col: String,

    /// Keep the prefix on rewritten cells.
    #[arg(long = "keep-prefix")]
    pub keep_prefix: bool,

    /// Prefix text to strip before parsing (restored with --keep-prefix).
    #[arg(long = "prefix", default_value = remap_core::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Skip the first row of the source table.
    #[arg(long = "skip-header-source")]
    pub skip_header_source: bool,

    /// Skip the first row of the mapping table.
    #[arg(long = "skip-header-mapping")]
    pub skip_header_mapping: bool,

    /// Explicit output path (default: source stem + "_mapped").
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write unmatched identifier counts to a CSV report.
    #[arg(long = "unmatched-report", value_name = "PATH")]
    pub unmatched_report: Option<PathBuf>,

    /// Print the run summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Path to the mapping table (CSV).
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Identifier column letter in the mapping table.
    #[arg(long = "id-col", value_name = "LETTER", default_value = "A")]
    pub id_col: String,

    /// Name column letter in the mapping table.
    #[arg(long = "name-col", value_name = "LETTER", default_value = "B")]
    pub name_col: String,

    /// Skip the first row of the mapping table.
    #[arg(long = "skip-header-mapping")]
    pub skip_header_mapping: bool,

    /// Tokens to resolve.
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,
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
