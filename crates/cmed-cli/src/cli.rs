//! CLI argument definitions for the CMED matcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cmed_ingest::ColumnRef;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cmed",
    version,
    about = "Match procurement notice items against the CMED drug price list",
    long_about = "Match public procurement notice items against the CMED drug price list.\n\n\
                  Items are classified by active ingredient, then narrowed down to the\n\
                  catalog presentations that best match their description and unit."
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

    /// TOML file with catalog, notice and lexicon settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the ingredient clusters of a catalog.
    Group(GroupArgs),

    /// Classify one ingredient against the catalog clusters.
    Classify(ClassifyArgs),

    /// Match every line of a notice against the catalog.
    Match(MatchArgs),
}

#[derive(Parser)]
pub struct GroupArgs {
    /// CMED price list export.
    #[arg(long = "catalog", value_name = "CSV")]
    pub catalog: PathBuf,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// CMED price list export.
    #[arg(long = "catalog", value_name = "CSV")]
    pub catalog: PathBuf,

    /// Ingredient text, normalized like a notice description.
    #[arg(value_name = "INGREDIENT")]
    pub ingredient: String,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// CMED price list export.
    #[arg(long = "catalog", value_name = "CSV")]
    pub catalog: PathBuf,

    /// Procurement notice table.
    #[arg(long = "notice", value_name = "CSV")]
    pub notice: PathBuf,

    /// Description column, by header name or 0-based position.
    #[arg(long = "description-column", value_name = "COLUMN")]
    pub description_column: Option<ColumnRef>,

    /// Unit-of-measure column, by header name or 0-based position.
    #[arg(long = "unit-column", value_name = "COLUMN")]
    pub unit_column: Option<ColumnRef>,

    /// Dedicated ingredient column. Without it the ingredient is taken from
    /// the description.
    #[arg(long = "ingredient-column", value_name = "COLUMN")]
    pub ingredient_column: Option<ColumnRef>,

    /// Notice delimiter.
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
