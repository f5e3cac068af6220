//! CLI argument definitions for Quota Request Studio.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "quota-studio",
    version,
    about = "Quota Request Studio - Categorized, bilingual quota-request tables",
    long_about = "Turn raw quota-request dumps (CSV or JSON) into categorized,\n\
                  bilingual, export-ready tables.\n\n\
                  Renders views in the terminal, copies them to the system\n\
                  clipboard as HTML plus plain text, and writes styled XLSX\n\
                  workbooks with locale-tagged filenames."
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
    /// Render a table view in the terminal.
    Show(ShowArgs),

    /// Copy a table view to the system clipboard as HTML plus plain text.
    Copy(CopyArgs),

    /// Write a table view to XLSX workbooks.
    Export(ExportArgs),

    /// List request categories and their row counts.
    Categories(CategoriesArgs),
}

/// Arguments shared by every table-producing command.
#[derive(Args)]
pub struct TableArgs {
    /// Path to the request dump (.csv or .json).
    #[arg(value_name = "ROWS")]
    pub rows: PathBuf,

    /// Translation dictionary JSON (replaces the embedded asset).
    #[arg(long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Output language for headers and enumerable values.
    #[arg(short = 'l', long = "lang", value_enum, default_value = "en-us")]
    pub lang: LangArg,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Render the unified view with the derived RDQuota identifier column.
    #[arg(long = "by-id")]
    pub by_id: bool,

    /// Render one table per category instead of the unified view.
    #[arg(long = "per-category")]
    pub per_category: bool,
}

#[derive(Args)]
pub struct CopyArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Copy a single category's table instead of the unified view.
    #[arg(long = "category", value_name = "NAME")]
    pub category: Option<String>,

    /// Copy the unified view with the derived RDQuota identifier column.
    #[arg(long = "by-id")]
    pub by_id: bool,

    /// Title heading for the copied fragment (default: the view title).
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Export the unified view with the derived RDQuota identifier column.
    #[arg(long = "by-id")]
    pub by_id: bool,

    /// Write one workbook per category instead of the unified workbook.
    #[arg(long = "per-category")]
    pub per_category: bool,

    /// Directory the workbooks are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct CategoriesArgs {
    /// Path to the request dump (.csv or .json).
    #[arg(value_name = "ROWS")]
    pub rows: PathBuf,
}

/// CLI language choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LangArg {
    /// English (United States).
    EnUs,
    /// Brazilian Portuguese.
    PtBr,
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
