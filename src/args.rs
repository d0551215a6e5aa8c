//! These structs provide the CLI interface for the spend CLI.

use crate::commands::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// spend: summarize credit-card activity exports by spending category.
///
/// The purpose of this program is to read the CSV activity export your card issuer produces,
/// let you pick one of the spending categories it contains, and print the transactions and the
/// per-day totals for that category. Each invocation reads the file fresh; nothing is stored
/// between runs.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the categories present in the activity file, in the order they first appear.
    ///
    /// This is the set of values you can pass to `spend report --category`. Category values are
    /// taken from the file as-is; they are case- and spelling-sensitive.
    Categories(CategoriesArgs),

    /// Print the transactions for one category, sorted by amount descending, along with the
    /// per-(category, day) totals.
    Report(ReportArgs),

    /// Print summary statistics: transaction and category counts, the exact total, and the mean
    /// amount per (category, day) group.
    Summary(SummaryArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

impl Common {
    pub fn new(log_level: LevelFilter) -> Self {
        Self { log_level }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

/// Args for the `spend categories` command.
#[derive(Debug, Parser, Clone)]
pub struct CategoriesArgs {
    /// The activity file to read. If not supplied, input will be taken from stdin.
    #[arg(long = "file", short = 'f', env = "SPEND_FILE")]
    file: Option<PathBuf>,
}

impl CategoriesArgs {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Args for the `spend report` command.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// The activity file to read. If not supplied, input will be taken from stdin.
    #[arg(long = "file", short = 'f', env = "SPEND_FILE")]
    file: Option<PathBuf>,

    /// The category to report on, exactly as it appears in the file. Use `spend categories` to
    /// see the selectable values. A category with no matching transactions produces empty
    /// tables.
    #[arg(long, short = 'c')]
    category: String,

    /// The output format for the report tables.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ReportArgs {
    pub fn new(file: Option<PathBuf>, category: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            file,
            category: category.into(),
            format,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Args for the `spend summary` command.
#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// The activity file to read. If not supplied, input will be taken from stdin.
    #[arg(long = "file", short = 'f', env = "SPEND_FILE")]
    file: Option<PathBuf>,

    /// Restrict the summary to one category. When omitted, the whole file is summarized.
    #[arg(long, short = 'c')]
    category: Option<String>,

    /// The output format for the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl SummaryArgs {
    pub fn new(
        file: Option<PathBuf>,
        category: Option<String>,
        format: OutputFormat,
    ) -> Self {
        Self {
            file,
            category,
            format,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
