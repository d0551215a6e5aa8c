//! Command handlers for the spend CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod categories;
mod report;
mod summary;

use crate::load;
use crate::model::Transaction;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fmt::Debug;
use std::io;
use std::path::Path;
use tracing::{debug, info};

pub use categories::categories;
pub use report::{report, Report};
pub use summary::summary;

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data along with the rendered text that belongs on stdout.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,

    /// The rendered report text, already in the format the user asked for.
    rendered: Option<String>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
            rendered: None,
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
            rendered: None,
        }
    }

    /// Attach rendered text that `print` will write to stdout.
    pub fn rendered<S>(mut self, rendered: S) -> Self
    where
        S: Into<String>,
    {
        self.rendered = Some(rendered.into());
        self
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the rendered text (if any) to stdout, the message to `info!`, and the structured
    /// data (if it exists) as JSON to `debug!`.
    pub fn print(&self) {
        if let Some(rendered) = &self.rendered {
            println!("{rendered}");
        }
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// The output format for report and summary rendering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// An aligned text table.
    #[default]
    Table,
    /// CSV with a header row, quoted the same way the loader reads.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

/// Reads the activity data for a command, from `file` when given or from stdin otherwise.
fn load_transactions(file: Option<&Path>) -> Result<Vec<Transaction>> {
    match file {
        None => load::read(io::stdin().lock()).context("Unable to read activity data from stdin"),
        Some(path) => load::read_file(path)
            .with_context(|| format!("Unable to load activity file {}", path.display())),
    }
}
