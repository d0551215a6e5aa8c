//! The `spend summary` command: totals and per-group averages for an activity view.

use crate::args::SummaryArgs;
use crate::commands::{load_transactions, Out, OutputFormat};
use crate::render;
use crate::report::{summarize, Summary};
use crate::Result;
use anyhow::Context;

const SUMMARY_HEADER: [&str; 5] = [
    "Transactions",
    "Categories",
    "Day Groups",
    "Total Amount",
    "Mean Per Group",
];

/// Computes summary statistics over the whole file, or over one category when requested.
pub fn summary(args: SummaryArgs) -> Result<Out<Summary>> {
    let transactions = load_transactions(args.file())?;
    let summary = summarize(&transactions, args.category());
    let message = match summary.category() {
        Some(category) => format!(
            "Summarized {} transactions in category '{}'",
            summary.transaction_count(),
            category
        ),
        None => format!("Summarized {} transactions", summary.transaction_count()),
    };
    let rendered = render_summary(&summary, args.format())?;
    Ok(Out::new(message, summary).rendered(rendered))
}

fn render_summary(summary: &Summary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let entries = [
                ("Transactions:", summary.transaction_count().to_string()),
                ("Categories:", summary.category_count().to_string()),
                ("Day groups:", summary.group_count().to_string()),
                ("Total amount:", summary.total_amount().formatted()),
                ("Mean per group:", summary.mean_per_group().formatted()),
            ];
            Ok(render::key_value_rows(&entries))
        }
        OutputFormat::Csv => {
            let row = vec![
                summary.transaction_count().to_string(),
                summary.category_count().to_string(),
                summary.group_count().to_string(),
                summary.total_amount().to_string(),
                summary.mean_per_group().to_string(),
            ];
            render::csv_string(&SUMMARY_HEADER, &[row])
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).context("Unable to render summary as JSON")
        }
    }
}
