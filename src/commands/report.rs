//! The `spend report` command: the two display views for a selected category.

use crate::args::ReportArgs;
use crate::commands::{load_transactions, Out, OutputFormat};
use crate::model::{Amount, Transaction};
use crate::render;
use crate::render::{Align, Column};
use crate::report::{by_category, by_category_and_date, top_by_amount, CategoryDayTotal};
use crate::Result;
use anyhow::Context;
use serde::Serialize;

const TRANSACTION_HEADER: [&str; 3] = ["Description", "Category", "Amount"];
const TOTALS_HEADER: [&str; 3] = ["Category", "Transaction Date", "Amount"];

/// The two read-only views produced for a selected category: the transactions sorted by amount
/// descending, and the per-(category, day) totals in first-appearance order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Report {
    category: String,
    transactions: Vec<Transaction>,
    totals: Vec<CategoryDayTotal>,
}

impl Report {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn totals(&self) -> &[CategoryDayTotal] {
        &self.totals
    }
}

/// Runs the full pipeline for the selected category and renders both views. A category with no
/// matching transactions produces empty views, not an error.
pub fn report(args: ReportArgs) -> Result<Out<Report>> {
    let all = load_transactions(args.file())?;
    let filtered = by_category(&all, args.category());
    let report = Report {
        category: args.category().to_string(),
        transactions: top_by_amount(&filtered),
        totals: by_category_and_date(&filtered),
    };
    let message = format!(
        "Category '{}': {} of {} transactions across {} days",
        report.category(),
        report.transactions().len(),
        all.len(),
        report.totals().len()
    );
    let rendered = render_report(&report, args.format())?;
    Ok(Out::new(message, report).rendered(rendered))
}

fn render_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let transactions = render::table(
                &transaction_columns(),
                &transaction_rows(report.transactions(), format),
            );
            let totals =
                render::table(&totals_columns(), &totals_rows(report.totals(), format));
            Ok(format!(
                "Top transactions by amount\n\n{transactions}\n\nDaily category totals\n\n{totals}"
            ))
        }
        OutputFormat::Csv => {
            let transactions = render::csv_string(
                &TRANSACTION_HEADER,
                &transaction_rows(report.transactions(), format),
            )?;
            let totals =
                render::csv_string(&TOTALS_HEADER, &totals_rows(report.totals(), format))?;
            Ok(format!("{transactions}\n{totals}"))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Unable to render report as JSON")
        }
    }
}

fn transaction_columns() -> Vec<Column<'static>> {
    vec![
        Column {
            name: TRANSACTION_HEADER[0],
            align: Align::Left,
        },
        Column {
            name: TRANSACTION_HEADER[1],
            align: Align::Left,
        },
        Column {
            name: TRANSACTION_HEADER[2],
            align: Align::Right,
        },
    ]
}

fn totals_columns() -> Vec<Column<'static>> {
    vec![
        Column {
            name: TOTALS_HEADER[0],
            align: Align::Left,
        },
        Column {
            name: TOTALS_HEADER[1],
            align: Align::Left,
        },
        Column {
            name: TOTALS_HEADER[2],
            align: Align::Right,
        },
    ]
}

fn transaction_rows(transactions: &[Transaction], format: OutputFormat) -> Vec<Vec<String>> {
    transactions
        .iter()
        .map(|t| {
            vec![
                t.description().to_string(),
                t.category().to_string(),
                amount_cell(t.amount(), format),
            ]
        })
        .collect()
}

fn totals_rows(totals: &[CategoryDayTotal], format: OutputFormat) -> Vec<Vec<String>> {
    totals
        .iter()
        .map(|t| {
            vec![
                t.category().to_string(),
                t.transaction_date().to_string(),
                amount_cell(t.amount(), format),
            ]
        })
        .collect()
}

/// Tables get thousands separators for readability; CSV stays machine-parseable.
fn amount_cell(amount: Amount, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => amount.formatted(),
        _ => amount.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_report_groceries() {
        let dir = tempfile::tempdir().unwrap();
        let path = crate::test::sample_file(&dir);
        let out = report(ReportArgs::new(
            Some(path),
            "Groceries",
            OutputFormat::Table,
        ))
        .unwrap();
        let report = out.structure().unwrap();
        assert_eq!(report.transactions().len(), 3);
        assert_eq!(report.totals().len(), 2);
        // Sorted descending: -20.00 first, -50.00 last.
        assert_eq!(report.transactions()[0].description(), "TRADER JOE'S");
        assert_eq!(
            report.transactions()[2].description(),
            "READY REFRESH BY NESTLE"
        );
        assert_eq!(
            report.totals()[0].amount().value(),
            Decimal::from_str("-70.00").unwrap()
        );
        assert_eq!(out.message(), "Category 'Groceries': 3 of 5 transactions across 2 days");
    }

    #[test]
    fn test_report_no_matches_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = crate::test::sample_file(&dir);
        let out = report(ReportArgs::new(Some(path), "Gas", OutputFormat::Table)).unwrap();
        let report = out.structure().unwrap();
        assert!(report.transactions().is_empty());
        assert!(report.totals().is_empty());
    }

    #[test]
    fn test_report_csv_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = crate::test::sample_file(&dir);
        let out = report(ReportArgs::new(Some(path), "Travel", OutputFormat::Csv)).unwrap();
        let report = out.structure().unwrap();
        let rendered = render_report(report, OutputFormat::Csv).unwrap();
        assert!(rendered.contains("Description,Category,Amount"));
        assert!(rendered.contains("UNITED AIRLINES,Travel,-200.00"));
        assert!(rendered.contains("Category,Transaction Date,Amount"));
        assert!(rendered.contains("Travel,2024-01-03,-200.00"));
    }

    #[test]
    fn test_report_json_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = crate::test::sample_file(&dir);
        let out = report(ReportArgs::new(Some(path), "Travel", OutputFormat::Json)).unwrap();
        let report = out.structure().unwrap();
        let rendered = render_report(report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["category"], "Travel");
        assert_eq!(value["totals"][0]["amount"], "-200.00");
    }

    #[test]
    fn test_report_missing_file_is_error() {
        let result = report(ReportArgs::new(
            Some("/no/such/file.csv".into()),
            "Travel",
            OutputFormat::Table,
        ));
        assert!(result.is_err());
    }
}
