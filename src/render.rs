//! Plain-text rendering for the presenter surface.
//!
//! Tables are padded with spaces, numeric columns right-aligned. The CSV renderer reuses the
//! `csv` crate so quoting and escaping match what the loader accepts.

use crate::Result;
use anyhow::Context;

const COLUMN_GAP: usize = 2;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Column<'a> {
    pub(crate) name: &'a str,
    pub(crate) align: Align,
}

/// Renders an aligned text table with a header row and a dashed underline. An empty `rows` slice
/// renders the header alone; an empty view is a valid result, not an error.
pub(crate) fn table(columns: &[Column<'_>], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(ix, column)| {
            rows.iter()
                .map(|row| row.get(ix).map(String::len).unwrap_or(0))
                .chain(std::iter::once(column.name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let gap = " ".repeat(COLUMN_GAP);
    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(column.name, *width, column.align))
        .collect();
    lines.push(header.join(&gap).trim_end().to_string());

    let underline: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    lines.push(underline.join(&gap));

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(ix, (column, width))| {
                pad(row.get(ix).map(String::as_str).unwrap_or(""), *width, column.align)
            })
            .collect();
        lines.push(cells.join(&gap).trim_end().to_string());
    }

    lines.join("\n")
}

/// Renders labeled values with the labels padded to a common width, e.g. for summary output.
pub(crate) fn key_value_rows(entries: &[(&str, String)]) -> String {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .map(|(label, value)| format!("{label:<label_width$}  {value}"))
        .collect::<Vec<String>>()
        .join("\n")
}

fn pad(value: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{value:<width$}"),
        Align::Right => format!("{value:>width$}"),
    }
}

/// Renders a header row plus data rows as CSV text.
pub(crate) fn csv_string(header: &[&str], rows: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(header)
        .context("Unable to write CSV header")?;
    for row in rows {
        writer.write_record(row).context("Unable to write CSV row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Unable to flush CSV output: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
