//! Loading of credit-card activity CSV exports into memory.
//!
//! The loader is the only component that touches the input source. It reads the whole file in
//! one pass, validates the header row, and produces the ordered transaction sequence that the
//! reporting pipeline consumes.

use crate::model::{Transaction, AMOUNT_STR, CATEGORY_STR, TRANSACTION_DATE_STR};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The columns the reporting pipeline cannot do without. Anything else is pass-through.
const REQUIRED_HEADERS: [&str; 3] = [TRANSACTION_DATE_STR, CATEGORY_STR, AMOUNT_STR];

/// An error that can occur when loading an activity file.
#[derive(Debug)]
pub enum LoadError {
    /// The input path did not resolve to a readable file.
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The header is missing an expected column, a row has the wrong shape, or a date or amount
    /// field failed to parse. Carries the 1-based CSV line number where known.
    MalformedInput { line: Option<u64>, detail: String },
}

impl LoadError {
    fn malformed(line: Option<u64>, detail: impl Into<String>) -> Self {
        LoadError::MalformedInput {
            line,
            detail: detail.into(),
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FileNotFound { path, .. } => {
                write!(f, "Activity file not found at {}", path.display())
            }
            LoadError::MalformedInput {
                line: Some(line),
                detail,
            } => write!(f, "Malformed input at line {line}: {detail}"),
            LoadError::MalformedInput { line: None, detail } => {
                write!(f, "Malformed input: {detail}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::FileNotFound { source, .. } => Some(source),
            LoadError::MalformedInput { .. } => None,
        }
    }
}

/// Reads an activity file from `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<Transaction>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    read(BufReader::new(file))
}

/// Reads activity data from any reader, e.g. a file or stdin.
pub fn read<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| LoadError::malformed(Some(1), e.to_string()))?
        .clone();
    check_headers(&headers)?;
    let headers: Vec<&str> = headers.iter().collect();

    let mut transactions = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line());
        let transaction = Transaction::from_row(&headers, record.iter())
            .map_err(|e| LoadError::malformed(line, format!("{e:#}")))?;
        transactions.push(transaction);
    }
    debug!("Loaded {} transactions", transactions.len());
    Ok(transactions)
}

/// The header row must name every required column exactly once, and must not name any column
/// twice.
fn check_headers(headers: &csv::StringRecord) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for header in headers.iter() {
        if !seen.insert(header) {
            return Err(LoadError::malformed(
                Some(1),
                format!("Duplicate column '{header}' in header"),
            ));
        }
    }
    for required in REQUIRED_HEADERS {
        if !seen.contains(required) {
            return Err(LoadError::malformed(
                Some(1),
                format!("Missing required column '{required}'"),
            ));
        }
    }
    Ok(())
}

/// A row with a different column count than the header surfaces here as a csv-crate error.
fn csv_error(e: csv::Error) -> LoadError {
    let line = e.position().map(|p| p.line());
    LoadError::malformed(line, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::SAMPLE_ACTIVITY;
    use chrono::NaiveDate;

    #[test]
    fn test_read_sample() {
        let transactions = read(SAMPLE_ACTIVITY.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 5);
        let first = &transactions[0];
        assert_eq!(
            first.transaction_date(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(first.category(), "Groceries");
        assert_eq!(first.amount().to_string(), "-50.00");
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = crate::test::sample_file(&dir);
        let transactions = read_file(&path).unwrap();
        assert_eq!(transactions.len(), 5);
    }

    #[test]
    fn test_file_not_found() {
        let err = read_file("/no/such/activity.csv").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_missing_required_header() {
        let data = "Transaction Date,Description,Amount\n01/02/2024,TRADER JOE'S,-20.00\n";
        let err = read(data.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedInput { line, detail } => {
                assert_eq!(line, Some(1));
                assert!(detail.contains("Category"));
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_header() {
        let data = "Transaction Date,Category,Category,Amount\n01/02/2024,Travel,Travel,-1.00\n";
        let err = read(data.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedInput { detail, .. } => assert!(detail.contains("Duplicate")),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row() {
        let data = "Transaction Date,Category,Amount\n01/02/2024,Travel,-200.00\n01/03/2024,Travel\n";
        let err = read(data.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedInput { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let data = "Transaction Date,Category,Amount\n01/02/2024,Travel,-200.00\n01/03/2024,Travel,oops\n";
        let err = read(data.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedInput { line, detail } => {
                assert_eq!(line, Some(3));
                assert!(detail.contains("Amount"));
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_date() {
        let data = "Transaction Date,Category,Amount\nyesterday,Travel,-200.00\n";
        let err = read(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { .. }));
    }

    #[test]
    fn test_empty_amount_is_zero() {
        let data = "Transaction Date,Category,Amount\n01/02/2024,Travel,\n";
        let transactions = read(data.as_bytes()).unwrap();
        assert!(transactions[0].amount().is_zero());
    }

    #[test]
    fn test_extra_column_passes_through() {
        let data = "Transaction Date,Category,Amount,Card\n01/02/2024,Travel,-200.00,1234\n";
        let transactions = read(data.as_bytes()).unwrap();
        assert_eq!(
            transactions[0].other_fields().get("Card"),
            Some(&"1234".to_string())
        );
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = read("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { .. }));
    }

    #[test]
    fn test_header_only_is_empty_sequence() {
        let data = "Transaction Date,Category,Amount\n";
        let transactions = read(data.as_bytes()).unwrap();
        assert!(transactions.is_empty());
    }
}
