use crate::model::Amount;
use crate::Result;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Represents a single row from a credit-card activity export.
///
/// Only `transaction_date`, `category` and `amount` participate in the reporting pipeline. The
/// remaining columns, and any columns we do not recognize, are carried through untouched.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    transaction_date: NaiveDate,
    posted_date: String,
    description: String,
    category: String,
    transaction_type: String,
    amount: Amount,
    memo: String,
    other_fields: BTreeMap<String, String>,
}

impl Transaction {
    /// Builds a `Transaction` from a data row, using `headers` to decide which struct field each
    /// value belongs to.
    pub fn from_row<S1, S2, I>(headers: &[S1], values: I) -> Result<Self>
    where
        S1: AsRef<str>,
        S2: Into<String>,
        I: IntoIterator<Item = S2>,
    {
        let mut transaction = Transaction::default();
        for (ix, value) in values.into_iter().map(|s| s.into()).enumerate() {
            let header = headers
                .get(ix)
                .with_context(|| format!("No header found for column index {ix}"))?
                .as_ref();
            transaction.set_with_header(header, value)?;
        }
        Ok(transaction)
    }

    /// Given the `header` name and the `value`, set the appropriate struct field. Values for
    /// headers we do not recognize are kept in `other_fields`.
    pub fn set_with_header<S1, S2>(&mut self, header: S1, value: S2) -> Result<()>
    where
        S1: AsRef<str>,
        S2: Into<String>,
    {
        let header = header.as_ref();
        let value = value.into();

        match TransactionColumn::from_header(header) {
            Ok(col) => match col {
                TransactionColumn::TransactionDate => {
                    self.transaction_date = parse_date(&value).with_context(|| {
                        format!("Invalid value '{value}' in column '{TRANSACTION_DATE_STR}'")
                    })?
                }
                TransactionColumn::PostedDate => self.posted_date = value,
                TransactionColumn::Description => self.description = value,
                TransactionColumn::Category => self.category = value,
                TransactionColumn::Type => self.transaction_type = value,
                TransactionColumn::Amount => {
                    self.amount = Amount::from_str(&value).with_context(|| {
                        format!("Invalid value '{value}' in column '{AMOUNT_STR}'")
                    })?
                }
                TransactionColumn::Memo => self.memo = value,
            },
            Err(_) => {
                let _ = self.other_fields.insert(header.to_string(), value);
            }
        }

        Ok(())
    }

    pub fn transaction_date(&self) -> NaiveDate {
        self.transaction_date
    }

    pub fn posted_date(&self) -> &str {
        &self.posted_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn transaction_type(&self) -> &str {
        &self.transaction_type
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn other_fields(&self) -> &BTreeMap<String, String> {
        &self.other_fields
    }
}

/// Represents the known columns of a credit-card activity export.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionColumn {
    #[default]
    TransactionDate,
    PostedDate,
    Description,
    Category,
    Type,
    Amount,
    Memo,
}

serde_plain::derive_display_from_serialize!(TransactionColumn);
serde_plain::derive_fromstr_from_deserialize!(TransactionColumn);

impl TransactionColumn {
    pub fn from_header(header: impl AsRef<str>) -> Result<TransactionColumn> {
        let header_str = header.as_ref();
        match header_str {
            TRANSACTION_DATE_STR => Ok(TransactionColumn::TransactionDate),
            POSTED_DATE_STR => Ok(TransactionColumn::PostedDate),
            DESCRIPTION_STR => Ok(TransactionColumn::Description),
            CATEGORY_STR => Ok(TransactionColumn::Category),
            TYPE_STR => Ok(TransactionColumn::Type),
            AMOUNT_STR => Ok(TransactionColumn::Amount),
            MEMO_STR => Ok(TransactionColumn::Memo),
            bad => bail!("Invalid transaction column name '{bad}'"),
        }
    }
}

pub(crate) const TRANSACTION_DATE_STR: &str = "Transaction Date";
pub(crate) const POSTED_DATE_STR: &str = "Posted Date";
pub(crate) const DESCRIPTION_STR: &str = "Description";
pub(crate) const CATEGORY_STR: &str = "Category";
pub(crate) const TYPE_STR: &str = "Type";
pub(crate) const AMOUNT_STR: &str = "Amount";
pub(crate) const MEMO_STR: &str = "Memo";

/// The date format card issuers write, e.g. `01/02/2024`.
const ISSUER_DATE_FORMAT: &str = "%m/%d/%Y";

/// ISO dates, e.g. `2024-01-02`, are also accepted.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    for format in [ISSUER_DATE_FORMAT, ISO_DATE_FORMAT] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    bail!("Unable to parse '{s}' as a calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 7] = [
        TRANSACTION_DATE_STR,
        POSTED_DATE_STR,
        DESCRIPTION_STR,
        CATEGORY_STR,
        TYPE_STR,
        AMOUNT_STR,
        MEMO_STR,
    ];

    #[test]
    fn test_from_row() {
        let transaction = Transaction::from_row(
            &HEADERS,
            vec![
                "01/02/2024",
                "01/03/2024",
                "TRADER JOE'S",
                "Groceries",
                "Sale",
                "-20.00",
                "",
            ],
        )
        .unwrap();
        assert_eq!(
            transaction.transaction_date(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(transaction.description(), "TRADER JOE'S");
        assert_eq!(transaction.category(), "Groceries");
        assert_eq!(transaction.transaction_type(), "Sale");
        assert_eq!(transaction.amount().to_string(), "-20.00");
        assert_eq!(transaction.memo(), "");
    }

    #[test]
    fn test_from_row_iso_date() {
        let transaction = Transaction::from_row(
            &[TRANSACTION_DATE_STR, CATEGORY_STR, AMOUNT_STR],
            vec!["2024-01-02", "Travel", "-200.00"],
        )
        .unwrap();
        assert_eq!(
            transaction.transaction_date(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_from_row_unknown_column() {
        let transaction = Transaction::from_row(
            &[TRANSACTION_DATE_STR, CATEGORY_STR, AMOUNT_STR, "Card"],
            vec!["01/02/2024", "Travel", "-200.00", "1234"],
        )
        .unwrap();
        assert_eq!(
            transaction.other_fields().get("Card"),
            Some(&"1234".to_string())
        );
    }

    #[test]
    fn test_from_row_bad_date() {
        let result = Transaction::from_row(
            &[TRANSACTION_DATE_STR, CATEGORY_STR, AMOUNT_STR],
            vec!["yesterday", "Travel", "-200.00"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_row_bad_amount() {
        let result = Transaction::from_row(
            &[TRANSACTION_DATE_STR, CATEGORY_STR, AMOUNT_STR],
            vec!["01/02/2024", "Travel", "two hundred"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_row_empty_amount_is_zero() {
        let transaction = Transaction::from_row(
            &[TRANSACTION_DATE_STR, CATEGORY_STR, AMOUNT_STR],
            vec!["01/02/2024", "Travel", ""],
        )
        .unwrap();
        assert!(transaction.amount().is_zero());
    }

    #[test]
    fn test_column_from_header() {
        assert_eq!(
            TransactionColumn::from_header("Transaction Date").unwrap(),
            TransactionColumn::TransactionDate
        );
        assert!(TransactionColumn::from_header("Account #").is_err());
    }
}
