use crate::model::{Amount, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The sum of all transaction amounts for one (category, transaction date) pair.
///
/// A `CategoryDayTotal` has no identity beyond its key; it is recomputed from the filtered
/// transaction set on every run and never persisted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryDayTotal {
    category: String,
    transaction_date: NaiveDate,
    amount: Amount,
}

impl CategoryDayTotal {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn transaction_date(&self) -> NaiveDate {
        self.transaction_date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Groups `transactions` by (category, transaction date) and sums the amount of each group.
///
/// Grouping is stable: the output order is the order in which each key first appears in the
/// input, not a sort. Summation is exact decimal arithmetic with no rounding, and each key is
/// unique in the output.
pub fn by_category_and_date(transactions: &[Transaction]) -> Vec<CategoryDayTotal> {
    let mut totals: Vec<CategoryDayTotal> = Vec::new();
    let mut index: HashMap<(String, NaiveDate), usize> = HashMap::new();

    for transaction in transactions {
        let key = (
            transaction.category().to_string(),
            transaction.transaction_date(),
        );
        match index.get(&key) {
            Some(&ix) => {
                let total = &mut totals[ix];
                total.amount =
                    Amount::new(total.amount.value() + transaction.amount().value());
            }
            None => {
                index.insert(key, totals.len());
                totals.push(CategoryDayTotal {
                    category: transaction.category().to_string(),
                    transaction_date: transaction.transaction_date(),
                    amount: transaction.amount(),
                });
            }
        }
    }
    totals
}

/// Sums the amounts of `totals`, used for conservation checks and summary output.
pub(crate) fn total_of(totals: &[CategoryDayTotal]) -> Decimal {
    totals.iter().map(|t| t.amount().value()).sum()
}
