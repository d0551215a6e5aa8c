use crate::model::{Amount, Transaction};
use crate::report::aggregate::total_of;
use crate::report::{by_category, by_category_and_date, categories};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns `transactions` sorted by amount descending.
///
/// The sort is stable, so transactions with equal amounts keep their input order; no secondary
/// key is defined. The input sequence is not modified.
pub fn top_by_amount(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.amount().cmp(&a.amount()));
    sorted
}

/// Summary statistics over an activity view: counts, the exact total, and the mean amount per
/// (category, transaction date) group.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    category: Option<String>,
    transaction_count: usize,
    category_count: usize,
    group_count: usize,
    total_amount: Amount,
    mean_per_group: Amount,
}

impl Summary {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }

    pub fn mean_per_group(&self) -> Amount {
        self.mean_per_group
    }
}

/// Computes summary statistics over the whole sequence, or over one category when `category` is
/// given. A view with no groups has a mean of zero.
pub fn summarize(transactions: &[Transaction], category: Option<&str>) -> Summary {
    let view = match category {
        Some(c) => by_category(transactions, c),
        None => transactions.to_vec(),
    };
    let totals = by_category_and_date(&view);
    let total = total_of(&totals);
    let mean = match totals.len() {
        0 => Decimal::ZERO,
        n => total / Decimal::from(n as u64),
    };
    Summary {
        category: category.map(|c| c.to_string()),
        transaction_count: view.len(),
        category_count: categories(&view).len(),
        group_count: totals.len(),
        total_amount: Amount::new(total),
        mean_per_group: Amount::new(mean),
    }
}
