use crate::model::Transaction;

/// Returns the distinct category values observed in `transactions`, in first-seen order. This is
/// the set a category selection is made from.
pub fn categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = Vec::new();
    for transaction in transactions {
        if !seen.iter().any(|c| c == transaction.category()) {
            seen.push(transaction.category().to_string());
        }
    }
    seen
}

/// Returns the ordered subsequence of `transactions` whose category is exactly `category`.
/// Comparison is ordinal; no case folding or spelling normalization is performed. Zero matches
/// yields an empty sequence, which is a valid outcome rather than an error.
pub fn by_category(transactions: &[Transaction], category: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.category() == category)
        .cloned()
        .collect()
}
