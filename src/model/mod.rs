//! Types that represent the core data model, such as `Transaction` and `Amount`.
mod amount;
mod transaction;

pub use amount::{Amount, AmountError};
pub use transaction::{Transaction, TransactionColumn};
pub(crate) use transaction::{AMOUNT_STR, CATEGORY_STR, TRANSACTION_DATE_STR};
