pub mod args;
pub mod commands;
mod error;
mod load;
mod model;
mod render;
mod report;

pub use error::Error;
pub use error::Result;
pub use load::{read, read_file, LoadError};
pub use model::{Amount, AmountError, Transaction, TransactionColumn};
pub use report::{
    by_category, by_category_and_date, categories, summarize, top_by_amount, CategoryDayTotal,
    Summary,
};
