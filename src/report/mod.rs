//! The reporting pipeline: category filtering, (category, date) aggregation, and the sorted
//! views derived from them.
//!
//! Every function here is a pure projection over the loaded transaction sequence. Nothing is
//! cached or persisted; each command invocation re-runs the pipeline end to end.

mod aggregate;
mod filter;
mod views;

pub use aggregate::{by_category_and_date, CategoryDayTotal};
pub use filter::{by_category, categories};
pub use views::{summarize, top_by_amount, Summary};
