//! The `spend categories` command: the selectable category values.

use crate::args::CategoriesArgs;
use crate::commands::{load_transactions, Out};
use crate::report;
use crate::Result;

/// Lists the distinct category values in the activity data, in the order they first appear.
pub fn categories(args: CategoriesArgs) -> Result<Out<Vec<String>>> {
    let transactions = load_transactions(args.file())?;
    let categories = report::categories(&transactions);
    let message = match categories.len() {
        0 => "No categories found".to_string(),
        n => format!("Found {n} categories"),
    };
    let rendered = categories.join("\n");
    let mut out = Out::new(message, categories);
    if !rendered.is_empty() {
        out = out.rendered(rendered);
    }
    Ok(out)
}
