//! Transaction display formatting
//!
//! Formats a user's transactions for terminal display. The listing contract
//! is: kind rendered upper-case, amount rendered with a currency marker.
//! Rows appear in whatever order storage returned them.

use crate::models::Transaction;

/// Format a single transaction as a listing row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} | {:7} | {:15} | {:>10}",
        txn.date.format("%Y-%m-%d"),
        txn.kind.as_upper(),
        truncate(&txn.category, 15),
        txn.amount.to_string(),
    )
}

/// Format a list of transactions with a header
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("--- Your Transactions ---\n");
    output.push_str(&format!(
        "{:10} | {:7} | {:15} | {:>10}\n",
        "Date", "Kind", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(51));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
