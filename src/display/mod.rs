//! Terminal display formatting
//!
//! All user-visible rendering lives here so the services stay free of
//! presentation concerns.

pub mod report;
pub mod transaction;

pub use report::{format_budget_check, format_budget_warning, format_report};
pub use transaction::{format_transaction_list, format_transaction_row};
