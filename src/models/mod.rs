//! Core data models for the finance manager
//!
//! This module contains the data structures that represent the tracker's
//! domain: users, ledger transactions, and budget rows.

pub mod budget;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use budget::Budget;
pub use ids::{BudgetId, TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
