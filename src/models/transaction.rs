//! Transaction model
//!
//! Represents a single income or expense event in a user's ledger.
//! Transactions are immutable once created and are never deleted.

use chrono::NaiveDate;
use std::fmt;

use super::ids::{TransactionId, UserId};
use super::money::Money;

/// Kind of a ledger transaction
///
/// The accepted set is enforced by the storage layer's CHECK constraint;
/// this enum is used when reading rows back and for display. Anything
/// outside the set is rejected at insert time, never silently persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse a kind from its storage representation (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Storage representation (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Display representation (upper-case, per the listing contract)
    pub fn as_upper(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger entry belonging to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Row id assigned by storage on insert
    pub id: TransactionId,

    /// Owning user
    pub user_id: UserId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-text category (not validated against budgets)
    pub category: String,

    /// Amount in cents
    pub amount: Money,

    /// Calendar date of creation, never user-supplied or backdated
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("EXPENSE"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse(" expense "), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("transfer"), None);
        assert_eq!(TransactionKind::parse(""), None);
    }

    #[test]
    fn test_kind_representations() {
        assert_eq!(TransactionKind::Income.as_str(), "income");
        assert_eq!(TransactionKind::Income.as_upper(), "INCOME");
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
    }
}
