//! Ledger service
//!
//! Appends transactions to a user's ledger, lists them, and computes the
//! income/expense/savings report.

use chrono::Local;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionId, UserId};
use crate::storage::Storage;

/// Service for ledger transactions and reporting
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

/// Aggregate totals for a user's ledger
///
/// `savings` is exactly `income - expense` and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub income: Money,
    pub expense: Money,
    pub savings: Money,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a transaction for the given user
    ///
    /// The amount is taken as entered and must parse as a monetary value
    /// ([`FinanceError::InvalidAmount`] otherwise). The kind is lowercased
    /// and passed through loosely; the storage constraint is the enforcement
    /// point and rejects anything outside {income, expense}. The date is
    /// always today at insertion time, never backdated.
    pub fn add_transaction(
        &self,
        user: UserId,
        kind: &str,
        category: &str,
        amount: &str,
    ) -> FinanceResult<TransactionId> {
        let amount = Money::parse(amount)
            .map_err(|_| FinanceError::InvalidAmount(amount.trim().to_string()))?;
        let kind = kind.trim().to_lowercase();
        let date = Local::now().date_naive();

        self.storage
            .insert_transaction(user, &kind, category.trim(), amount, date)
    }

    /// List the user's transactions
    ///
    /// Ordering is whatever storage returns; callers needing chronological
    /// order must sort.
    pub fn list_transactions(&self, user: UserId) -> FinanceResult<Vec<Transaction>> {
        self.storage.list_transactions(user)
    }

    /// Compute the user's financial report
    pub fn report(&self, user: UserId) -> FinanceResult<Report> {
        let totals = self.storage.sum_by_kind(user)?;

        Ok(Report {
            income: totals.income,
            expense: totals.expense,
            savings: totals.income - totals.expense,
        })
    }
}
