//! Budget service
//!
//! Stores per-category monthly limits and compares each budget row against
//! the summed expense transactions for its category.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetId, Money, UserId};
use crate::storage::Storage;

/// Service for budget limits and spending checks
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// The result of checking one budget row against actual spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
}

impl BudgetStatus {
    /// Whether this row's limit is exceeded
    ///
    /// Strict inequality: spending exactly equal to the limit is not a
    /// violation.
    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Store a monthly limit for a category
    ///
    /// The limit is taken as entered and must parse as a monetary value
    /// ([`FinanceError::InvalidAmount`] otherwise). Rows accumulate: setting
    /// a budget for an existing category adds another independent row rather
    /// than overwriting.
    pub fn set_budget(&self, user: UserId, category: &str, limit: &str) -> FinanceResult<BudgetId> {
        let limit = Money::parse(limit)
            .map_err(|_| FinanceError::InvalidAmount(limit.trim().to_string()))?;

        self.storage.insert_budget(user, category.trim(), limit)
    }

    /// List the user's budget rows
    pub fn list_budgets(&self, user: UserId) -> FinanceResult<Vec<Budget>> {
        self.storage.list_budgets(user)
    }

    /// Check every budget row against the summed expense spending for its
    /// category
    ///
    /// Each row is checked independently: two rows sharing a category both
    /// appear in the result, compared against the same spent total.
    pub fn check_budgets(&self, user: UserId) -> FinanceResult<Vec<BudgetStatus>> {
        let budgets = self.storage.list_budgets(user)?;

        let mut statuses = Vec::with_capacity(budgets.len());
        for budget in budgets {
            let spent = self.storage.sum_expense_by_category(user, &budget.category)?;
            statuses.push(BudgetStatus {
                category: budget.category,
                limit: budget.monthly_limit,
                spent,
            });
        }

        Ok(statuses)
    }
}
