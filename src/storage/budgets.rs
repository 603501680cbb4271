//! Budget persistence
//!
//! Row-level operations on the budgets table. There is deliberately no
//! uniqueness check: several rows may carry the same (user, category) pair
//! and all of them persist independently.

use rusqlite::params;

use crate::error::FinanceResult;
use crate::models::{Budget, BudgetId, Money, UserId};

use super::Storage;

impl Storage {
    /// Append a budget row, returning the assigned id
    pub fn insert_budget(
        &self,
        user_id: UserId,
        category: &str,
        monthly_limit: Money,
    ) -> FinanceResult<BudgetId> {
        let conn = self.open()?;

        conn.execute(
            "INSERT INTO budgets (user_id, category, monthly_limit) VALUES (?1, ?2, ?3)",
            params![user_id.as_i64(), category, monthly_limit.cents()],
        )?;

        Ok(BudgetId::from(conn.last_insert_rowid()))
    }

    /// List all budget rows belonging to a user
    pub fn list_budgets(&self, user_id: UserId) -> FinanceResult<Vec<Budget>> {
        let conn = self.open()?;

        let mut stmt = conn.prepare(
            "SELECT id, user_id, category, monthly_limit
             FROM budgets WHERE user_id = ?1",
        )?;

        let budgets = stmt
            .query_map(params![user_id.as_i64()], |row| {
                Ok(Budget {
                    id: BudgetId::from(row.get::<_, i64>(0)?),
                    user_id: UserId::from(row.get::<_, i64>(1)?),
                    category: row.get(2)?,
                    monthly_limit: Money::from_cents(row.get(3)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(budgets)
    }
}
