//! Transaction persistence
//!
//! Row-level operations on the transactions table plus the aggregate queries
//! the reporting and budget layers are built on. The kind CHECK constraint
//! is the single enforcement point for the income/expense set.

use chrono::NaiveDate;
use rusqlite::{params, types::Type};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind, UserId};

use super::Storage;

/// Total amounts grouped by transaction kind
///
/// A kind with no transactions contributes zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindTotals {
    pub income: Money,
    pub expense: Money,
}

impl Storage {
    /// Append a transaction row
    ///
    /// The kind is passed through as entered (lowercased by the caller); the
    /// CHECK constraint rejects anything outside {income, expense}, which is
    /// surfaced as [`FinanceError::InvalidKind`].
    pub fn insert_transaction(
        &self,
        user_id: UserId,
        kind: &str,
        category: &str,
        amount: Money,
        date: NaiveDate,
    ) -> FinanceResult<TransactionId> {
        let conn = self.open()?;

        let result = conn.execute(
            "INSERT INTO transactions (user_id, kind, category, amount, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![user_id.as_i64(), kind, category, amount.cents(), date],
        );

        match result {
            Ok(_) => Ok(TransactionId::from(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(FinanceError::InvalidKind(kind.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List all transactions belonging to a user
    ///
    /// No ORDER BY is applied: rows come back in storage-natural order.
    /// Callers needing chronological order must sort explicitly.
    pub fn list_transactions(&self, user_id: UserId) -> FinanceResult<Vec<Transaction>> {
        let conn = self.open()?;

        let mut stmt = conn.prepare(
            "SELECT id, user_id, kind, category, amount, date
             FROM transactions WHERE user_id = ?1",
        )?;

        let transactions = stmt
            .query_map(params![user_id.as_i64()], |row| {
                let kind_str: String = row.get(2)?;
                let kind = TransactionKind::parse(&kind_str).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        Type::Text,
                        Box::new(FinanceError::InvalidKind(kind_str.clone())),
                    )
                })?;

                Ok(Transaction {
                    id: TransactionId::from(row.get::<_, i64>(0)?),
                    user_id: UserId::from(row.get::<_, i64>(1)?),
                    kind,
                    category: row.get(3)?,
                    amount: Money::from_cents(row.get(4)?),
                    date: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Total amounts per kind for a user
    pub fn sum_by_kind(&self, user_id: UserId) -> FinanceResult<KindTotals> {
        let conn = self.open()?;

        let mut stmt = conn.prepare(
            "SELECT kind, SUM(amount) FROM transactions
             WHERE user_id = ?1 GROUP BY kind",
        )?;

        let mut totals = KindTotals::default();
        let rows = stmt.query_map(params![user_id.as_i64()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        for row in rows {
            let (kind, cents) = row?;
            match TransactionKind::parse(&kind) {
                Some(TransactionKind::Income) => totals.income = Money::from_cents(cents),
                Some(TransactionKind::Expense) => totals.expense = Money::from_cents(cents),
                // Unreachable under the CHECK constraint; an unknown kind in
                // a hand-edited database must not corrupt the known totals.
                None => {}
            }
        }

        Ok(totals)
    }

    /// Total expense amount for one category of a user (zero if none)
    pub fn sum_expense_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> FinanceResult<Money> {
        let conn = self.open()?;

        let cents: i64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM transactions
             WHERE user_id = ?1 AND category = ?2 AND kind = 'expense'",
            params![user_id.as_i64(), category],
            |row| row.get(0),
        )?;

        Ok(Money::from_cents(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::create_test_storage;
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_insert_and_list_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let user = storage.insert_user("alice", "pw1").unwrap();

        storage
            .insert_transaction(user, "income", "Salary", Money::from_cents(100_000), test_date())
            .unwrap();
        storage
            .insert_transaction(user, "expense", "Food", Money::from_cents(5_000), test_date())
            .unwrap();

        let mut listed = storage.list_transactions(user).unwrap();
        listed.sort_by_key(|t| t.id);

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].kind, TransactionKind::Income);
        assert_eq!(listed[0].category, "Salary");
        assert_eq!(listed[0].amount.cents(), 100_000);
        assert_eq!(listed[1].kind, TransactionKind::Expense);
        assert_eq!(listed[1].date, test_date());
    }

    #[test]
    fn test_invalid_kind_rejected_by_constraint() {
        let (_temp_dir, storage) = create_test_storage();
        let user = storage.insert_user("alice", "pw1").unwrap();

        let err = storage
            .insert_transaction(user, "transfer", "Misc", Money::from_cents(100), test_date())
            .unwrap_err();

        assert!(matches!(err, FinanceError::InvalidKind(kind) if kind == "transfer"));
        assert!(storage.list_transactions(user).unwrap().is_empty());
    }

    #[test]
    fn test_sum_by_kind() {
        let (_temp_dir, storage) = create_test_storage();
        let user = storage.insert_user("alice", "pw1").unwrap();

        storage
            .insert_transaction(user, "income", "Salary", Money::from_cents(100_000), test_date())
            .unwrap();
        storage
            .insert_transaction(user, "expense", "Food", Money::from_cents(20_000), test_date())
            .unwrap();
        storage
            .insert_transaction(user, "expense", "Rent", Money::from_cents(10_000), test_date())
            .unwrap();

        let totals = storage.sum_by_kind(user).unwrap();
        assert_eq!(totals.income.cents(), 100_000);
        assert_eq!(totals.expense.cents(), 30_000);
    }

    #[test]
    fn test_sum_by_kind_missing_kind_is_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let user = storage.insert_user("alice", "pw1").unwrap();

        storage
            .insert_transaction(user, "income", "Salary", Money::from_cents(100_000), test_date())
            .unwrap();

        let totals = storage.sum_by_kind(user).unwrap();
        assert_eq!(totals.income.cents(), 100_000);
        assert_eq!(totals.expense.cents(), 0);

        let empty_user = storage.insert_user("bob", "pw2").unwrap();
        assert_eq!(storage.sum_by_kind(empty_user).unwrap(), KindTotals::default());
    }

    #[test]
    fn test_sum_expense_by_category() {
        let (_temp_dir, storage) = create_test_storage();
        let user = storage.insert_user("alice", "pw1").unwrap();

        storage
            .insert_transaction(user, "expense", "Food", Money::from_cents(30_000), test_date())
            .unwrap();
        storage
            .insert_transaction(user, "expense", "Food", Money::from_cents(20_000), test_date())
            .unwrap();
        storage
            .insert_transaction(user, "expense", "Rent", Money::from_cents(90_000), test_date())
            .unwrap();
        // Income in the same category does not count as spending
        storage
            .insert_transaction(user, "income", "Food", Money::from_cents(5_000), test_date())
            .unwrap();

        let spent = storage.sum_expense_by_category(user, "Food").unwrap();
        assert_eq!(spent.cents(), 50_000);

        let none = storage.sum_expense_by_category(user, "Travel").unwrap();
        assert_eq!(none, Money::zero());
    }

    #[test]
    fn test_transactions_are_per_user() {
        let (_temp_dir, storage) = create_test_storage();
        let alice = storage.insert_user("alice", "pw1").unwrap();
        let bob = storage.insert_user("bob", "pw2").unwrap();

        storage
            .insert_transaction(alice, "income", "Salary", Money::from_cents(100), test_date())
            .unwrap();

        assert_eq!(storage.list_transactions(alice).unwrap().len(), 1);
        assert!(storage.list_transactions(bob).unwrap().is_empty());
        assert_eq!(storage.sum_by_kind(bob).unwrap(), KindTotals::default());
    }
}
