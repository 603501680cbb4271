//! Storage layer for the finance manager
//!
//! A single SQLite database holds the three relations (users, transactions,
//! budgets). Every operation opens its own connection, uses it, and drops it
//! before returning; no handle is held across calls. Each insert commits
//! independently; there are no transactions spanning logical operations.

pub mod budgets;
pub mod transactions;
pub mod users;

pub use transactions::KindTotals;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::FinanceResult;

/// Storage coordinator for the SQLite database
///
/// Holds only the database path; connections are scoped to each operation.
pub struct Storage {
    db_path: PathBuf,
}

impl Storage {
    /// Create a new Storage instance for the given database file
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Get the database file path
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection for a single operation
    pub(crate) fn open(&self) -> FinanceResult<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Idempotently ensure all three tables exist
    ///
    /// Safe to call on every startup; fails only on storage-medium errors.
    pub fn create_schema(&self) -> FinanceResult<()> {
        let conn = self.open()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
                category TEXT NOT NULL,
                amount INTEGER NOT NULL,
                date TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES users(id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS budgets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                category TEXT NOT NULL,
                monthly_limit INTEGER NOT NULL,
                FOREIGN KEY(user_id) REFERENCES users(id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_transactions_user ON transactions(user_id)",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_budgets_user ON budgets(user_id)",
            [],
        )?;

        Ok(())
    }
}
