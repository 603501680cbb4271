//! Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the finance manager: a
//! single-user-at-a-time tracker that registers and authenticates users,
//! records income/expense transactions, reports aggregate totals, and checks
//! spending against per-category monthly budgets. Everything persists in a
//! single SQLite database with three tables.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the database file
//! - `error`: Custom error types
//! - `models`: Core data models (users, transactions, budgets, money)
//! - `storage`: SQLite storage layer, one connection per operation
//! - `services`: Business logic layer (accounts, ledger, budgets)
//! - `display`: Terminal formatting
//! - `session`: The interactive two-level menu loop
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_manager::storage::Storage;
//! use finance_manager::services::LedgerService;
//!
//! # fn main() -> finance_manager::FinanceResult<()> {
//! let storage = Storage::new("finance_manager.db");
//! storage.create_schema()?;
//!
//! let ledger = LedgerService::new(&storage);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
