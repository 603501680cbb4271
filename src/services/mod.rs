//! Business logic layer
//!
//! Services borrow the storage coordinator and expose the operations the
//! interactive session dispatches to.

pub mod account;
pub mod budget;
pub mod ledger;

pub use account::AccountService;
pub use budget::{BudgetService, BudgetStatus};
pub use ledger::{LedgerService, Report};
