//! Budget model
//!
//! A budget row is a single (category, monthly limit) constraint belonging
//! to a user. There is no uniqueness constraint: a user may hold several
//! budget rows for the same category, and each is checked independently.

use super::ids::{BudgetId, UserId};
use super::money::Money;

/// A per-category monthly spending limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    /// Row id assigned by storage on insert
    pub id: BudgetId,

    /// Owning user
    pub user_id: UserId,

    /// Free-text category; no validation that any transaction uses it
    pub category: String,

    /// Monthly spending limit in cents
    pub monthly_limit: Money,
}
