//! Account service
//!
//! Registration and authentication against the users table. There is no
//! lockout, no rate limiting, and no session token: the returned user id is
//! the whole session state, held by the interactive loop.

use crate::error::{FinanceError, FinanceResult};
use crate::models::UserId;
use crate::storage::Storage;

/// Service for user registration and login
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// On [`FinanceError::DuplicateUsername`] the caller reports the failure
    /// and takes no further action; there is no retry.
    pub fn register(&self, username: &str, password: &str) -> FinanceResult<UserId> {
        self.storage.insert_user(username, password)
    }

    /// Authenticate an existing user, returning their id
    ///
    /// Any mismatch of username or password yields
    /// [`FinanceError::InvalidCredentials`].
    pub fn authenticate(&self, username: &str, password: &str) -> FinanceResult<UserId> {
        match self.storage.find_user(username, password)? {
            Some(user) => Ok(user.id),
            None => Err(FinanceError::InvalidCredentials),
        }
    }
}
