//! Custom error types for the finance manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finance manager operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Registration conflict: the username is already taken
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Login failure: no user matches the given username/password pair
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Amount entry that does not parse as a monetary value
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Transaction kind outside the accepted set (income, expense)
    #[error("Invalid transaction kind: '{0}' (expected 'income' or 'expense')")]
    InvalidKind(String),

    /// Storage-medium errors (database open/read/write failures)
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FinanceError {
    /// Check if this error is recoverable inside the interactive loop
    ///
    /// Recoverable errors are reported to the user and the menu re-prompts;
    /// anything else aborts the current run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUsername(_)
                | Self::InvalidCredentials
                | Self::InvalidAmount(_)
                | Self::InvalidKind(_)
        )
    }

    /// Check if this is a duplicate-username error
    pub fn is_duplicate_username(&self) -> bool {
        matches!(self, Self::DuplicateUsername(_))
    }

    /// Check if this is an invalid-credentials error
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

// Implement From traits for common error types

impl From<rusqlite::Error> for FinanceError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for finance manager operations
pub type FinanceResult<T> = Result<T, FinanceError>;
