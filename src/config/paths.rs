//! Path management for the finance manager
//!
//! Provides XDG-compliant resolution of the directory that holds the SQLite
//! database file.
//!
//! ## Path Resolution Order
//!
//! 1. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finance-manager` or
//!    `~/.config/finance-manager`
//! 2. Windows: `%APPDATA%\finance-manager`
//!
//! The `--db` command-line flag bypasses this resolution entirely.

use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};

/// Name of the SQLite database file inside the data directory
const DB_FILE_NAME: &str = "finance_manager.db";

/// Manages all paths used by the finance manager
#[derive(Debug, Clone)]
pub struct FinancePaths {
    /// Base directory for all finance manager data
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Create a new FinancePaths instance using the platform default location
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> FinanceResult<Self> {
        Ok(Self {
            base_dir: resolve_default_path()?,
        })
    }

    /// Create FinancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/finance-manager/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the SQLite database file
    pub fn db_file(&self) -> PathBuf {
        self.base_dir.join(DB_FILE_NAME)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> FinanceResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> FinanceResult<PathBuf> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| FinanceError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("finance-manager"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> FinanceResult<PathBuf> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinanceError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finance-manager"))
}
