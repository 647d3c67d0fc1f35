//! Storage layer for barbertill
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerRepository;

use crate::config::paths::TillPaths;
use crate::error::TillError;

/// Main storage coordinator
pub struct Storage {
    paths: TillPaths,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TillPaths) -> Result<Self, TillError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TillPaths {
        &self.paths
    }

    /// Load the ledger from disk, seeding sequences for the given roster
    pub fn load(&self, roster: &[String]) -> Result<(), TillError> {
        self.ledger.load(roster)
    }
}
