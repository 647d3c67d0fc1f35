//! Ledger repository for JSON storage
//!
//! The ledger is the sole persisted state: an ordered map from barber name
//! to that barber's chronological entry sequence, written back whole on
//! every mutation.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::TillError;
use crate::models::Entry;

use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LedgerData {
    barbers: BTreeMap<String, Vec<Entry>>,
}

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, Vec<Entry>>>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load the ledger from disk, seeding an empty sequence for every
    /// roster member that has none yet
    ///
    /// A missing file yields an empty ledger; a malformed one is an error.
    pub fn load(&self, roster: &[String]) -> Result<(), TillError> {
        let file_data: LedgerData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.barbers;
        for name in roster {
            data.entry(name.clone()).or_default();
        }

        Ok(())
    }

    /// Save the full ledger to disk, all barbers, all historical entries
    pub fn save(&self) -> Result<(), TillError> {
        let data = self
            .data
            .read()
            .map_err(|e| TillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = LedgerData {
            barbers: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append an entry to a barber's sequence
    ///
    /// The barber must already exist in the ledger (seeded from the roster).
    pub fn append(&self, barber: &str, entry: Entry) -> Result<(), TillError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let entries = data
            .get_mut(barber)
            .ok_or_else(|| TillError::barber_not_found(barber))?;
        entries.push(entry);

        Ok(())
    }

    /// The barber names in the ledger, in iteration order
    pub fn barbers(&self) -> Result<Vec<String>, TillError> {
        let data = self
            .data
            .read()
            .map_err(|e| TillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.keys().cloned().collect())
    }

    /// All entries for one barber
    pub fn entries_for(&self, barber: &str) -> Result<Vec<Entry>, TillError> {
        let data = self
            .data
            .read()
            .map_err(|e| TillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        data.get(barber)
            .cloned()
            .ok_or_else(|| TillError::barber_not_found(barber))
    }

    /// Entries recorded on the given date, grouped by barber in iteration order
    pub fn entries_on(&self, date: NaiveDate) -> Result<Vec<(String, Entry)>, TillError> {
        let data = self
            .data
            .read()
            .map_err(|e| TillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut entries = Vec::new();
        for (barber, seq) in data.iter() {
            for entry in seq.iter().filter(|e| e.is_on(date)) {
                entries.push((barber.clone(), entry.clone()));
            }
        }
        Ok(entries)
    }

    /// Remove, for every barber, all entries recorded on the given date
    ///
    /// Returns the number of entries removed. Irreversible.
    pub fn reset_day(&self, date: NaiveDate) -> Result<usize, TillError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut removed = 0;
        for seq in data.values_mut() {
            let before = seq.len();
            seq.retain(|e| !e.is_on(date));
            removed += before - seq.len();
        }
        Ok(removed)
    }
}
