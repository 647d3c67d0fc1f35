//! Entry recording service
//!
//! The boundary between interactive input and the store: validates input,
//! appends the entry, and synchronously persists the whole ledger.

use chrono::Local;

use crate::error::{TillError, TillResult};
use crate::models::{Entry, Money};
use crate::storage::Storage;

/// Parse raw amount and packet-count strings from a form or the command line
///
/// Rejects non-numeric amounts, negative amounts, and non-integer packet
/// counts before anything reaches the store.
pub fn parse_entry_input(amount: &str, packets: &str) -> TillResult<(Money, u32)> {
    let amount = Money::parse(amount).map_err(|e| TillError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(TillError::Validation("Amount cannot be negative".into()));
    }

    let packets: u32 = packets
        .trim()
        .parse()
        .map_err(|_| TillError::Validation(format!("Invalid packet count: {}", packets.trim())))?;

    Ok((amount, packets))
}

/// Service for recording and clearing ledger entries
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a haircut for a barber, dated today, and persist the ledger
    pub fn record(&self, barber: &str, amount: Money, color_packets: u32) -> TillResult<Entry> {
        if amount.is_negative() {
            return Err(TillError::Validation("Amount cannot be negative".into()));
        }

        let entry = Entry::new(amount, color_packets);
        self.storage.ledger.append(barber, entry.clone())?;
        self.storage.ledger.save()?;
        Ok(entry)
    }

    /// Remove all of today's entries across every barber and persist
    ///
    /// Returns the number of entries removed. No undo, no archive.
    pub fn reset_today(&self) -> TillResult<usize> {
        let today = Local::now().date_naive();
        let removed = self.storage.ledger.reset_day(today)?;
        self.storage.ledger.save()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TillPaths;
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        let paths = TillPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .load(&["Barber1".to_string(), "Barber2".to_string()])
            .unwrap();
        storage
    }

    #[test]
    fn test_parse_entry_input() {
        let (amount, packets) = parse_entry_input("500", "1").unwrap();
        assert_eq!(amount, Money::from_units(500));
        assert_eq!(packets, 1);

        let (amount, packets) = parse_entry_input("300.50", "0").unwrap();
        assert_eq!(amount, Money::from_cents(30050));
        assert_eq!(packets, 0);
    }

    #[test]
    fn test_parse_entry_input_rejects_bad_numbers() {
        assert!(parse_entry_input("abc", "1").unwrap_err().is_validation());
        assert!(parse_entry_input("-50", "1").unwrap_err().is_validation());
        assert!(parse_entry_input("500", "1.5").unwrap_err().is_validation());
        assert!(parse_entry_input("500", "-1").unwrap_err().is_validation());
        assert!(parse_entry_input("500", "two").unwrap_err().is_validation());
    }

    #[test]
    fn test_record_appends_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let service = EntryService::new(&storage);

        service.record("Barber1", Money::from_units(500), 1).unwrap();

        assert_eq!(storage.ledger.entries_for("Barber1").unwrap().len(), 1);
        assert!(storage.paths().ledger_file().exists());
    }

    #[test]
    fn test_record_unknown_barber_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let service = EntryService::new(&storage);

        let err = service
            .record("Nobody", Money::from_units(500), 0)
            .unwrap_err();
        assert!(matches!(err, TillError::BarberNotFound { .. }));
    }

    #[test]
    fn test_reset_today_clears_and_counts() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let service = EntryService::new(&storage);

        service.record("Barber1", Money::from_units(500), 1).unwrap();
        service.record("Barber2", Money::from_units(200), 0).unwrap();

        assert_eq!(service.reset_today().unwrap(), 2);
        assert!(storage.ledger.entries_for("Barber1").unwrap().is_empty());
        assert_eq!(service.reset_today().unwrap(), 0);
    }
}
