//! Daily summary aggregation
//!
//! Pure computation over the ledger: filter each barber's entries to the
//! requested date, sum, and apply the split policy. No rounding beyond the
//! policy's cent rounding; display formatting happens at presentation time.

use chrono::{Local, NaiveDate};

use crate::config::settings::SplitPolicy;
use crate::error::TillResult;
use crate::models::{BarberTotals, DailySummary};
use crate::storage::Storage;

/// Service for computing daily summaries
pub struct SummaryService<'a> {
    storage: &'a Storage,
    policy: SplitPolicy,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage, policy: SplitPolicy) -> Self {
        Self { storage, policy }
    }

    /// Summarize today's entries
    pub fn today(&self) -> TillResult<DailySummary> {
        self.daily(Local::now().date_naive())
    }

    /// Summarize the given date, deterministic and side-effect-free
    ///
    /// A barber with no entries on the date yields all-zero figures.
    pub fn daily(&self, date: NaiveDate) -> TillResult<DailySummary> {
        let mut summary = DailySummary::empty(date);

        for barber in self.storage.ledger.barbers()? {
            let entries = self.storage.ledger.entries_for(&barber)?;

            let mut totals = BarberTotals::empty(&barber);
            for entry in entries.iter().filter(|e| e.is_on(date)) {
                totals.haircuts += 1;
                totals.packets += entry.color_packets;
                totals.gross += entry.amount;
            }
            totals.barber_income = self.policy.barber_cut(totals.gross);

            summary.haircuts += totals.haircuts;
            summary.packets += totals.packets;
            summary.gross += totals.gross;
            summary.owner_income += self.policy.owner_cut(totals.gross, totals.packets);
            summary.barbers.push(totals);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TillPaths;
    use crate::models::{Entry, Money};
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        let paths = TillPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .load(&["Barber1".to_string(), "Barber2".to_string()])
            .unwrap();
        storage
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_worked_example() {
        // 500 with one packet plus 300 with none: 800 gross, 480/570 split
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage
            .ledger
            .append("Barber1", Entry::dated(Money::from_units(500), 1, date()))
            .unwrap();
        storage
            .ledger
            .append("Barber1", Entry::dated(Money::from_units(300), 0, date()))
            .unwrap();

        let service = SummaryService::new(&storage, SplitPolicy::default());
        let summary = service.daily(date()).unwrap();

        let barber1 = summary.barber("Barber1").unwrap();
        assert_eq!(barber1.haircuts, 2);
        assert_eq!(barber1.packets, 1);
        assert_eq!(barber1.gross, Money::from_units(800));
        assert_eq!(barber1.barber_income, Money::from_units(480));

        assert_eq!(summary.haircuts, 2);
        assert_eq!(summary.packets, 1);
        assert_eq!(summary.gross, Money::from_units(800));
        assert_eq!(summary.owner_income, Money::from_units(570));
    }

    #[test]
    fn test_other_barbers_unaffected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage
            .ledger
            .append("Barber1", Entry::dated(Money::from_units(500), 1, date()))
            .unwrap();

        let service = SummaryService::new(&storage, SplitPolicy::default());
        let summary = service.daily(date()).unwrap();

        let barber2 = summary.barber("Barber2").unwrap();
        assert_eq!(*barber2, BarberTotals::empty("Barber2"));
    }

    #[test]
    fn test_only_requested_date_counts() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let other_day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        storage
            .ledger
            .append("Barber1", Entry::dated(Money::from_units(500), 1, other_day))
            .unwrap();

        let service = SummaryService::new(&storage, SplitPolicy::default());
        let summary = service.daily(date()).unwrap();

        assert_eq!(summary.haircuts, 0);
        assert!(summary.gross.is_zero());
        assert!(summary.owner_income.is_zero());
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage
            .ledger
            .append("Barber2", Entry::dated(Money::from_units(150), 2, date()))
            .unwrap();

        let service = SummaryService::new(&storage, SplitPolicy::default());
        let first = service.daily(date()).unwrap();
        let second = service.daily(date()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_after_reset_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage
            .ledger
            .append("Barber1", Entry::dated(Money::from_units(500), 1, date()))
            .unwrap();

        storage.ledger.reset_day(date()).unwrap();

        let service = SummaryService::new(&storage, SplitPolicy::default());
        let summary = service.daily(date()).unwrap();
        assert_eq!(summary.haircuts, 0);
        assert!(summary.gross.is_zero());
        for totals in &summary.barbers {
            assert_eq!(totals.haircuts, 0);
            assert!(totals.gross.is_zero());
        }
    }
}
