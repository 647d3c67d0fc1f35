//! Ledger entry model
//!
//! One recorded haircut transaction. Entries carry no barber field; they
//! live inside the per-barber sequence that owns them.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single haircut transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Service price
    pub amount: Money,

    /// Color packets consumed
    pub color_packets: u32,

    /// Calendar date the entry was recorded (no time-of-day), immutable
    pub date: NaiveDate,
}

impl Entry {
    /// Create an entry dated today (local calendar date)
    pub fn new(amount: Money, color_packets: u32) -> Self {
        Self::dated(amount, color_packets, Local::now().date_naive())
    }

    /// Create an entry with an explicit date
    pub fn dated(amount: Money, color_packets: u32, date: NaiveDate) -> Self {
        Self {
            amount,
            color_packets,
            date,
        }
    }

    /// Check whether the entry was recorded on the given date
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_dated_today() {
        let entry = Entry::new(Money::from_units(500), 1);
        assert_eq!(entry.date, Local::now().date_naive());
        assert!(entry.is_on(Local::now().date_naive()));
    }

    #[test]
    fn test_serde_roundtrip_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entry = Entry::dated(Money::from_units(300), 2, date);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2025-03-14\""));

        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
