//! Daily summary aggregates
//!
//! Derived figures for a single calendar day. Never persisted; recomputed
//! from the ledger whenever the display needs refreshing.

use chrono::NaiveDate;

use super::money::Money;

/// Per-barber figures for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarberTotals {
    /// Barber identifier
    pub barber: String,
    /// Number of haircuts recorded
    pub haircuts: u32,
    /// Color packets consumed
    pub packets: u32,
    /// Gross takings before the split
    pub gross: Money,
    /// Barber-share income (commission on gross)
    pub barber_income: Money,
}

impl BarberTotals {
    /// All-zero totals for a barber with no entries today
    pub fn empty(barber: impl Into<String>) -> Self {
        Self {
            barber: barber.into(),
            haircuts: 0,
            packets: 0,
            gross: Money::zero(),
            barber_income: Money::zero(),
        }
    }
}

/// Shop-wide figures for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    /// The day being summarized
    pub date: NaiveDate,
    /// Per-barber totals, in ledger iteration order
    pub barbers: Vec<BarberTotals>,
    /// Total haircuts across all barbers
    pub haircuts: u32,
    /// Total color packets across all barbers
    pub packets: u32,
    /// Gross takings across all barbers
    pub gross: Money,
    /// Owner-share income (remainder of gross plus packet surcharges)
    pub owner_income: Money,
}

impl DailySummary {
    /// A summary with no activity
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            barbers: Vec::new(),
            haircuts: 0,
            packets: 0,
            gross: Money::zero(),
            owner_income: Money::zero(),
        }
    }

    /// Look up one barber's totals by name
    pub fn barber(&self, name: &str) -> Option<&BarberTotals> {
        self.barbers.iter().find(|b| b.barber == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_totals() {
        let totals = BarberTotals::empty("Barber1");
        assert_eq!(totals.haircuts, 0);
        assert!(totals.gross.is_zero());
        assert!(totals.barber_income.is_zero());
    }

    #[test]
    fn test_barber_lookup() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let mut summary = DailySummary::empty(date);
        summary.barbers.push(BarberTotals::empty("Barber2"));

        assert!(summary.barber("Barber2").is_some());
        assert!(summary.barber("Barber1").is_none());
    }
}
