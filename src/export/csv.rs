//! CSV export of the day's transactions
//!
//! One row per entry, grouped by barber in ledger iteration order, with the
//! split incomes computed per row. Exporting an empty day is a no-op that
//! leaves the destination untouched.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::config::settings::SplitPolicy;
use crate::error::{TillError, TillResult};
use crate::models::Money;
use crate::storage::Storage;

/// One line of the daily report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub barber: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub color_packets: u32,
    pub barber_income: Money,
    pub owner_income: Money,
}

/// Collect the report rows for one day
pub fn daily_report_rows(
    storage: &Storage,
    policy: &SplitPolicy,
    date: NaiveDate,
) -> TillResult<Vec<ReportRow>> {
    let rows = storage
        .ledger
        .entries_on(date)?
        .into_iter()
        .map(|(barber, entry)| ReportRow {
            barber,
            date: entry.date,
            amount: entry.amount,
            color_packets: entry.color_packets,
            barber_income: policy.barber_cut(entry.amount),
            owner_income: policy.owner_cut(entry.amount, entry.color_packets),
        })
        .collect();

    Ok(rows)
}

/// Write report rows as CSV, header included
///
/// Returns the number of data rows written.
pub fn write_report_csv<W: Write>(writer: W, rows: &[ReportRow]) -> TillResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Barber",
        "Date",
        "Haircut Amount",
        "Color Packets",
        "Barber Income",
        "Owner Income",
    ])?;

    for row in rows {
        csv_writer.write_record([
            row.barber.clone(),
            row.date.format("%Y-%m-%d").to_string(),
            row.amount.to_string(),
            row.color_packets.to_string(),
            row.barber_income.to_string(),
            row.owner_income.to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| TillError::Export(e.to_string()))?;
    Ok(rows.len())
}

/// Export one day's report to a file
///
/// Returns `Ok(None)` without touching the destination when there are no
/// qualifying entries; otherwise creates the file and returns the row count.
pub fn export_daily_report(
    storage: &Storage,
    policy: &SplitPolicy,
    date: NaiveDate,
    output: &Path,
) -> TillResult<Option<usize>> {
    let rows = daily_report_rows(storage, policy, date)?;
    if rows.is_empty() {
        return Ok(None);
    }

    let file = File::create(output).map_err(|e| {
        TillError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let written = write_report_csv(BufWriter::new(file), &rows)?;
    Ok(Some(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TillPaths;
    use crate::models::Entry;
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
    fn test_rows_carry_per_entry_incomes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        storage
            .ledger
            .append("Barber1", Entry::dated(Money::from_units(500), 1, date()))
            .unwrap();
        storage
            .ledger
            .append("Barber2", Entry::dated(Money::from_units(300), 0, date()))
            .unwrap();

        let rows = daily_report_rows(&storage, &SplitPolicy::default(), date()).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].barber, "Barber1");
        assert_eq!(rows[0].barber_income, Money::from_units(300));
        assert_eq!(rows[0].owner_income, Money::from_units(450));

        assert_eq!(rows[1].barber, "Barber2");
        assert_eq!(rows[1].barber_income, Money::from_units(180));
        assert_eq!(rows[1].owner_income, Money::from_units(120));
    }

    #[test]
    fn test_csv_output() {
        let rows = vec![ReportRow {
            barber: "Barber1".into(),
            date: date(),
            amount: Money::from_units(500),
            color_packets: 1,
            barber_income: Money::from_units(300),
            owner_income: Money::from_units(450),
        }];

        let mut buf = Vec::new();
        let written = write_report_csv(&mut buf, &rows).unwrap();
        assert_eq!(written, 1);

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Barber,Date,Haircut Amount,Color Packets,Barber Income,Owner Income"
        );
        assert_eq!(lines.next().unwrap(), "Barber1,2025-06-02,500.00,1,300.00,450.00");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_empty_day_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let output = temp_dir.path().join("report.csv");

        let result =
            export_daily_report(&storage, &SplitPolicy::default(), date(), &output).unwrap();

        assert_eq!(result, None);
        assert!(!output.exists());
    }

    #[test]
    fn test_export_writes_one_row_per_entry() {
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

        let output = temp_dir.path().join("report.csv");
        let result =
            export_daily_report(&storage, &SplitPolicy::default(), date(), &output).unwrap();

        assert_eq!(result, Some(2));
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
