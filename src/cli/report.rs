//! CLI commands for the daily summary, export, and reset

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Local;

use crate::config::settings::Settings;
use crate::display::render_summary;
use crate::error::TillResult;
use crate::export::export_daily_report;
use crate::services::{EntryService, SummaryService};
use crate::storage::Storage;

/// Handle `barbertill summary`
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> TillResult<()> {
    let service = SummaryService::new(storage, settings.split);
    let summary = service.today()?;
    print!("{}", render_summary(&summary));
    Ok(())
}

/// Handle `barbertill export <output>`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    output: &Path,
) -> TillResult<()> {
    let today = Local::now().date_naive();

    match export_daily_report(storage, &settings.split, today, output)? {
        None => println!("No entries recorded today; nothing to export."),
        Some(rows) => println!(
            "Exported {} row{} to {}",
            rows,
            if rows == 1 { "" } else { "s" },
            output.display()
        ),
    }
    Ok(())
}

/// Handle `barbertill reset [--yes]`
///
/// Asks for confirmation on stdin unless `assume_yes` is set.
pub fn handle_reset_command(storage: &Storage, assume_yes: bool) -> TillResult<()> {
    let today = Local::now().date_naive();
    let count = storage.ledger.entries_on(today)?.len();

    if count == 0 {
        println!("No entries recorded today.");
        return Ok(());
    }

    if !assume_yes {
        print!(
            "Remove {} entr{} recorded today? This cannot be undone. [y/N] ",
            count,
            if count == 1 { "y" } else { "ies" }
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    let service = EntryService::new(storage);
    let removed = service.reset_today()?;
    println!(
        "Removed {} entr{}.",
        removed,
        if removed == 1 { "y" } else { "ies" }
    );
    Ok(())
}
