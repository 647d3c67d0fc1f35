//! CLI command for recording entries

use crate::error::TillResult;
use crate::services::{parse_entry_input, EntryService};
use crate::storage::Storage;

/// Handle `barbertill add <barber> <amount> <packets>`
pub fn handle_add_command(
    storage: &Storage,
    barber: &str,
    amount: &str,
    packets: &str,
) -> TillResult<()> {
    let (amount, packets) = parse_entry_input(amount, packets)?;

    let service = EntryService::new(storage);
    let entry = service.record(barber, amount, packets)?;

    println!(
        "Recorded {} for {} ({} color packet{})",
        entry.amount,
        barber,
        entry.color_packets,
        if entry.color_packets == 1 { "" } else { "s" }
    );
    Ok(())
}
