//! Plain-text rendering of the daily summary
//!
//! Formatting helpers for the `summary` command's terminal output.

use crate::models::DailySummary;

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Render a daily summary as a fixed-width text table
pub fn render_summary(summary: &DailySummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Daily Summary for {}\n", summary.date));
    out.push_str(&separator(58));
    out.push('\n');
    out.push_str(&format!(
        "{:<12} {:>9} {:>8} {:>12} {:>12}\n",
        "Barber", "Haircuts", "Packets", "Gross", "Income"
    ));

    for totals in &summary.barbers {
        out.push_str(&format!(
            "{:<12} {:>9} {:>8} {:>12} {:>12}\n",
            totals.barber,
            totals.haircuts,
            totals.packets,
            totals.gross.to_string(),
            totals.barber_income.to_string()
        ));
    }

    out.push_str(&separator(58));
    out.push('\n');
    out.push_str(&format!(
        "Shop totals: {} haircuts, {} color packets\n",
        summary.haircuts, summary.packets
    ));
    out.push_str(&format!("Gross income: {:>12}\n", summary.gross.to_string()));
    out.push_str(&format!(
        "Owner income: {:>12}\n",
        summary.owner_income.to_string()
    ));

    out
}
