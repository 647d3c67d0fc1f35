//! Layout definitions for the TUI
//!
//! The screen splits into the chair board (one form panel per barber), the
//! daily summary panel, and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Chair board area (entry forms)
    pub board: Rect,
    /// Daily summary area
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),  // Chair board
                Constraint::Min(8),     // Summary
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        Self {
            board: vertical[0],
            summary: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Split the board area into one equal-width column per chair
pub fn chair_columns(area: Rect, chairs: usize) -> Vec<Rect> {
    if chairs == 0 {
        return Vec::new();
    }

    let percent = (100 / chairs) as u16;
    let constraints: Vec<Constraint> = (0..chairs).map(|_| Constraint::Percentage(percent)).collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
