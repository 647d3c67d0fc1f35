//! TUI Views module
//!
//! The chair board, the daily summary panel, and the status bar.

pub mod entry_board;
pub mod status_bar;
pub mod summary;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    entry_board::render(frame, app, layout.board);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::render(frame, "Remove all of today's entries?");
        }
        ActiveDialog::ExportPath => {
            dialogs::export::render(frame, app);
        }
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = notification_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Top-right corner area for toast notifications
fn notification_area(area: Rect) -> Rect {
    let width = 44.min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, 3.min(area.height))
}
