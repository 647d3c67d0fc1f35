//! Status bar view
//!
//! One line of key hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str| Span::styled(key, Style::default().fg(Color::Cyan));
    let text = |label: &'static str| Span::styled(label, Style::default().fg(Color::DarkGray));

    let mut spans = vec![
        hint(" Tab"),
        text(" next chair │ "),
        hint("Enter"),
        text(" next field / submit │ "),
        hint("E"),
        text("xport │ "),
        hint("R"),
        text("eset │ "),
        hint("Q"),
        text("uit"),
    ];

    if app.has_dialog() {
        spans = vec![
            hint(" Enter"),
            text(" confirm │ "),
            hint("Esc"),
            text(" cancel"),
        ];
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
