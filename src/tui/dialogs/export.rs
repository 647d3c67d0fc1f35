//! Export destination dialog
//!
//! Modal prompt for the CSV destination path, chosen at export time.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the export path prompt
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Export Today's Report ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);

    let mut input_area = inner;
    input_area.height = 1;
    input_area.y += 1;
    frame.render_widget(&app.export_path_input, input_area);

    let mut hint_area = inner;
    hint_area.y = inner.y + inner.height.saturating_sub(1);
    hint_area.height = 1;
    frame.render_widget(Paragraph::new(hint), hint_area);
}
