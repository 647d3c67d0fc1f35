//! Daily summary panel
//!
//! Shows per-barber figures and shop-wide totals for today, refreshed after
//! every mutation.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Daily Summary  {} ", app.summary.date))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:<12} {:>9} {:>8} {:>12} {:>12}",
            "Barber", "Haircuts", "Packets", "Gross", "Income"
        ),
        header_style,
    ))];

    for totals in &app.summary.barbers {
        lines.push(Line::from(format!(
            "{:<12} {:>9} {:>8} {:>12} {:>12}",
            totals.barber,
            totals.haircuts,
            totals.packets,
            totals.gross.to_string(),
            totals.barber_income.to_string()
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Shop: ", Style::default().fg(Color::White)),
        Span::raw(format!(
            "{} haircuts, {} packets",
            app.summary.haircuts, app.summary.packets
        )),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Gross: ", Style::default().fg(Color::White)),
        Span::styled(
            app.summary.gross.to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled("Owner: ", Style::default().fg(Color::White)),
        Span::styled(
            app.summary.owner_income.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
