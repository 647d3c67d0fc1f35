//! Chair board view
//!
//! One bordered panel per roster barber with the amount and packet inputs,
//! plus that barber's running figures for the day.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::chair_columns;

/// Render the chair board
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = chair_columns(area, app.forms.len());

    for (i, (form, column)) in app.forms.iter().zip(columns).enumerate() {
        let focused = i == app.focused_chair && !app.has_dialog();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .title(format!(" {} ", form.barber))
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(column);
        frame.render_widget(block, column);

        if inner.height < 4 || inner.width < 4 {
            continue;
        }

        let row = |offset: u16| Rect::new(inner.x + 1, inner.y + offset, inner.width - 2, 1);

        frame.render_widget(&form.amount_input, row(1));
        frame.render_widget(&form.packets_input, row(3));

        // Running figures for the day under the inputs
        if inner.height < 6 {
            continue;
        }
        if let Some(totals) = app.summary.barber(&form.barber) {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} cut{}", totals.haircuts, if totals.haircuts == 1 { "" } else { "s" }),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  "),
                Span::styled(
                    totals.barber_income.to_string(),
                    Style::default().fg(Color::Yellow),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), row(5));
        }
    }
}
