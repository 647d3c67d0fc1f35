//! Event handler for the TUI
//!
//! Routes keyboard events based on the current application state. The chair
//! forms only ever hold numbers, so plain letters stay free for global
//! actions while digits and the decimal point go to the focused input.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App, EntryField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::ConfirmReset => handle_confirm_reset_key(app, key),
        ActiveDialog::ExportPath => handle_export_path_key(app, key),
        ActiveDialog::None => handle_board_key(app, key),
    }
}

/// Handle keys in the reset confirmation dialog
fn handle_confirm_reset_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_reset()?,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

/// Handle keys in the export path dialog
fn handle_export_path_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.confirm_export()?,
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Backspace => app.export_path_input.backspace(),
        KeyCode::Left => app.export_path_input.move_left(),
        KeyCode::Right => app.export_path_input.move_right(),
        KeyCode::Char(c) => app.export_path_input.insert(c),
        _ => {}
    }
    Ok(())
}

/// Handle keys on the chair board
fn handle_board_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Global actions
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.begin_export()?,
        KeyCode::Char('r') | KeyCode::Char('R') => app.begin_reset()?,

        // Chair navigation
        KeyCode::Tab | KeyCode::Right => app.next_chair(),
        KeyCode::BackTab | KeyCode::Left => app.prev_chair(),

        // Field navigation within the chair form
        KeyCode::Up => app.focus_field(EntryField::Amount),
        KeyCode::Down => app.focus_field(EntryField::Packets),

        // Enter advances from amount to packets, then submits
        KeyCode::Enter => match app.focused_field {
            EntryField::Amount => app.focus_field(EntryField::Packets),
            EntryField::Packets => app.submit_focused()?,
        },

        KeyCode::Esc => {
            if let Some(form) = app.focused_form_mut() {
                form.clear();
            }
        }

        KeyCode::Backspace => {
            if let Some(input) = app.focused_input_mut() {
                input.backspace();
            }
        }

        // Only numeric characters reach the inputs
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            if let Some(input) = app.focused_input_mut() {
                input.insert(c);
            }
        }

        _ => {}
    }
    Ok(())
}
