//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Each roster barber gets its own input-state struct; dispatch is by chair
//! index, never by captured closures.

use chrono::Local;

use crate::config::settings::Settings;
use crate::error::TillResult;
use crate::export::export_daily_report;
use crate::models::DailySummary;
use crate::services::{parse_entry_input, EntryService, SummaryService};
use crate::storage::Storage;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which field is focused inside a chair form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Amount,
    Packets,
}

/// Input state for one barber's entry form
#[derive(Debug, Clone)]
pub struct ChairForm {
    /// The barber this form records for
    pub barber: String,
    /// Haircut amount input
    pub amount_input: TextInput,
    /// Color packet count input
    pub packets_input: TextInput,
}

impl ChairForm {
    /// Create an empty form for a barber
    pub fn new(barber: impl Into<String>) -> Self {
        Self {
            barber: barber.into(),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            packets_input: TextInput::new().label("Packets").placeholder("0"),
        }
    }

    /// Clear both inputs
    pub fn clear(&mut self) {
        self.amount_input.clear();
        self.packets_input.clear();
    }

    /// Get the input for a field
    pub fn input_mut(&mut self, field: EntryField) -> &mut TextInput {
        match field {
            EntryField::Amount => &mut self.amount_input,
            EntryField::Packets => &mut self.packets_input,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    ConfirmReset,
    ExportPath,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// One form per roster barber, in roster order
    pub forms: Vec<ChairForm>,

    /// Index of the focused chair
    pub focused_chair: usize,

    /// Focused field within the chair form
    pub focused_field: EntryField,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Destination input for the export dialog
    pub export_path_input: TextInput,

    /// Pending notifications
    pub notifications: NotificationQueue,

    /// Cached summary, refreshed after every mutation
    pub summary: DailySummary,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> TillResult<Self> {
        let forms = settings.barbers.iter().map(ChairForm::new).collect();

        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            forms,
            focused_chair: 0,
            focused_field: EntryField::Amount,
            active_dialog: ActiveDialog::default(),
            export_path_input: TextInput::new().label("Path"),
            notifications: NotificationQueue::new(),
            summary: DailySummary::empty(Local::now().date_naive()),
        };
        app.refresh_summary()?;
        app.update_focus();
        Ok(app)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Recompute the cached daily summary from the ledger
    pub fn refresh_summary(&mut self) -> TillResult<()> {
        let service = SummaryService::new(self.storage, self.settings.split);
        self.summary = service.today()?;
        Ok(())
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.export_path_input.focused = false;
        self.update_focus();
    }

    /// Focus the next chair, wrapping around
    pub fn next_chair(&mut self) {
        if !self.forms.is_empty() {
            self.focused_chair = (self.focused_chair + 1) % self.forms.len();
            self.focused_field = EntryField::Amount;
            self.update_focus();
        }
    }

    /// Focus the previous chair, wrapping around
    pub fn prev_chair(&mut self) {
        if !self.forms.is_empty() {
            self.focused_chair = (self.focused_chair + self.forms.len() - 1) % self.forms.len();
            self.focused_field = EntryField::Amount;
            self.update_focus();
        }
    }

    /// Focus a field within the current chair form
    pub fn focus_field(&mut self, field: EntryField) {
        self.focused_field = field;
        self.update_focus();
    }

    /// Sync the `focused` flag on every input
    fn update_focus(&mut self) {
        let editing_form = !self.has_dialog();
        for (i, form) in self.forms.iter_mut().enumerate() {
            let chair_focused = editing_form && i == self.focused_chair;
            form.amount_input.focused = chair_focused && self.focused_field == EntryField::Amount;
            form.packets_input.focused = chair_focused && self.focused_field == EntryField::Packets;
        }
    }

    /// The focused chair form, if the roster is non-empty
    pub fn focused_form_mut(&mut self) -> Option<&mut ChairForm> {
        let index = self.focused_chair;
        self.forms.get_mut(index)
    }

    /// The input the next typed character should land in
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        if self.active_dialog == ActiveDialog::ExportPath {
            return Some(&mut self.export_path_input);
        }
        let field = self.focused_field;
        self.focused_form_mut().map(|form| form.input_mut(field))
    }

    /// Submit the focused chair form
    ///
    /// Validation failures become an error notification and nothing is
    /// recorded; storage failures propagate.
    pub fn submit_focused(&mut self) -> TillResult<()> {
        let Some(form) = self.focused_form_mut() else {
            return Ok(());
        };
        let barber = form.barber.clone();
        let amount_raw = form.amount_input.value().to_string();
        let packets_raw = form.packets_input.value().to_string();

        let (amount, packets) = match parse_entry_input(&amount_raw, &packets_raw) {
            Ok(parsed) => parsed,
            Err(_) => {
                self.notify(Notification::error("Please enter valid numbers"));
                return Ok(());
            }
        };

        let entry = EntryService::new(self.storage).record(&barber, amount, packets)?;

        if let Some(form) = self.focused_form_mut() {
            form.clear();
        }
        self.focus_field(EntryField::Amount);
        self.refresh_summary()?;
        self.notify(Notification::success(format!(
            "Recorded {} for {}",
            entry.amount, barber
        )));
        Ok(())
    }

    /// Start the export flow: no-op notice when today is empty, otherwise
    /// prompt for a destination path
    pub fn begin_export(&mut self) -> TillResult<()> {
        let today = Local::now().date_naive();
        if self.storage.ledger.entries_on(today)?.is_empty() {
            self.notify(Notification::info("No entries recorded today; nothing to export."));
            return Ok(());
        }

        self.export_path_input = TextInput::new()
            .label("Path")
            .content(format!("report-{}.csv", today));
        self.export_path_input.focused = true;
        self.active_dialog = ActiveDialog::ExportPath;
        self.update_focus();
        Ok(())
    }

    /// Write today's report to the path in the export dialog
    pub fn confirm_export(&mut self) -> TillResult<()> {
        let path = self.export_path_input.value().trim().to_string();
        if path.is_empty() {
            self.notify(Notification::error("Enter a destination path"));
            return Ok(());
        }

        let today = Local::now().date_naive();
        let result = export_daily_report(
            self.storage,
            &self.settings.split,
            today,
            path.as_ref(),
        )?;
        self.close_dialog();

        match result {
            None => self.notify(Notification::info("No entries recorded today; nothing to export.")),
            Some(rows) => self.notify(Notification::success(format!(
                "Exported {} row{} to {}",
                rows,
                if rows == 1 { "" } else { "s" },
                path
            ))),
        }
        Ok(())
    }

    /// Start the reset flow: no-op notice when today is empty, otherwise
    /// ask for confirmation
    pub fn begin_reset(&mut self) -> TillResult<()> {
        let today = Local::now().date_naive();
        if self.storage.ledger.entries_on(today)?.is_empty() {
            self.notify(Notification::info("No entries recorded today."));
            return Ok(());
        }

        self.active_dialog = ActiveDialog::ConfirmReset;
        self.update_focus();
        Ok(())
    }

    /// Remove today's entries after the confirmation dialog
    pub fn confirm_reset(&mut self) -> TillResult<()> {
        let removed = EntryService::new(self.storage).reset_today()?;
        self.close_dialog();
        self.refresh_summary()?;
        self.notify(Notification::success(format!(
            "Removed {} entr{}",
            removed,
            if removed == 1 { "y" } else { "ies" }
        )));
        Ok(())
    }
}
