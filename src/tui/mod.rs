//! Terminal User Interface module
//!
//! The interactive surface: one entry form per barber chair, a daily
//! summary panel, and dialogs for export and reset, built with ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
