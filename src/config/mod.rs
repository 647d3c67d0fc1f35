//! Configuration module for barbertill
//!
//! Path resolution and user settings (roster, split policy).

pub mod paths;
pub mod settings;

pub use paths::TillPaths;
pub use settings::{Settings, SplitPolicy};
