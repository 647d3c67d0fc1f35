//! Display formatting for terminal output

pub mod summary;

pub use summary::render_summary;
