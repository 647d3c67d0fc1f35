//! Service layer for barbertill
//!
//! Business logic over the storage layer: the input-validation boundary and
//! the daily aggregator.

pub mod entry;
pub mod summary;

pub use entry::{parse_entry_input, EntryService};
pub use summary::SummaryService;
