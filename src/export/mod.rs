//! Export module for barbertill
//!
//! Daily CSV report generation.

pub mod csv;

pub use csv::{daily_report_rows, export_daily_report, write_report_csv, ReportRow};
