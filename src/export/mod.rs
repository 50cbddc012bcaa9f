//! Export module for the expense tracker
//!
//! Writes rendered reports to disk as UTF-8 text files.

pub mod text;

pub use text::{default_report_file_name, save_report, write_report};
