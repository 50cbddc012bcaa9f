//! Reports module for the expense tracker
//!
//! Monthly report data and the formatters that turn it into text.

pub mod data;
pub mod detailed;
pub mod formatter;
pub mod simple;

pub use data::{CategoryLines, ReportData};
pub use detailed::DetailedFormatter;
pub use formatter::{ReportFormatter, ReportStyle};
pub use simple::SimpleFormatter;
