//! CLI command handlers
//!
//! Bridges clap argument parsing with the tracker and report writers.

pub mod demo;
pub mod expense;
pub mod report;

pub use demo::{handle_demo_command, run_demo, seed_demo_expenses};
pub use expense::{parse_date, ExpenseArg};
pub use report::{handle_report_command, render_report, ReportArgs};
