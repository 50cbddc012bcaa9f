//! Expense Tracker - monthly expense reports by category
//!
//! Records personal expenses in memory and renders monthly reports grouped
//! by category, in a simple or a detailed layout.
//!
//! # Architecture
//!
//! - `models`: Money, categories and expense records
//! - `services`: Category registry, clock and the tracker
//! - `reports`: Monthly report data and formatters
//! - `export`: Writing rendered reports to disk
//! - `config`: Paths and persisted settings
//! - `cli`: Command handlers for the binary
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::models::Money;
//! use expense_tracker::reports::{ReportFormatter, SimpleFormatter};
//! use expense_tracker::services::Tracker;
//!
//! let mut tracker = Tracker::new();
//! tracker.add_expense(
//!     Money::from_units(500),
//!     "Transport",
//!     NaiveDate::from_ymd_opt(2023, 10, 17),
//! );
//!
//! let data = tracker.generate_report(2023, 10);
//! let text = SimpleFormatter.render(&data);
//! assert!(text.contains("\t2023-10-17: Transport - 500.00\n"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{TrackerError, TrackerResult};
