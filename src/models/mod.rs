//! Core data models for the expense tracker
//!
//! This module contains the value types of the tracking domain: amounts,
//! categories and expense records.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::ExpenseRecord;
pub use ids::CategoryId;
pub use money::{Money, MoneyParseError};
