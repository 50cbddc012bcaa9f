//! Expense record model
//!
//! An expense is an immutable value: an amount spent in a category on a date.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::rc::Rc;

use super::category::Category;
use super::money::Money;

/// One recorded expense
#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    amount: Money,
    category: Rc<Category>,
    date: NaiveDate,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(amount: Money, category: Rc<Category>, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The shared category this expense belongs to
    pub fn category(&self) -> &Rc<Category> {
        &self.category
    }

    pub fn category_name(&self) -> &str {
        self.category.name()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Check if the expense falls in the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Render the report line: `YYYY-MM-DD: <category> - <amount>`
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.date.format("%Y-%m-%d"),
            self.category.name(),
            self.amount
        )
    }
}
