//! Command-line expense arguments
//!
//! An expense is given as `AMOUNT:CATEGORY[:YYYY-MM-DD]`, e.g.
//! `500:Transport:2023-10-17` or `12.50:Food`.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::services::Tracker;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One expense parsed from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseArg {
    pub amount: Money,
    pub category: String,
    pub date: Option<NaiveDate>,
}

impl ExpenseArg {
    /// Add this expense to `tracker`
    pub fn record(&self, tracker: &mut Tracker) {
        tracker.add_expense(self.amount, &self.category, self.date);
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| TrackerError::Parse(format!("Invalid date: {}. Use YYYY-MM-DD", s)))
}

/// `NNNN-NN-NN`, whether or not it is a real calendar date
fn looks_like_date(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for ExpenseArg {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, rest) = s.split_once(':').ok_or_else(|| {
            TrackerError::Parse(format!(
                "Invalid expense: {}. Use AMOUNT:CATEGORY[:YYYY-MM-DD]",
                s
            ))
        })?;

        let amount = Money::parse(amount).map_err(|e| TrackerError::Parse(e.to_string()))?;

        // A trailing NNNN-NN-NN segment must be a valid date; anything else
        // after the last colon is part of the category name.
        let (category, date) = match rest.rsplit_once(':') {
            Some((category, date)) if looks_like_date(date) => {
                (category, Some(parse_date(date)?))
            }
            _ => (rest, None),
        };

        Ok(Self {
            amount,
            category: category.to_string(),
            date,
        })
    }
}
