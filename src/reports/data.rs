//! Aggregated monthly report data
//!
//! Built by [`Tracker::generate_report`](crate::services::Tracker::generate_report)
//! and consumed by the formatters. Never cached; rebuilt on each request.

use crate::models::{ExpenseRecord, Money};

/// Rendered lines for one category, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLines {
    pub name: String,
    pub lines: Vec<String>,
}

/// Total and per-category lines for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    pub year: i32,
    pub month: u32,
    /// Sum of every amount whose line appears in `categories`
    pub total: Money,
    /// Buckets in first-occurrence order of their category
    pub categories: Vec<CategoryLines>,
}

impl ReportData {
    /// An empty report for the month
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            total: Money::zero(),
            categories: Vec::new(),
        }
    }

    /// Aggregate already-filtered records, keeping their order
    pub fn from_records<'a, I>(year: i32, month: u32, records: I) -> Self
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut data = Self::empty(year, month);
        for record in records {
            data.push(record);
        }
        data
    }

    fn push(&mut self, record: &ExpenseRecord) {
        self.total += record.amount();

        let name = record.category_name();
        let line = record.to_line();
        match self.categories.iter_mut().find(|bucket| bucket.name == name) {
            Some(bucket) => bucket.lines.push(line),
            None => self.categories.push(CategoryLines {
                name: name.to_string(),
                lines: vec![line],
            }),
        }
    }

    /// Lines recorded for a category, if it has any this month
    pub fn lines_for(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|bucket| bucket.name == category)
            .map(|bucket| bucket.lines.as_slice())
    }

    /// Number of records aggregated into this report
    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|bucket| bucket.lines.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn record(amount: i64, category: &Rc<Category>, day: u32) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_units(amount),
            Rc::clone(category),
            NaiveDate::from_ymd_opt(2023, 10, day).unwrap(),
        )
    }

    #[test]
    fn test_empty() {
        let data = ReportData::from_records(2023, 10, Vec::<ExpenseRecord>::new().iter());
        assert_eq!(data, ReportData::empty(2023, 10));
        assert!(data.is_empty());
        assert_eq!(data.total, Money::zero());
        assert_eq!(data.record_count(), 0);
    }

    #[test]
    fn test_buckets_follow_first_occurrence() {
        let food = Rc::new(Category::new("Food"));
        let transport = Rc::new(Category::new("Transport"));
        let records = vec![
            record(10, &transport, 3),
            record(20, &food, 1),
            record(30, &transport, 2),
        ];

        let data = ReportData::from_records(2023, 10, &records);

        let names: Vec<_> = data.categories.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Transport", "Food"]);
        assert_eq!(
            data.lines_for("Transport").unwrap(),
            &[
                "2023-10-03: Transport - 10.00".to_string(),
                "2023-10-02: Transport - 30.00".to_string(),
            ]
        );
        assert_eq!(data.total, Money::from_units(60));
        assert_eq!(data.record_count(), 3);
        assert!(data.lines_for("Rent").is_none());
    }
}
