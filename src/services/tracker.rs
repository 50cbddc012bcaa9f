//! Expense tracker
//!
//! Owns the append-only list of expense records together with the category
//! registry used to resolve their names, and aggregates them by month.

use chrono::NaiveDate;

use crate::models::{ExpenseRecord, Money};
use crate::reports::ReportData;

use super::category::CategoryRegistry;
use super::clock::{Clock, SystemClock};

/// In-memory expense tracker
pub struct Tracker {
    registry: CategoryRegistry,
    clock: Box<dyn Clock>,
    records: Vec<ExpenseRecord>,
}

impl Tracker {
    /// Create a tracker that dates undated expenses with the local clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a tracker with a specific source of "today"
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            registry: CategoryRegistry::new(),
            clock: Box::new(clock),
            records: Vec::new(),
        }
    }

    /// Record an expense
    ///
    /// The category is resolved through the tracker's registry. When `date`
    /// is `None` the expense is dated today. Amounts are not validated.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category_name: &str,
        date: Option<NaiveDate>,
    ) -> &ExpenseRecord {
        let category = self.registry.get_or_create(category_name);
        let date = date.unwrap_or_else(|| self.clock.today());

        tracing::debug!(%amount, category = category_name, %date, "adding expense");
        self.records.push(ExpenseRecord::new(amount, category, date));
        &self.records[self.records.len() - 1]
    }

    /// Records dated in the given month, in insertion order
    ///
    /// Months outside 1-12 simply match nothing.
    pub fn records_by_month(&self, year: i32, month: u32) -> Vec<&ExpenseRecord> {
        self.records
            .iter()
            .filter(|record| record.is_in_month(year, month))
            .collect()
    }

    /// Aggregate the month's records into totals and per-category lines
    pub fn generate_report(&self, year: i32, month: u32) -> ReportData {
        let records = self.records_by_month(year, month);
        let data = ReportData::from_records(year, month, records);

        tracing::info!(
            year,
            month,
            records = data.record_count(),
            categories = data.categories.len(),
            total = %data.total,
            "generated report"
        );
        data
    }

    /// Every record, in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
