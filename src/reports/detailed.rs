//! Detailed report: banner header and a record count for every category

use crate::models::Money;

use super::formatter::{push_indented, ReportFormatter};

#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedFormatter;

impl ReportFormatter for DetailedFormatter {
    fn format_header(&self, total: Money) -> String {
        format!(
            "Detailed report\n{}\nTotal amount: {}\n\n",
            "=".repeat(16),
            total
        )
    }

    fn format_category_block(&self, name: &str, lines: &[String]) -> String {
        let mut output = format!("Category: {}\nRecords: {}\n", name, lines.len());
        push_indented(&mut output, lines);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{ReportData, SimpleFormatter};
    use crate::services::{FixedClock, Tracker};
    use chrono::NaiveDate;

    #[test]
    fn test_header() {
        assert_eq!(
            DetailedFormatter.format_header(Money::from_cents(123456)),
            "Detailed report\n================\nTotal amount: 1234.56\n\n"
        );
    }

    #[test]
    fn test_category_block_has_count() {
        let lines = vec![
            "2023-10-01: Food - 10.00".to_string(),
            "2023-10-02: Food - 2.50".to_string(),
        ];
        assert_eq!(
            DetailedFormatter.format_category_block("Food", &lines),
            "Category: Food\nRecords: 2\n\t2023-10-01: Food - 10.00\n\t2023-10-02: Food - 2.50\n"
        );
    }

    #[test]
    fn test_empty_month() {
        let text = DetailedFormatter.render(&ReportData::empty(2023, 10));
        assert_eq!(text, "Detailed report\n================\nTotal amount: 0.00\n\n");
    }

    #[test]
    fn test_detailed_and_simple_share_content() {
        let today = NaiveDate::from_ymd_opt(2023, 10, 20).unwrap();
        let mut tracker = Tracker::with_clock(FixedClock(today));
        tracker.add_expense(Money::from_units(1000), "Food", None);
        tracker.add_expense(
            Money::from_units(500),
            "Transport",
            NaiveDate::from_ymd_opt(2023, 10, 17),
        );
        tracker.add_expense(Money::from_units(250), "Food", NaiveDate::from_ymd_opt(2023, 10, 3));
        let data = tracker.generate_report(2023, 10);

        let detailed = DetailedFormatter.render(&data);
        let simple = SimpleFormatter.render(&data);

        assert_eq!(
            detailed,
            "Detailed report\n\
             ================\n\
             Total amount: 1750.00\n\
             \n\
             Category: Food\n\
             Records: 2\n\
             \t2023-10-20: Food - 1000.00\n\
             \t2023-10-03: Food - 250.00\n\
             \n\
             Category: Transport\n\
             Records: 1\n\
             \t2023-10-17: Transport - 500.00\n\
             \n"
        );
        assert_eq!(
            simple,
            "Simple report\n\
             Total: 1750.00\n\
             \n\
             Food:\n\
             \t2023-10-20: Food - 1000.00\n\
             \t2023-10-03: Food - 250.00\n\
             \n\
             Transport:\n\
             \t2023-10-17: Transport - 500.00\n\
             \n"
        );

        let detail_lines: Vec<_> = detailed.lines().filter(|l| l.starts_with('\t')).collect();
        let simple_lines: Vec<_> = simple.lines().filter(|l| l.starts_with('\t')).collect();
        assert_eq!(detail_lines, simple_lines);
    }
}
