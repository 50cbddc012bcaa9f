//! Simple report: a two-line header and plain category blocks

use crate::models::Money;

use super::formatter::ReportFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormatter;

impl ReportFormatter for SimpleFormatter {
    fn format_header(&self, total: Money) -> String {
        format!("Simple report\nTotal: {}\n\n", total)
    }
}
