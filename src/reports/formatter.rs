//! Report formatting
//!
//! A formatter supplies a header and a per-category block; [`ReportFormatter::render`]
//! stitches them together for a whole [`ReportData`].

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Money;

use super::data::ReportData;
use super::detailed::DetailedFormatter;
use super::simple::SimpleFormatter;

/// Renders aggregated report data as text
pub trait ReportFormatter {
    /// Header block, including the blank line that follows it
    fn format_header(&self, total: Money) -> String;

    /// One category: a name line then each record line indented by a tab
    fn format_category_block(&self, name: &str, lines: &[String]) -> String {
        let mut output = format!("{}:\n", name);
        push_indented(&mut output, lines);
        output
    }

    /// Header, then every category block followed by a blank line
    fn render(&self, data: &ReportData) -> String {
        let mut output = self.format_header(data.total);
        for bucket in &data.categories {
            output.push_str(&self.format_category_block(&bucket.name, &bucket.lines));
            output.push('\n');
        }
        output
    }
}

/// Append each line as `\t<line>\n`
pub(crate) fn push_indented(output: &mut String, lines: &[String]) {
    for line in lines {
        output.push('\t');
        output.push_str(line);
        output.push('\n');
    }
}

/// The available report layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Short header and plain category blocks
    Simple,
    /// Banner header and a record count per category
    #[default]
    Detailed,
}

impl ReportStyle {
    /// All styles, in the order the original sample run wrote them
    pub const ALL: [ReportStyle; 2] = [ReportStyle::Detailed, ReportStyle::Simple];

    /// The formatter for this style
    pub fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            ReportStyle::Simple => Box::new(SimpleFormatter),
            ReportStyle::Detailed => Box::new(DetailedFormatter),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStyle::Simple => "simple",
            ReportStyle::Detailed => "detailed",
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
