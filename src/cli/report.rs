//! CLI command for ad-hoc monthly reports
//!
//! Expenses are passed on the command line; nothing is stored between runs.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::export::write_report;
use crate::reports::ReportStyle;
use crate::services::{Clock, Tracker};

use super::expense::ExpenseArg;

/// Arguments of the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report year (e.g., 2023)
    #[arg(short, long)]
    pub year: i32,

    /// Report month (1-12)
    #[arg(short, long)]
    pub month: u32,

    /// Report layout (defaults to the configured style)
    #[arg(short, long, value_enum)]
    pub style: Option<ReportStyle>,

    /// Expense as AMOUNT:CATEGORY[:YYYY-MM-DD]; undated expenses are dated today
    #[arg(short, long = "expense", value_name = "EXPENSE")]
    pub expenses: Vec<ExpenseArg>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Build a tracker from the given expenses and render the month's report
pub fn render_report(
    expenses: &[ExpenseArg],
    year: i32,
    month: u32,
    style: ReportStyle,
    clock: impl Clock + 'static,
) -> String {
    let mut tracker = Tracker::with_clock(clock);
    for expense in expenses {
        expense.record(&mut tracker);
    }

    let data = tracker.generate_report(year, month);
    style.formatter().render(&data)
}

/// Handle the `report` command
pub fn handle_report_command(
    settings: &Settings,
    args: ReportArgs,
    clock: impl Clock + 'static,
) -> TrackerResult<()> {
    let style = args.style.unwrap_or(settings.default_style);
    let text = render_report(&args.expenses, args.year, args.month, style, clock);

    match args.output {
        Some(path) => {
            write_report(&path, &text)?;
            println!("Report written to: {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
