//! Sample run: seeds three expenses and writes both October 2023 reports

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::export::{default_report_file_name, save_report};
use crate::models::Money;
use crate::reports::ReportStyle;
use crate::services::{Clock, Tracker};

const DEMO_YEAR: i32 = 2023;
const DEMO_MONTH: u32 = 10;

/// Seed the sample expenses into `tracker`
///
/// The first expense is undated, so it only shows up in the October 2023
/// report when the tracker's clock says today is in that month.
pub fn seed_demo_expenses(tracker: &mut Tracker) {
    tracker.add_expense(Money::from_units(1000), "Food", None);
    tracker.add_expense(
        Money::from_units(500),
        "Transport",
        NaiveDate::from_ymd_opt(DEMO_YEAR, DEMO_MONTH, 17),
    );
    tracker.add_expense(
        Money::from_units(2000),
        "Entertainment",
        NaiveDate::from_ymd_opt(DEMO_YEAR, DEMO_MONTH, 15),
    );
}

/// Write the detailed and simple demo reports into `output_dir`
///
/// Returns the written paths, detailed first.
pub fn run_demo(output_dir: &Path, clock: impl Clock + 'static) -> TrackerResult<Vec<PathBuf>> {
    let mut tracker = Tracker::with_clock(clock);
    seed_demo_expenses(&mut tracker);

    let data = tracker.generate_report(DEMO_YEAR, DEMO_MONTH);

    let mut written = Vec::with_capacity(ReportStyle::ALL.len());
    for style in ReportStyle::ALL {
        let path = output_dir.join(default_report_file_name(style, DEMO_YEAR, DEMO_MONTH));
        save_report(style.formatter().as_ref(), &data, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// Handle the `demo` command
pub fn handle_demo_command(output_dir: &Path, clock: impl Clock + 'static) -> TrackerResult<()> {
    for path in run_demo(output_dir, clock)? {
        println!("Report written to: {}", path.display());
    }
    Ok(())
}
