//! Text report export
//!
//! Reports are written in one call: the destination is created or
//! truncated, then the rendered text is written verbatim.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Month;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::{ReportData, ReportFormatter, ReportStyle};

/// Write report text to `path`, replacing any previous content
pub fn write_report<P: AsRef<Path>>(path: P, text: &str) -> TrackerResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| TrackerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| TrackerError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    writer
        .flush()
        .map_err(|e| TrackerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), bytes = text.len(), "wrote report");
    Ok(())
}

/// Render `data` with `formatter` and write it to `path`
pub fn save_report<P: AsRef<Path>>(
    formatter: &dyn ReportFormatter,
    data: &ReportData,
    path: P,
) -> TrackerResult<()> {
    write_report(path, &formatter.render(data))
}

/// File name for a monthly report, e.g. `detailed_october_2023_report.txt`
pub fn default_report_file_name(style: ReportStyle, year: i32, month: u32) -> String {
    let month_name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_lowercase())
        .unwrap_or_else(|| format!("month{}", month));
    format!("{}_{}_{}_report.txt", style, month_name, year)
}
