//! Export of domain reports to a tabular file.
//!
//! Reports are first laid out into a format-independent grid (`layout`), then
//! written as an xlsx workbook or a flat CSV table.

mod csv;
mod layout;
mod types;
mod xlsx;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::report::DomainReport;

pub use layout::{
    layout_reports, MergedRange, SheetLayout, COL_DETAILS, COL_DOMAIN, COL_FOUND,
    COL_RECORD_TYPE, HEADER, NOTE_GAP_ROWS,
};
pub use types::ExportFormat;

/// Writes `reports` to `path`, choosing the format from the extension.
///
/// # Returns
///
/// The number of data rows written (excluding the header and note).
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_reports(reports: &[DomainReport], path: &Path) -> Result<usize> {
    let layout = layout_reports(reports);
    let format = ExportFormat::from_path(path);

    match format {
        ExportFormat::Xlsx => xlsx::write_xlsx(&layout, path)
            .with_context(|| format!("Failed to write spreadsheet: {}", path.display()))?,
        ExportFormat::Csv => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            csv::write_csv(&layout, file)
                .with_context(|| format!("Failed to write CSV: {}", path.display()))?
        }
    }

    info!(
        "Exported {} row(s) for {} domain(s) to {} ({:?})",
        layout.rows.len(),
        reports.len(),
        path.display(),
        format
    );
    Ok(layout.rows.len())
}
