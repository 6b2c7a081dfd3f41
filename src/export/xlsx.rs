//! Spreadsheet (xlsx) writer.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};

use crate::config::SHEET_NAME;
use crate::export::layout::{SheetLayout, COL_DETAILS, HEADER, NOTE_GAP_ROWS};

const COLUMN_WIDTHS: [f64; 4] = [28.0, 18.0, 80.0, 10.0];

/// Writes the layout to a single-sheet workbook.
///
/// Row 0 is the header and data rows follow. The note sits `NOTE_GAP_ROWS`
/// blank rows below the last data row.
pub fn write_xlsx(layout: &SheetLayout, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let plain = Format::new().set_align(FormatAlign::VerticalCenter);

    for (col, (title, width)) in HEADER.iter().zip(COLUMN_WIDTHS).enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        worksheet.set_column_width(col as u16, width)?;
    }

    for merge in &layout.merges {
        let value = &layout.rows[merge.first_row][merge.column];
        worksheet.merge_range(
            sheet_row(merge.first_row),
            merge.column as u16,
            sheet_row(merge.last_row),
            merge.column as u16,
            value,
            &centered,
        )?;
    }

    for (row_idx, row) in layout.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if layout.merge_at(row_idx, col).is_some() {
                continue;
            }
            let format = if col == COL_DETAILS { &plain } else { &centered };
            worksheet.write_string_with_format(sheet_row(row_idx), col as u16, value, format)?;
        }
    }

    worksheet.write_string_with_format(
        note_row(layout.rows.len()),
        0,
        &layout.note,
        &centered,
    )?;

    workbook.save(path)?;
    Ok(())
}

/// Sheet row for a layout row (the header occupies row 0).
fn sheet_row(layout_row: usize) -> u32 {
    layout_row as u32 + 1
}

fn note_row(data_rows: usize) -> u32 {
    sheet_row(data_rows + NOTE_GAP_ROWS)
}
