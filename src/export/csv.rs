//! CSV export (flattened view of the sheet layout).
//!
//! CSV has no merged cells, so each row carries its domain, record type and
//! found flag in full.

use std::io::Write;

use anyhow::Result;
use csv::Writer;

use crate::export::layout::{SheetLayout, HEADER, NOTE_GAP_ROWS};

/// Writes the header, every data row, `NOTE_GAP_ROWS` blank rows, then the note.
pub fn write_csv<W: Write>(layout: &SheetLayout, writer: W) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    writer.write_record(HEADER)?;
    for row in &layout.rows {
        writer.write_record(row)?;
    }
    for _ in 0..NOTE_GAP_ROWS {
        writer.write_record(["", "", "", ""])?;
    }
    writer.write_record([layout.note.as_str(), "", "", ""])?;

    writer.flush()?;
    Ok(())
}
