//! Export types.

use std::path::Path;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Excel workbook with merged cells (default)
    Xlsx,
    /// Flat CSV table, merged values repeated on every row
    Csv,
}

impl ExportFormat {
    /// Picks the format from the output file extension: `.csv` (any case)
    /// selects CSV, anything else the spreadsheet.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("OUT.CSV")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out.xlsx")), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::from_path(Path::new("results")), ExportFormat::Xlsx);
    }
}
