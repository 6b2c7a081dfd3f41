//! Sheet layout: the cell grid and merged ranges for a set of reports.
//!
//! Computing the layout is independent of the file format; the xlsx writer
//! merges the ranges, the CSV writer repeats merged values on every row.

use crate::config::AUTHOR_CREDIT;
use crate::dns::LookupOutcome;
use crate::report::DomainReport;

/// Column titles.
pub const HEADER: [&str; 4] = ["Domain", "Record Type", "Details", "Found"];

/// Column of the domain cell
pub const COL_DOMAIN: usize = 0;
/// Column of the record type cell
pub const COL_RECORD_TYPE: usize = 1;
/// Column of the details cell
pub const COL_DETAILS: usize = 2;
/// Column of the found cell
pub const COL_FOUND: usize = 3;

/// Blank rows between the last data row and the note.
pub const NOTE_GAP_ROWS: usize = 2;

/// A vertical merge within one column. Rows index into `SheetLayout::rows`
/// and are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRange {
    pub column: usize,
    pub first_row: usize,
    pub last_row: usize,
}

impl MergedRange {
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.column == column && (self.first_row..=self.last_row).contains(&row)
    }
}

/// Data rows below the header, the merges over them, and the trailing note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Every cell is filled; cells covered by a merge repeat the merged value.
    pub rows: Vec<[String; 4]>,
    pub merges: Vec<MergedRange>,
    pub note: String,
}

impl SheetLayout {
    /// Merge covering `(row, column)`, if any.
    pub fn merge_at(&self, row: usize, column: usize) -> Option<&MergedRange> {
        self.merges.iter().find(|m| m.contains(row, column))
    }
}

/// Lays out reports one block per domain.
///
/// A record with N found values spans N rows with its type and "Yes" merged;
/// a missing record is a single "Missing" / "No" row; a failed lookup is a
/// single "Error: ..." / "Error" row. The domain cell is merged across the
/// whole block. Single-row ranges are not merged.
pub fn layout_reports(reports: &[DomainReport]) -> SheetLayout {
    let mut rows: Vec<[String; 4]> = Vec::new();
    let mut merges = Vec::new();

    for report in reports {
        let domain = report.domain();
        let block_start = rows.len();

        for (kind, outcome) in report.entries() {
            let record_start = rows.len();
            let label = format!("{kind} Record");

            match outcome {
                LookupOutcome::Found(values) => {
                    for value in values {
                        rows.push(row(domain, &label, value, "Yes"));
                    }
                }
                LookupOutcome::NotFound => rows.push(row(domain, &label, "Missing", "No")),
                LookupOutcome::Error(message) => {
                    rows.push(row(domain, &label, &format!("Error: {message}"), "Error"))
                }
            }

            let record_end = rows.len() - 1;
            push_merge(&mut merges, COL_RECORD_TYPE, record_start, record_end);
            push_merge(&mut merges, COL_FOUND, record_start, record_end);
        }

        if rows.len() > block_start {
            push_merge(&mut merges, COL_DOMAIN, block_start, rows.len() - 1);
        }
    }

    SheetLayout {
        rows,
        merges,
        note: AUTHOR_CREDIT.to_string(),
    }
}

fn row(domain: &str, record_type: &str, details: &str, found: &str) -> [String; 4] {
    [
        domain.to_string(),
        record_type.to_string(),
        details.to_string(),
        found.to_string(),
    ]
}

fn push_merge(merges: &mut Vec<MergedRange>, column: usize, first_row: usize, last_row: usize) {
    if last_row > first_row {
        merges.push(MergedRange {
            column,
            first_row,
            last_row,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::RecordKind;
    use strum::IntoEnumIterator;

    fn all_missing(domain: &str) -> DomainReport {
        DomainReport::from_outcomes(domain, std::array::from_fn(|_| LookupOutcome::NotFound))
    }

    fn with_three_mx(domain: &str) -> DomainReport {
        DomainReport::from_outcomes(
            domain,
            std::array::from_fn(|i| match i {
                1 => LookupOutcome::Found(vec![
                    "10 mx1.example.com.".to_string(),
                    "20 mx2.example.com.".to_string(),
                    "30 mx3.example.com.".to_string(),
                ]),
                _ => LookupOutcome::NotFound,
            }),
        )
    }

    #[test]
    fn test_all_missing_is_thirteen_single_row_blocks() {
        let layout = layout_reports(&[all_missing("example.com")]);

        assert_eq!(layout.rows.len(), 13);
        for (row, kind) in layout.rows.iter().zip(RecordKind::iter()) {
            assert_eq!(row[COL_DOMAIN], "example.com");
            assert_eq!(row[COL_RECORD_TYPE], format!("{kind} Record"));
            assert_eq!(row[COL_DETAILS], "Missing");
            assert_eq!(row[COL_FOUND], "No");
        }
        // Only the domain column spans rows
        assert_eq!(
            layout.merges,
            vec![MergedRange {
                column: COL_DOMAIN,
                first_row: 0,
                last_row: 12
            }]
        );
    }

    #[test]
    fn test_three_values_make_a_three_row_merged_block() {
        let layout = layout_reports(&[with_three_mx("example.com")]);

        assert_eq!(layout.rows.len(), 15);
        let mx_rows: Vec<&[String; 4]> = layout.rows[1..4].iter().collect();
        for row in &mx_rows {
            assert_eq!(row[COL_RECORD_TYPE], "MX Record");
            assert_eq!(row[COL_FOUND], "Yes");
        }
        assert_eq!(mx_rows[0][COL_DETAILS], "10 mx1.example.com.");
        assert_eq!(mx_rows[1][COL_DETAILS], "20 mx2.example.com.");
        assert_eq!(mx_rows[2][COL_DETAILS], "30 mx3.example.com.");

        for column in [COL_RECORD_TYPE, COL_FOUND] {
            assert!(layout.merges.contains(&MergedRange {
                column,
                first_row: 1,
                last_row: 3
            }));
        }
        assert!(layout.merge_at(2, COL_DETAILS).is_none());
        assert_eq!(layout.rows[4][COL_RECORD_TYPE], "NS Record");
        assert!(layout.merge_at(4, COL_RECORD_TYPE).is_none());
    }

    #[test]
    fn test_domain_blocks_are_consecutive() {
        let layout = layout_reports(&[all_missing("a.example"), with_three_mx("b.example")]);

        assert_eq!(layout.rows.len(), 13 + 15);
        assert!(layout.merges.contains(&MergedRange {
            column: COL_DOMAIN,
            first_row: 0,
            last_row: 12
        }));
        assert!(layout.merges.contains(&MergedRange {
            column: COL_DOMAIN,
            first_row: 13,
            last_row: 27
        }));
        assert!(layout.merges.contains(&MergedRange {
            column: COL_FOUND,
            first_row: 14,
            last_row: 16
        }));
        assert_eq!(layout.rows[13][COL_DOMAIN], "b.example");
    }

    #[test]
    fn test_error_is_single_row() {
        let report = DomainReport::from_outcomes(
            "example.com",
            std::array::from_fn(|i| match i {
                0 => LookupOutcome::Error("request timed out".to_string()),
                _ => LookupOutcome::NotFound,
            }),
        );
        let layout = layout_reports(&[report]);
        assert_eq!(layout.rows.len(), 13);
        assert_eq!(layout.rows[0][COL_DETAILS], "Error: request timed out");
        assert_eq!(layout.rows[0][COL_FOUND], "Error");
    }

    #[test]
    fn test_note_credits_author() {
        let layout = layout_reports(&[]);
        assert!(layout.rows.is_empty());
        assert!(layout.merges.is_empty());
        assert!(layout.note.starts_with("Developed by"));
    }
}
