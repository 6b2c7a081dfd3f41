//! Domain reports.
//!
//! A `DomainReport` is the single value handed to either the console printer
//! or the spreadsheet exporter.

mod builder;
mod types;

pub use builder::build_report;
pub use types::DomainReport;
