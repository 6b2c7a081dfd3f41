//! Terminal rendering of domain reports.

use std::io::{self, Write};

use colored::*;

use crate::dns::LookupOutcome;
use crate::report::DomainReport;

/// Writes one domain's results: a status line per record kind, then each
/// found value on its own indented line.
pub fn render_report<W: Write>(out: &mut W, report: &DomainReport) -> io::Result<()> {
    writeln!(out, "\nResults for domain: {}", report.domain())?;

    for (kind, outcome) in report.entries() {
        match outcome {
            LookupOutcome::Found(values) => {
                writeln!(out, "{}", format!("{kind} Record: \u{2714} Found").green())?;
                for value in values {
                    writeln!(out, "{}", format!("  - {value}").yellow())?;
                }
            }
            LookupOutcome::NotFound => {
                writeln!(out, "{}", format!("{kind} Record: \u{2718} Not Found").red())?;
            }
            LookupOutcome::Error(message) => {
                writeln!(
                    out,
                    "{}",
                    format!("{kind} Record: \u{2718} Error: {message}").red()
                )?;
            }
        }
    }
    Ok(())
}

/// Header printed while a domain is being checked for export.
pub fn render_progress<W: Write>(out: &mut W, domain: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("\nAnalyzing domain: {domain}").cyan())?;
    writeln!(out, "{}", "-".repeat(50))
}
