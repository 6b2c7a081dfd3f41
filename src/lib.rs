//! recscan library: DNS record checks for domains.
//!
//! For each domain a fixed, ordered set of record checks is run (TXT, MX, NS,
//! A, CNAME, AAAA, SPF, DKIM, DMARC, SOA, PTR, SRV, CAA). Every check yields
//! Found, NotFound or Error, and the resulting `DomainReport` is either
//! printed to the terminal or exported to a spreadsheet.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use recscan::{build_report, init_resolver, HickoryClient};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = HickoryClient::new(init_resolver(Duration::from_secs(5)));
//! let report = build_report(&client, "example.com", 1).await;
//! for (kind, outcome) in report.entries() {
//!     println!("{kind}: {outcome:?}");
//! }
//! # }
//! ```

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use dns::{probe, DnsClient, HickoryClient, LookupOutcome, RecordKind};
pub use error_handling::{InputError, QueryError};
pub use export::export_reports;
pub use initialization::init_resolver;
pub use report::{build_report, DomainReport};
pub use run::{run, run_with_writer, RunSummary};

// Internal run module (contains the per-run orchestration)
mod run {
    use std::io::{self, Write};
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{collect_domains, render_progress, render_report};
    use crate::config::Config;
    use crate::dns::DnsClient;
    use crate::export::export_reports;
    use crate::report::build_report;

    /// Outcome of a whole run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RunSummary {
        /// Number of domains checked
        pub domains: usize,
        /// Record kinds found, summed over all domains
        pub found: usize,
        /// Failed lookups, summed over all domains
        pub errors: usize,
        /// Spreadsheet written, if any
        pub output: Option<PathBuf>,
    }

    /// Runs a check, printing to stdout.
    ///
    /// See [`run_with_writer`].
    pub async fn run<C: DnsClient>(config: &Config, client: &C) -> Result<RunSummary> {
        run_with_writer(config, client, &mut io::stdout()).await
    }

    /// Collects the domains, builds one report per domain (domains run one
    /// after another), then hands the reports to exactly one consumer: the
    /// console printer, or the exporter when `config.output` is set.
    ///
    /// # Errors
    ///
    /// Fails on configuration-level problems only (no input, unreadable list,
    /// export failure). Per-record lookup failures are part of the reports.
    pub async fn run_with_writer<C: DnsClient, W: Write>(
        config: &Config,
        client: &C,
        out: &mut W,
    ) -> Result<RunSummary> {
        let domains = collect_domains(config.domain.as_deref(), config.list.as_deref())?;
        let start = Instant::now();
        info!("Checking {} domain(s)", domains.len());

        let mut reports = Vec::with_capacity(domains.len());
        for domain in &domains {
            if config.output.is_some() {
                render_progress(out, domain).context("Failed to write progress")?;
            }
            let report = build_report(client, domain, config.concurrency).await;
            if config.output.is_none() {
                render_report(out, &report).context("Failed to write report")?;
            }
            reports.push(report);
        }

        let summary = RunSummary {
            domains: reports.len(),
            found: reports.iter().map(|r| r.found_count()).sum(),
            errors: reports.iter().map(|r| r.error_count()).sum(),
            output: config.output.clone(),
        };

        if let Some(path) = &config.output {
            export_reports(&reports, path)?;
            writeln!(out, "Results saved to {}", path.display())
                .context("Failed to write summary")?;
        }

        info!(
            "Checked {} domain(s) in {:.2}s: {} record(s) found, {} lookup error(s)",
            summary.domains,
            start.elapsed().as_secs_f64(),
            summary.found,
            summary.errors
        );
        Ok(summary)
    }
}
