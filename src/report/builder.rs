//! Per-domain report construction.

use std::time::Instant;

use futures::stream::{self, StreamExt};
use log::debug;

use crate::dns::{probe, DnsClient, RECORD_CHECKS};
use crate::report::DomainReport;

/// Runs every record check for `domain` and collects the outcomes.
///
/// Each check is an independent probe; a failure in one never affects or
/// aborts the others. At most `concurrency` probes are in flight at once
/// (`1` runs them one after another, `0` is treated as `1`). Entries always
/// come back in catalogue order whatever the completion order.
pub async fn build_report<C: DnsClient>(client: &C, domain: &str, concurrency: usize) -> DomainReport {
    let start = Instant::now();

    let entries = stream::iter(RECORD_CHECKS.iter())
        .map(|check| async move {
            let name = check.query_name(domain);
            let outcome = probe(client, &name, check.query_type).await;
            (check.kind, outcome)
        })
        // buffered (not buffer_unordered) yields in input order
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let report = DomainReport::new(domain, entries);
    debug!(
        "Checked {} in {:.2}s: {} found, {} errors",
        domain,
        start.elapsed().as_secs_f64(),
        report.found_count(),
        report.error_count()
    );
    report
}
