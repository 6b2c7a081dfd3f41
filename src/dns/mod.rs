//! DNS record probing.
//!
//! This module provides:
//! - The fixed catalogue of record checks (TXT, MX, ..., SPF, DKIM, DMARC, ..., CAA)
//! - The `DnsClient` seam and its `hickory-resolver` implementation
//! - `probe`, which classifies one query into Found / NotFound / Error

mod catalogue;
mod client;
mod probe;

// Re-export public API
pub use catalogue::{RecordCheck, RecordKind, RECORD_CHECKS, RECORD_CHECK_COUNT};
pub use client::{DnsClient, HickoryClient};
pub use probe::{probe, LookupOutcome};

#[cfg(test)]
pub(crate) mod test_helpers;
