//! Configuration constants.
//!
//! Timeouts, limits, and the fixed labels used by the report and exporters.

/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Attempts per DNS query made by the resolver itself (no retry on top of this)
pub const DNS_ATTEMPTS: usize = 1;

/// Upper bound for `--concurrency`; keeps per-domain bursts below typical resolver rate limits
pub const MAX_CONCURRENCY: usize = 16;

/// Prefix for the DKIM lookup name
pub const DKIM_PREFIX: &str = "_domainkey.";
/// Prefix for the DMARC lookup name
pub const DMARC_PREFIX: &str = "_dmarc.";

/// Worksheet title for spreadsheet exports
pub const SHEET_NAME: &str = "DNS Records";

/// Authorship credit printed under the banner and appended to exports.
pub const AUTHOR_CREDIT: &str = concat!("Developed by ", env!("CARGO_PKG_AUTHORS"));
