//! Configuration types and CLI options.
//!
//! `Opt` is the clap-derived command line; `Config` is the library-facing
//! configuration that can be built without going through the CLI.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DNS_TIMEOUT_SECS, MAX_CONCURRENCY};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Single domain, printed to the terminal
/// recscan example.com
///
/// # List of domains, exported to a spreadsheet
/// recscan -l domains.txt -o results.xlsx
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "recscan",
    version,
    about = "Check DNS records (SPF, DKIM, DMARC, etc.) for domains.",
    after_help = "Example usage:\n  Single domain: recscan domain.com\n  List of domains: recscan -l domains.txt"
)]
pub struct Opt {
    /// The domain to check (for a single domain). Takes precedence over --list.
    pub domain: Option<String>,

    /// Path to a text file containing a list of domains (one per line)
    #[arg(short, long, value_parser)]
    pub list: Option<PathBuf>,

    /// Save the results to a spreadsheet (.xlsx, or .csv for a flat table)
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Maximum DNS queries in flight per domain (1 = sequential)
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Skip the ASCII-art banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Library configuration (no CLI dependencies).
///
/// ```no_run
/// use recscan::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Single domain to check
    pub domain: Option<String>,
    /// File of domains, one per line
    pub list: Option<PathBuf>,
    /// Spreadsheet output path; console output when `None`
    pub output: Option<PathBuf>,
    /// Maximum DNS queries in flight per domain
    pub concurrency: usize,
    /// Per-query DNS timeout in seconds
    pub timeout_seconds: u64,
    /// Log level
    pub log_level: LogLevel,
    /// Log format
    pub log_format: LogFormat,
    /// Print the banner before running
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            list: None,
            output: None,
            concurrency: 1,
            timeout_seconds: DNS_TIMEOUT_SECS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            show_banner: true,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domain: opt.domain,
            list: opt.list,
            output: opt.output,
            concurrency: opt.concurrency,
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level,
            log_format: opt.log_format,
            show_banner: !opt.no_banner,
        }
    }
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid --{}: {message}", .field.replace('_', "-"))]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What the accepted values are
    pub message: String,
}

impl Config {
    /// Checks numeric options against their accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.concurrency == 0 || self.concurrency > MAX_CONCURRENCY {
            return Err(ConfigValidationError {
                field: "concurrency",
                message: format!("must be between 1 and {MAX_CONCURRENCY}"),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
