//! Error type definitions.
//!
//! Per-record DNS failures never appear here: they are captured as
//! `LookupOutcome::Error` in the report. These types cover the failures that
//! are fatal to a run (bad input, setup) plus the raw resolver error taxonomy
//! that the prober classifies.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors collecting the domains to check. All of them end the run.
#[derive(Error, Debug)]
pub enum InputError {
    /// Neither a domain nor a list file was supplied.
    #[error("No domain or list provided. Use -h for help.")]
    NoInput,

    /// The list file does not exist.
    #[error("File '{}' not found.", .0.display())]
    ListNotFound(PathBuf),

    /// The list file exists but could not be read.
    #[error("Failed to read '{}'", .path.display())]
    ListUnreadable {
        /// Path of the list file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The list file contains no domains after skipping blanks and comments.
    #[error("File '{}' does not contain any domains.", .0.display())]
    EmptyList(PathBuf),
}

/// Failure reported by a DNS client for a single query.
///
/// `NoRecords` and `NxDomain` are valid negative answers; only `Failed` is a
/// genuine resolution error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The name exists but has no data of the requested type.
    #[error("no records found")]
    NoRecords,

    /// The name does not exist.
    #[error("domain does not exist")]
    NxDomain,

    /// Timeout, malformed answer, network error, server failure, ...
    #[error("{0}")]
    Failed(String),
}
