//! Single-record probing and outcome classification.

use hickory_resolver::proto::rr::RecordType;
use log::{debug, warn};

use crate::dns::client::DnsClient;
use crate::error_handling::QueryError;

/// Result of one record check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// One or more answers, in resolver order. Never empty.
    Found(Vec<String>),
    /// No data of this type, or the name does not exist.
    NotFound,
    /// Resolution failed (timeout, malformed response, server failure, ...).
    Error(String),
}

impl LookupOutcome {
    /// `Found` for a non-empty answer, `NotFound` otherwise.
    pub fn from_answers(values: Vec<String>) -> Self {
        if values.is_empty() {
            Self::NotFound
        } else {
            Self::Found(values)
        }
    }

    /// Whether the record is present.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether the lookup failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Answers for a `Found` outcome; empty otherwise.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Found(values) => values,
            _ => &[],
        }
    }
}

/// Performs one query and classifies the result.
///
/// "No data" and "domain does not exist" are negative answers, not failures,
/// and both map to `NotFound`. Any other failure is captured as `Error` and
/// never propagated.
pub async fn probe<C: DnsClient>(client: &C, name: &str, query_type: RecordType) -> LookupOutcome {
    match client.query(name, query_type).await {
        Ok(values) => {
            debug!("{query_type} {name}: {} answer(s)", values.len());
            LookupOutcome::from_answers(values)
        }
        Err(QueryError::NoRecords) | Err(QueryError::NxDomain) => {
            debug!("{query_type} {name}: not found");
            LookupOutcome::NotFound
        }
        Err(QueryError::Failed(message)) => {
            warn!("{query_type} lookup failed for {name}: {message}");
            LookupOutcome::Error(message)
        }
    }
}
