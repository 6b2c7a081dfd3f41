//! DNS client seam.
//!
//! The prober only needs "ask one question, get textual answers or a
//! classified failure". `HickoryClient` provides that over
//! `hickory-resolver`; tests substitute an in-memory client.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::proto::ProtoErrorKind;
use hickory_resolver::{ResolveError, TokioResolver};

use crate::error_handling::QueryError;

/// A client able to answer a single DNS question.
pub trait DnsClient {
    /// Queries `name` for records of `query_type`.
    ///
    /// On success returns each answer in canonical textual form, in the order
    /// the resolver returned them.
    fn query(
        &self,
        name: &str,
        query_type: RecordType,
    ) -> impl Future<Output = Result<Vec<String>, QueryError>> + Send;
}

/// `DnsClient` backed by a shared hickory resolver.
#[derive(Clone)]
pub struct HickoryClient {
    resolver: Arc<TokioResolver>,
}

impl HickoryClient {
    /// Wraps an initialized resolver (see `initialization::init_resolver`).
    pub fn new(resolver: Arc<TokioResolver>) -> Self {
        Self { resolver }
    }
}

impl DnsClient for HickoryClient {
    async fn query(&self, name: &str, query_type: RecordType) -> Result<Vec<String>, QueryError> {
        match self.resolver.lookup(name, query_type).await {
            Ok(lookup) => Ok(lookup
                .record_iter()
                // CNAME chain records ride along in the answer section
                .filter(|record| record.record_type() == query_type)
                // TXT character-strings are concatenated (lossy UTF-8) by hickory
                .map(|record| record.data().to_string())
                .collect()),
            Err(e) => Err(classify_resolve_error(&e)),
        }
    }
}

/// Maps a resolver failure to a `QueryError`.
///
/// hickory reports every negative response as `NoRecordsFound`, whatever the
/// response code, so the code decides: NOERROR is an empty answer, NXDOMAIN a
/// missing name, and anything else (SERVFAIL, REFUSED, ...) a real failure.
fn classify_resolve_error(err: &ResolveError) -> QueryError {
    match negative_response_code(err) {
        Some(ResponseCode::NoError) => QueryError::NoRecords,
        Some(ResponseCode::NXDomain) => QueryError::NxDomain,
        Some(code) => QueryError::Failed(server_failure_message(code)),
        None => QueryError::Failed(err.to_string()),
    }
}

fn negative_response_code(err: &ResolveError) -> Option<ResponseCode> {
    match err.proto()?.kind() {
        ProtoErrorKind::NoRecordsFound { response_code, .. } => Some(*response_code),
        _ => None,
    }
}

fn server_failure_message(code: ResponseCode) -> String {
    format!("server responded {code} (rcode {})", u16::from(code))
}
