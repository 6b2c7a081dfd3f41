//! In-memory DNS client for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use hickory_resolver::proto::rr::RecordType;

use crate::dns::DnsClient;
use crate::error_handling::QueryError;

/// Answers from a fixed table; anything not in the table has no records.
///
/// Records every question asked and the peak number of questions in flight.
#[derive(Default)]
pub(crate) struct StaticClient {
    answers: HashMap<(String, RecordType), Result<Vec<String>, QueryError>>,
    delays: HashMap<RecordType, Duration>,
    queries: Mutex<Vec<(String, RecordType)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StaticClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_answer(mut self, name: &str, query_type: RecordType, values: &[&str]) -> Self {
        self.answers.insert(
            (name.to_string(), query_type),
            Ok(values.iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    pub(crate) fn with_error(mut self, name: &str, query_type: RecordType, error: QueryError) -> Self {
        self.answers.insert((name.to_string(), query_type), Err(error));
        self
    }

    /// Delays every answer of `query_type`.
    pub(crate) fn with_delay(mut self, query_type: RecordType, delay: Duration) -> Self {
        self.delays.insert(query_type, delay);
        self
    }

    pub(crate) fn queries(&self) -> Vec<(String, RecordType)> {
        self.queries.lock().unwrap().clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl DnsClient for StaticClient {
    async fn query(&self, name: &str, query_type: RecordType) -> Result<Vec<String>, QueryError> {
        self.queries
            .lock()
            .unwrap()
            .push((name.to_string(), query_type));
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&query_type) {
            tokio::time::sleep(*delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.answers
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or(Err(QueryError::NoRecords))
    }
}
