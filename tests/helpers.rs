// Shared test helpers: an in-memory DNS client and temp-file utilities.

use std::collections::HashMap;
use std::path::PathBuf;

use hickory_resolver::proto::rr::RecordType;
use recscan::{DnsClient, QueryError};
use tempfile::TempDir;

/// Answers from a fixed table keyed by (name, type); everything else has no records.
#[derive(Default)]
pub struct TableClient {
    answers: HashMap<(String, RecordType), Result<Vec<String>, QueryError>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl TableClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, name: &str, query_type: RecordType, values: &[&str]) -> Self {
        self.answers.insert(
            (name.to_string(), query_type),
            Ok(values.iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    pub fn fail(mut self, name: &str, query_type: RecordType, message: &str) -> Self {
        self.answers.insert(
            (name.to_string(), query_type),
            Err(QueryError::Failed(message.to_string())),
        );
        self
    }

    pub fn nxdomain(mut self, name: &str, query_type: RecordType) -> Self {
        self.answers
            .insert((name.to_string(), query_type), Err(QueryError::NxDomain));
        self
    }
}

impl DnsClient for TableClient {
    async fn query(&self, name: &str, query_type: RecordType) -> Result<Vec<String>, QueryError> {
        self.answers
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or(Err(QueryError::NoRecords))
    }
}

/// The example.com fixture: only A and NS resolve.
#[allow(dead_code)]
pub fn example_com_client() -> TableClient {
    TableClient::new()
        .answer("example.com", RecordType::A, &["93.184.216.34"])
        .answer(
            "example.com",
            RecordType::NS,
            &["a.iana-servers.net.", "b.iana-servers.net."],
        )
}

/// Writes a domain list file into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_domain_list(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("domains.txt");
    std::fs::write(&path, content).expect("Failed to write domain list");
    path
}
