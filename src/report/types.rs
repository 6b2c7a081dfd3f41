//! Report types.

use crate::dns::{LookupOutcome, RecordKind, RECORD_CHECKS, RECORD_CHECK_COUNT};

/// All record outcomes for one domain.
///
/// Holds exactly one entry per record check, in catalogue order. Built once per
/// domain per run and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainReport {
    domain: String,
    entries: Vec<(RecordKind, LookupOutcome)>,
}

impl DomainReport {
    /// Pairs outcomes with the catalogue, one per check, in catalogue order.
    pub fn from_outcomes(
        domain: impl Into<String>,
        outcomes: [LookupOutcome; RECORD_CHECK_COUNT],
    ) -> Self {
        Self {
            domain: domain.into(),
            entries: RECORD_CHECKS
                .iter()
                .map(|check| check.kind)
                .zip(outcomes)
                .collect(),
        }
    }

    /// Callers must supply one entry per check in catalogue order.
    pub(crate) fn new(domain: &str, entries: Vec<(RecordKind, LookupOutcome)>) -> Self {
        debug_assert!(entries
            .iter()
            .map(|(kind, _)| *kind)
            .eq(RECORD_CHECKS.iter().map(|check| check.kind)));
        Self {
            domain: domain.to_string(),
            entries,
        }
    }

    /// The domain as supplied.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// `(record kind, outcome)` pairs in report order.
    pub fn entries(&self) -> &[(RecordKind, LookupOutcome)] {
        &self.entries
    }

    /// Outcome for one record kind.
    pub fn get(&self, kind: RecordKind) -> Option<&LookupOutcome> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }

    /// Number of record kinds that resolved.
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_found()).count()
    }

    /// Number of record kinds whose lookup failed.
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_error()).count()
    }
}
