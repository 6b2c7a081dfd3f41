//! The fixed, ordered catalogue of record checks.
//!
//! Each check pairs the label shown in reports with the name rule and the DNS
//! question type actually sent. SPF, DKIM and DMARC are all TXT questions; DKIM
//! and DMARC go to a derived subdomain.

use hickory_resolver::proto::rr::RecordType;
use strum_macros::{Display, EnumIter};

use crate::config::{DKIM_PREFIX, DMARC_PREFIX};

/// Record categories reported for every domain, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordKind {
    Txt,
    Mx,
    Ns,
    A,
    Cname,
    Aaaa,
    Spf,
    Dkim,
    Dmarc,
    Soa,
    Ptr,
    Srv,
    Caa,
}

/// One entry of the catalogue: (label, name rule, question type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCheck {
    /// Label used in reports
    pub kind: RecordKind,
    /// Prepended to the domain to form the query name
    pub prefix: Option<&'static str>,
    /// DNS question type sent to the resolver
    pub query_type: RecordType,
}

impl RecordCheck {
    const fn bare(kind: RecordKind, query_type: RecordType) -> Self {
        Self {
            kind,
            prefix: None,
            query_type,
        }
    }

    const fn prefixed(kind: RecordKind, prefix: &'static str, query_type: RecordType) -> Self {
        Self {
            kind,
            prefix: Some(prefix),
            query_type,
        }
    }

    /// Name to query for `domain`.
    pub fn query_name(&self, domain: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}{domain}"),
            None => domain.to_string(),
        }
    }
}

/// Number of checks performed per domain.
pub const RECORD_CHECK_COUNT: usize = 13;

/// Every check, in the order it appears in reports.
pub static RECORD_CHECKS: [RecordCheck; RECORD_CHECK_COUNT] = [
    RecordCheck::bare(RecordKind::Txt, RecordType::TXT),
    RecordCheck::bare(RecordKind::Mx, RecordType::MX),
    RecordCheck::bare(RecordKind::Ns, RecordType::NS),
    RecordCheck::bare(RecordKind::A, RecordType::A),
    RecordCheck::bare(RecordKind::Cname, RecordType::CNAME),
    RecordCheck::bare(RecordKind::Aaaa, RecordType::AAAA),
    RecordCheck::bare(RecordKind::Spf, RecordType::TXT),
    RecordCheck::prefixed(RecordKind::Dkim, DKIM_PREFIX, RecordType::TXT),
    RecordCheck::prefixed(RecordKind::Dmarc, DMARC_PREFIX, RecordType::TXT),
    RecordCheck::bare(RecordKind::Soa, RecordType::SOA),
    RecordCheck::bare(RecordKind::Ptr, RecordType::PTR),
    RecordCheck::bare(RecordKind::Srv, RecordType::SRV),
    RecordCheck::bare(RecordKind::Caa, RecordType::CAA),
];
