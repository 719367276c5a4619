//! Canned DNS answers for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::{Query, ResponseCode};
use hickory_resolver::proto::rr::{Name, RecordType};

use super::{MxHost, RecordLookup};

/// Builds the error hickory returns for an answer without records.
///
/// `ResponseCode::NoError` is NODATA, `ResponseCode::NXDomain` a missing name.
pub fn no_records_error(name: &str, record_type: RecordType, code: ResponseCode) -> ResolveError {
    let name = Name::from_ascii(name).unwrap_or_else(|_| Name::root());
    ResolveError::from(ResolveErrorKind::NoRecordsFound {
        query: Box::new(Query::query(name, record_type)),
        soa: None,
        negative_ttl: None,
        response_code: code,
        trusted: true,
    })
}

enum Answer<T> {
    Records(Vec<T>),
    Failure(String),
    NxDomain,
}

impl<T: Clone> Answer<T> {
    fn resolve(&self, name: &str, record_type: RecordType) -> Result<Vec<T>, ResolveError> {
        match self {
            Answer::Records(records) => Ok(records.clone()),
            Answer::Failure(message) => Err(ResolveError::from(message.clone())),
            Answer::NxDomain => Err(no_records_error(name, record_type, ResponseCode::NXDomain)),
        }
    }
}

/// [`RecordLookup`] answering from fixed tables.
///
/// Names with no entry answer with an empty record set.
#[derive(Default)]
pub struct StubLookup {
    mx: HashMap<String, Answer<MxHost>>,
    txt: HashMap<String, Answer<String>>,
    queries: AtomicUsize,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mx(mut self, domain: &str, hosts: &[(u16, &str)]) -> Self {
        let hosts = hosts
            .iter()
            .map(|(pref, exchange)| MxHost::new(*pref, *exchange))
            .collect();
        self.mx.insert(domain.to_string(), Answer::Records(hosts));
        self
    }

    pub fn with_mx_error(mut self, domain: &str, message: &str) -> Self {
        self.mx
            .insert(domain.to_string(), Answer::Failure(message.to_string()));
        self
    }

    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        let records = records.iter().map(|r| r.to_string()).collect();
        self.txt.insert(name.to_string(), Answer::Records(records));
        self
    }

    pub fn with_txt_error(mut self, name: &str, message: &str) -> Self {
        self.txt
            .insert(name.to_string(), Answer::Failure(message.to_string()));
        self
    }

    /// Makes both MX and TXT queries for `name` answer NXDOMAIN.
    pub fn with_nxdomain(mut self, name: &str) -> Self {
        self.mx.insert(name.to_string(), Answer::NxDomain);
        self.txt.insert(name.to_string(), Answer::NxDomain);
        self
    }

    /// Number of queries answered so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordLookup for StubLookup {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>, ResolveError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match self.mx.get(domain) {
            Some(answer) => answer.resolve(domain, RecordType::MX),
            None => Ok(Vec::new()),
        }
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match self.txt.get(name) {
            Some(answer) => answer.resolve(name, RecordType::TXT),
            None => Ok(Vec::new()),
        }
    }
}
