//! DNS record queries (MX, TXT).

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;
use serde::Serialize;

/// A mail exchanger for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxHost {
    /// Lower values are tried first
    pub preference: u16,
    /// Exchange hostname, as returned by the resolver
    pub exchange: String,
}

impl MxHost {
    /// Creates a host entry.
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Source of MX and TXT answers.
///
/// A name that exists without records of the type (NODATA) answers `Ok(vec![])`.
/// Everything else that prevents an answer is `Err`: NXDOMAIN, timeouts, server
/// failures, I/O or protocol errors.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Returns the MX records of `domain`, sorted by preference.
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>, ResolveError>;

    /// Returns the TXT records of `name` in resolver order.
    ///
    /// A record made of several character-strings is returned as their concatenation.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ResolveError>;
}

/// Returns true if the name exists but has no records of the queried type (NODATA).
///
/// NXDOMAIN is not included: a name that does not exist is a failed lookup.
pub fn is_no_records(error: &ResolveError) -> bool {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            *response_code != ResponseCode::NXDomain
        }
        _ => false,
    }
}

/// Returns true if the queried name does not exist.
pub fn is_nxdomain(error: &ResolveError) -> bool {
    matches!(
        error.kind(),
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NXDomain,
            ..
        }
    )
}

/// Turns a NODATA error into an empty record set and logs real failures.
pub(crate) fn no_records_as_empty<T>(
    result: Result<Vec<T>, ResolveError>,
    name: &str,
    record_type: RecordType,
) -> Result<Vec<T>, ResolveError> {
    match result {
        Ok(records) => Ok(records),
        Err(e) if is_no_records(&e) => {
            log::debug!("No {record_type} records for {name}");
            Ok(Vec::new())
        }
        Err(e) if is_nxdomain(&e) => {
            log::debug!("{record_type} lookup for {name}: name does not exist");
            Err(e)
        }
        Err(e) => {
            log::warn!("Failed to lookup {record_type} records for {name}: {e}");
            Err(e)
        }
    }
}

/// [`RecordLookup`] backed by a `hickory-resolver` Tokio resolver.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    /// Wraps a shared resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl RecordLookup for HickoryLookup {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>, ResolveError> {
        let result = self.resolver.mx_lookup(domain).await.map(|lookup| {
            let mut hosts: Vec<MxHost> = lookup
                .iter()
                .map(|mx| MxHost::new(mx.preference(), mx.exchange().to_utf8()))
                .collect();
            hosts.sort_by_key(|host| host.preference);
            hosts
        });
        no_records_as_empty(result, domain, RecordType::MX)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        let result = self.resolver.txt_lookup(name).await.map(|lookup| {
            lookup
                .iter()
                .map(|txt| {
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes))
                        .collect::<String>()
                })
                .collect()
        });
        no_records_as_empty(result, name, RecordType::TXT)
    }
}
