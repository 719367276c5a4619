//! Error type definitions.

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use thiserror::Error;

/// Error returned when an email address cannot be split into local part and domain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The address contains no `@` separator.
    #[error("invalid email address: missing '@' separator")]
    InvalidEmail,
}

/// Error returned when one of the DNS queries behind a checkup fails.
///
/// The SPF and DMARC queries share `TxtLookupFailed`; `name` tells them apart
/// in logs but the kind reported to clients is the same.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The MX query for the domain failed.
    #[error("MX lookup failed for {name}: {source}")]
    MxLookupFailed {
        /// Name that was queried
        name: String,
        /// Resolver error
        #[source]
        source: ResolveError,
    },

    /// A TXT query (SPF on the domain, or DMARC on `_dmarc.<domain>`) failed.
    #[error("TXT lookup failed for {name}: {source}")]
    TxtLookupFailed {
        /// Name that was queried
        name: String,
        /// Resolver error
        #[source]
        source: ResolveError,
    },
}

impl LookupError {
    /// Stable identifier of the error kind, used in response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::MxLookupFailed { .. } => "mx_lookup_failed",
            LookupError::TxtLookupFailed { .. } => "txt_lookup_failed",
        }
    }

    /// The DNS name whose query failed.
    pub fn name(&self) -> &str {
        match self {
            LookupError::MxLookupFailed { name, .. } | LookupError::TxtLookupFailed { name, .. } => {
                name
            }
        }
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}
