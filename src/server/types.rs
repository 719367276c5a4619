//! Server state and response bodies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::checkup::DomainCheckup;
use crate::config::{StatusPolicy, STATUS_SUCCESS};
use crate::dns::RecordLookup;
use crate::error_handling::LookupError;

/// Shared state for the server
#[derive(Clone)]
pub struct ServerState {
    /// DNS backend used for every checkup
    pub lookup: Arc<dyn RecordLookup>,
    /// Status code mapping for failed checkups
    pub status_policy: StatusPolicy,
}

impl ServerState {
    /// Creates the state shared by all handlers.
    pub fn new(lookup: Arc<dyn RecordLookup>, status_policy: StatusPolicy) -> Self {
        Self {
            lookup,
            status_policy,
        }
    }
}

/// Body of a successful checkup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckupResponse {
    /// Always `success`
    pub status: String,
    /// Misspelled on the wire; existing clients read this key
    #[serde(rename = "domian")]
    pub domain_checkup: DomainCheckup,
}

impl CheckupResponse {
    /// Wraps a checkup in the success envelope.
    pub fn success(domain_checkup: DomainCheckup) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            domain_checkup,
        }
    }
}

/// Body of a failed checkup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupErrorBody {
    /// `mx_lookup_failed` or `txt_lookup_failed`
    pub error: String,
    /// Error message including the resolver's cause
    pub message: String,
}

impl From<&LookupError> for LookupErrorBody {
    fn from(err: &LookupError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
