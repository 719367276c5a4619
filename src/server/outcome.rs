//! Parse-then-check flow shared by the HTTP handler and the `check` command.

use axum::http::StatusCode;
use serde_json::Value;

use super::types::{CheckupResponse, LookupErrorBody};
use crate::address::parse_domain;
use crate::checkup::{check_domain, DomainCheckup};
use crate::config::{StatusPolicy, INVALID_EMAIL_BODY};
use crate::dns::RecordLookup;
use crate::error_handling::LookupError;

/// Result of checking one email address.
#[derive(Debug)]
pub enum EmailOutcome {
    /// The domain was checked
    Checked(DomainCheckup),
    /// The input has no `@`
    InvalidEmail,
    /// A DNS query failed
    LookupFailed(LookupError),
}

impl EmailOutcome {
    /// JSON body for this outcome.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body cannot be serialized.
    pub fn body(&self) -> Result<Value, serde_json::Error> {
        match self {
            EmailOutcome::Checked(checkup) => {
                serde_json::to_value(CheckupResponse::success(checkup.clone()))
            }
            EmailOutcome::InvalidEmail => Ok(Value::String(INVALID_EMAIL_BODY.to_string())),
            EmailOutcome::LookupFailed(err) => serde_json::to_value(LookupErrorBody::from(err)),
        }
    }

    /// HTTP status for this outcome under `policy`.
    pub fn status(&self, policy: StatusPolicy) -> StatusCode {
        match (policy, self) {
            (StatusPolicy::Legacy, _) | (_, EmailOutcome::Checked(_)) => StatusCode::OK,
            (StatusPolicy::Strict, EmailOutcome::InvalidEmail) => StatusCode::BAD_REQUEST,
            (StatusPolicy::Strict, EmailOutcome::LookupFailed(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    /// True if the domain was checked.
    pub fn is_success(&self) -> bool {
        matches!(self, EmailOutcome::Checked(_))
    }
}

/// Extracts the domain from `email` and runs a checkup on it.
///
/// Lookup failures are logged here with their cause.
pub async fn check_email<L>(lookup: &L, email: &str) -> EmailOutcome
where
    L: RecordLookup + ?Sized,
{
    let domain = match parse_domain(email) {
        Ok(domain) => domain,
        Err(e) => {
            log::debug!("Rejecting {email:?}: {e}");
            return EmailOutcome::InvalidEmail;
        }
    };

    match check_domain(lookup, domain).await {
        Ok(checkup) => EmailOutcome::Checked(checkup),
        Err(e) => {
            log::warn!("Checkup for {domain} failed: {e}");
            EmailOutcome::LookupFailed(e)
        }
    }
}
