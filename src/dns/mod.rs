//! DNS record querying.
//!
//! This module provides the lookups a posture checkup needs:
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records) with SPF/DMARC extraction
//!
//! Queries go through the [`RecordLookup`] trait so the checker can run against
//! `hickory-resolver` in production and against canned answers in tests.

mod extract;
mod records;

// Re-export public API
pub use extract::{dmarc_name, extract_dmarc_record, extract_spf_record, find_record};
pub use records::{is_no_records, is_nxdomain, HickoryLookup, MxHost, RecordLookup};

#[cfg(test)]
pub(crate) mod test_helpers;
