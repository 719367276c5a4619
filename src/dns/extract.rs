//! DNS record extraction utilities.
//!
//! This module provides functions to pick SPF and DMARC policies out of
//! TXT record collections.

use crate::config::{DMARC_LABEL, DMARC_PREFIX, SPF_PREFIX};

/// Returns the first record that starts with `prefix`.
///
/// Matching is case-sensitive and the record is not trimmed, so a record with
/// leading whitespace never matches. Records are scanned in the given order.
pub fn find_record<'a>(records: &'a [String], prefix: &str) -> Option<&'a str> {
    records
        .iter()
        .map(String::as_str)
        .find(|record| record.starts_with(prefix))
}

/// Extracts the SPF record (`v=spf1 ...`) from a domain's TXT records.
pub fn extract_spf_record(txt_records: &[String]) -> Option<&str> {
    find_record(txt_records, SPF_PREFIX)
}

/// Extracts the DMARC record (`v=DMARC1...`) from `_dmarc.<domain>` TXT records.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<&str> {
    find_record(txt_records, DMARC_PREFIX)
}

/// Name holding a domain's DMARC policy.
pub fn dmarc_name(domain: &str) -> String {
    format!("{DMARC_LABEL}{domain}")
}
