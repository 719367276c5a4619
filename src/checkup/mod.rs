//! Domain posture checkup.
//!
//! A checkup queries three names for one domain and reports what it found:
//! - MX records on the domain
//! - TXT records on the domain, searched for an SPF policy
//! - TXT records on `_dmarc.<domain>`, searched for a DMARC policy
//!
//! The queries are independent and run concurrently. The result is
//! all-or-nothing: if any query fails, no checkup is produced.

use serde::{Deserialize, Serialize};

use crate::dns::{
    dmarc_name, extract_dmarc_record, extract_spf_record, is_nxdomain, MxHost, RecordLookup,
};
use crate::error_handling::LookupError;

/// Mail authentication posture of a domain.
///
/// `spf_record` and `dmarc_record` are empty when the matching `has_*` flag is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheckup {
    /// At least one MX record resolved
    #[serde(rename = "hasMX")]
    pub has_mx: bool,
    /// A TXT record on the domain starts with `v=spf1`
    #[serde(rename = "hasSPF")]
    pub has_spf: bool,
    /// A TXT record on `_dmarc.<domain>` starts with `v=DMARC1`
    #[serde(rename = "hasDMARC")]
    pub has_dmarc: bool,
    /// Full text of the first SPF record
    #[serde(rename = "spfRecord")]
    pub spf_record: String,
    /// Full text of the first DMARC record
    #[serde(rename = "dmarcRecord")]
    pub dmarc_record: String,
}

impl DomainCheckup {
    /// Builds a checkup from the three answer sets.
    pub fn from_records(mx: &[MxHost], domain_txt: &[String], dmarc_txt: &[String]) -> Self {
        let spf = extract_spf_record(domain_txt);
        let dmarc = extract_dmarc_record(dmarc_txt);
        Self {
            has_mx: !mx.is_empty(),
            has_spf: spf.is_some(),
            has_dmarc: dmarc.is_some(),
            spf_record: spf.unwrap_or_default().to_string(),
            dmarc_record: dmarc.unwrap_or_default().to_string(),
        }
    }
}

/// Runs a posture checkup for `domain`.
///
/// All three queries are issued even when one of them fails. When several fail,
/// the error reported is the MX failure, then the SPF one, then the DMARC one,
/// which is what a sequential fail-fast run would have returned.
///
/// A nonexistent domain (NXDOMAIN) fails the checkup. A nonexistent
/// `_dmarc.<domain>` only means there is no DMARC policy.
///
/// # Errors
///
/// - `LookupError::MxLookupFailed` if the MX query fails, including NXDOMAIN
/// - `LookupError::TxtLookupFailed` if the SPF query fails, or the DMARC query
///   fails for any reason other than NXDOMAIN
pub async fn check_domain<L>(lookup: &L, domain: &str) -> Result<DomainCheckup, LookupError>
where
    L: RecordLookup + ?Sized,
{
    let dmarc_domain = dmarc_name(domain);
    log::debug!("Checking MX, SPF and DMARC for {domain}");

    let (mx_result, spf_result, dmarc_result) = tokio::join!(
        lookup.lookup_mx(domain),
        lookup.lookup_txt(domain),
        lookup.lookup_txt(&dmarc_domain)
    );

    let mx = mx_result.map_err(|source| LookupError::MxLookupFailed {
        name: domain.to_string(),
        source,
    })?;
    let domain_txt = spf_result.map_err(|source| LookupError::TxtLookupFailed {
        name: domain.to_string(),
        source,
    })?;
    // A domain without a DMARC policy usually has no `_dmarc` name at all
    let dmarc_txt = match dmarc_result {
        Err(e) if is_nxdomain(&e) => {
            log::debug!("{dmarc_domain} does not exist, no DMARC policy");
            Vec::new()
        }
        result => result.map_err(|source| LookupError::TxtLookupFailed {
            name: dmarc_domain,
            source,
        })?,
    };

    let checkup = DomainCheckup::from_records(&mx, &domain_txt, &dmarc_txt);
    log::debug!(
        "Checkup for {domain}: mx={} ({} hosts), spf={}, dmarc={}",
        checkup.has_mx,
        mx.len(),
        checkup.has_spf,
        checkup.has_dmarc
    );
    Ok(checkup)
}
