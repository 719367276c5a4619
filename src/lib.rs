//! mail_posture library: email domain posture checks
//!
//! Given an email address, this library extracts the domain and reports whether it
//! publishes MX, SPF and DMARC records, together with the raw SPF and DMARC
//! policy text. An HTTP front end serves the same result as JSON.
//!
//! # Example
//!
//! ```no_run
//! use mail_posture::{check_domain, parse_domain, HickoryLookup};
//! use mail_posture::config::ResolverKind;
//! use mail_posture::initialization::init_resolver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lookup = HickoryLookup::new(init_resolver(ResolverKind::System)?);
//! let domain = parse_domain("postmaster@example.com")?;
//! let checkup = check_domain(&lookup, domain).await?;
//! println!("MX: {}, SPF: {:?}", checkup.has_mx, checkup.spf_record);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and require a Tokio runtime.

#![warn(missing_docs)]

mod address;
mod checkup;
pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
pub mod server;

// Re-export public API
pub use address::parse_domain;
pub use checkup::{check_domain, DomainCheckup};
pub use dns::{
    dmarc_name, extract_dmarc_record, extract_spf_record, find_record, is_no_records, is_nxdomain,
    HickoryLookup, MxHost, RecordLookup,
};
pub use error_handling::{InitializationError, LookupError, ParseError};
