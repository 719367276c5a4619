//! DNS resolver initialization.

use std::sync::Arc;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::ResolverKind;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for checkups.
///
/// `System` reads the host's nameservers and options; the public providers use
/// hickory's default options. Timeouts and attempts are left at the configured
/// defaults. Two options are always overridden:
/// - `ndots = 0`, so names are queried as given and never search-domain expanded
/// - `cache_size = 0`, so every checkup sees fresh answers
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the system configuration
/// cannot be read.
pub fn init_resolver(kind: ResolverKind) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let (config, mut opts) = match kind {
        ResolverKind::System => hickory_resolver::system_conf::read_system_conf().map_err(|e| {
            InitializationError::DnsResolverError(format!(
                "failed to read system DNS configuration: {e}"
            ))
        })?,
        ResolverKind::Google => (ResolverConfig::google(), ResolverOpts::default()),
        ResolverKind::Cloudflare => (ResolverConfig::cloudflare(), ResolverOpts::default()),
    };
    opts.ndots = 0;
    opts.cache_size = 0;

    log::info!(
        "DNS resolver initialized ({:?}) - {} nameserver(s), timeout: {:?}, attempts: {}",
        kind,
        config.name_servers().len(),
        opts.timeout,
        opts.attempts
    );

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
