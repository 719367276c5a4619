//! Configuration constants.
//!
//! Record prefixes, wire strings and server defaults used throughout the crate.

/// Port the HTTP server listens on unless `--port` is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Address the HTTP server binds to unless `--bind` is given.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Prefix identifying an SPF policy among a domain's TXT records.
///
/// Matched case-sensitively against the start of the record text.
pub const SPF_PREFIX: &str = "v=spf1";

/// Prefix identifying a DMARC policy among `_dmarc.<domain>` TXT records.
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label prepended to a domain to form its DMARC policy name.
pub const DMARC_LABEL: &str = "_dmarc.";

/// Body returned (as a JSON string) when the path does not hold an email address.
pub const INVALID_EMAIL_BODY: &str = "error invalid email";

/// Value of the `status` field in a successful checkup response.
pub const STATUS_SUCCESS: &str = "success";
