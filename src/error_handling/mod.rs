//! Error types.
//!
//! Errors are split by where they surface:
//! - **Parse errors**: the request path does not hold an email address
//! - **Lookup errors**: a DNS query behind a checkup failed; the whole checkup is void
//! - **Initialization errors**: the logger or resolver could not be set up at startup

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError, ParseError};
