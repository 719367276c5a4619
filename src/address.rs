//! Email address parsing.
//!
//! Splits an address into local part and domain. Only the separator is checked;
//! the domain is handed to the checker as-is.

use crate::error_handling::ParseError;

/// Extracts the domain from an email address.
///
/// The domain is the text between the first `@` and the next one (or the end of
/// the input). Segments after a second `@` are ignored, so `"a@b@c"` yields `"b"`.
/// An address ending in `@` yields an empty domain.
///
/// # Errors
///
/// Returns `ParseError::InvalidEmail` if the input contains no `@`.
pub fn parse_domain(email: &str) -> Result<&str, ParseError> {
    let mut parts = email.split('@');
    parts.next();
    parts.next().ok_or(ParseError::InvalidEmail)
}
