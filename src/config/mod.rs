//! Application configuration and constants.
//!
//! This module provides:
//! - Record prefixes and wire constants used by the checker and the server
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, LogFormat, LogLevel, ResolverKind, StatusPolicy};
