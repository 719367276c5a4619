//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{DEFAULT_BIND_ADDR, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which nameservers the DNS resolver queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResolverKind {
    /// Nameservers from the host's `/etc/resolv.conf`
    System,
    /// Google public DNS (8.8.8.8, 8.8.4.4)
    Google,
    /// Cloudflare public DNS (1.1.1.1, 1.0.0.1)
    Cloudflare,
}

/// How checkup outcomes map onto HTTP status codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusPolicy {
    /// Always answer 200; errors are distinguished by body only
    #[default]
    Legacy,
    /// 400 for a malformed address, 502 for a failed DNS lookup
    Strict,
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "mail_posture", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve `GET /email/:email` over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_BIND_ADDR)]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Nameservers to query
        #[arg(long, value_enum, default_value_t = ResolverKind::System)]
        resolver: ResolverKind,

        /// HTTP status code policy for failed checkups
        #[arg(long, value_enum, default_value_t = StatusPolicy::Legacy)]
        status_codes: StatusPolicy,
    },
    /// Check a single address and print the JSON result
    Check {
        /// Email address whose domain is checked
        email: String,

        /// Nameservers to query
        #[arg(long, value_enum, default_value_t = ResolverKind::System)]
        resolver: ResolverKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["mail_posture", "serve"]).unwrap();
        match cli.command {
            Command::Serve {
                bind,
                port,
                resolver,
                status_codes,
            } => {
                assert_eq!(bind, "0.0.0.0");
                assert_eq!(port, 8000);
                assert_eq!(resolver, ResolverKind::System);
                assert_eq!(status_codes, StatusPolicy::Legacy);
            }
            other => panic!("expected serve, got {:?}", other),
        }
        assert!(matches!(cli.log_level, LogLevel::Info));
        assert!(matches!(cli.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "mail_posture",
            "serve",
            "--port",
            "9090",
            "--resolver",
            "cloudflare",
            "--status-codes",
            "strict",
            "--log-format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Command::Serve {
                port,
                resolver,
                status_codes,
                ..
            } => {
                assert_eq!(port, 9090);
                assert_eq!(resolver, ResolverKind::Cloudflare);
                assert_eq!(status_codes, StatusPolicy::Strict);
            }
            other => panic!("expected serve, got {:?}", other),
        }
        assert!(matches!(cli.log_format, LogFormat::Json));
    }

    #[test]
    fn test_check_requires_email() {
        assert!(Cli::try_parse_from(["mail_posture", "check"]).is_err());

        let cli = Cli::try_parse_from(["mail_posture", "check", "user@example.com"]).unwrap();
        match cli.command {
            Command::Check { email, resolver } => {
                assert_eq!(email, "user@example.com");
                assert_eq!(resolver, ResolverKind::System);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["mail_posture", "serve", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_status_policy_default_is_legacy() {
        assert_eq!(StatusPolicy::default(), StatusPolicy::Legacy);
    }
}
