//! Logger initialization.

use std::io::{self, Write};

use colored::Colorize;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Installs the global `env_logger` logger.
///
/// `RUST_LOG` directives are read first and `level` is applied on top, so
/// `--log-level` always wins for this crate. hyper is capped at info and
/// hickory's protocol layer at error.
///
/// ```bash
/// RUST_LOG=hickory_resolver=debug mail_posture serve
/// mail_posture --log-format json serve --port 8000
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("hyper", LevelFilter::Info)
        .filter_module("hickory_proto", LevelFilter::Error)
        .filter_module("mail_posture", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

/// One JSON object per line: `ts` (epoch millis), `level`, `target`, `msg`.
fn write_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let msg = serde_json::to_string(&record.args().to_string()).map_err(io::Error::other)?;
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        msg
    )
}

fn write_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target().cyan(),
        level_label(record.level()),
        record.args()
    )
}

fn level_label(level: Level) -> colored::ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
