//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_posture` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use mail_posture::config::{Cli, Command};
use mail_posture::initialization::{init_logger_with, init_resolver};
use mail_posture::server::{check_email, start_server, ServerState};
use mail_posture::HickoryLookup;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    match cli.command {
        Command::Serve {
            bind,
            port,
            resolver,
            status_codes,
        } => {
            let resolver = init_resolver(resolver).context("Failed to initialize DNS resolver")?;
            let state = ServerState::new(Arc::new(HickoryLookup::new(resolver)), status_codes);
            log::info!("Starting server at port {port}");
            start_server(&bind, port, state).await
        }
        Command::Check { email, resolver } => {
            let resolver = init_resolver(resolver).context("Failed to initialize DNS resolver")?;
            let lookup = HickoryLookup::new(resolver);
            let outcome = check_email(&lookup, &email).await;
            let body = outcome
                .body()
                .and_then(|body| serde_json::to_string_pretty(&body))
                .context("Failed to serialize result")?;
            println!("{body}");
            if !outcome.is_success() {
                process::exit(1);
            }
            Ok(())
        }
    }
}
