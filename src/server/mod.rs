//! HTTP front end for checkups.
//!
//! Provides one endpoint:
//! - `GET /email/:email` - checks the domain of `email` and returns the result as JSON
//!
//! Response bodies keep the historical wire format, including the `domian` key.

mod handlers;
mod outcome;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::email_handler;
pub use outcome::{check_email, EmailOutcome};
pub use types::{CheckupResponse, LookupErrorBody, ServerState};

/// Builds the router with all routes attached.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/email/:email", get(email_handler))
        .with_state(state)
}

/// Binds `bind:port` and serves until the process exits.
pub async fn start_server(bind: &str, port: u16, state: ServerState) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind((bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", bind, port, e))?;

    log::info!("Server listening on http://{}:{}/", bind, port);
    log::info!("  - Checkup: http://{}:{}/email/{{email}}", bind, port);

    serve(listener, state).await
}

/// Serves on an already bound listener.
pub async fn serve(listener: tokio::net::TcpListener, state: ServerState) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
