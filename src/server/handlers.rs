//! Checkup request handler.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::outcome::check_email;
use super::types::ServerState;

/// `GET /email/:email`
pub async fn email_handler(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> Response {
    log::info!("Checkup requested for {email}");

    let outcome = check_email(state.lookup.as_ref(), &email).await;
    let status = outcome.status(state.status_policy);

    let json = match outcome.body().and_then(|body| serde_json::to_string(&body)) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize response: {}", e),
            )
                .into_response();
        }
    };

    (status, [(header::CONTENT_TYPE, "application/json")], json).into_response()
}
