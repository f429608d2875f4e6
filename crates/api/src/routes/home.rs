//! Service root and health endpoints.

use axum::Json;
use serde::Serialize;

/// Welcome payload returned from `/`.
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

/// Static welcome message.
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the E-Commerce API",
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. State is in-memory, so there are
/// no dependencies to probe.
pub async fn health() -> &'static str {
    "ok"
}
