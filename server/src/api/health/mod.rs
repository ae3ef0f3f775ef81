//! Health Routes

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

/// Build health router; `/` doubles as the root liveness probe
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(status))
        .route("/health", get(status))
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
