//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness endpoints (public)
//! - [`auth`] - register / login / logout (public)
//! - [`employees`] - directory listing, meta options, record creation
//!
//! Uploaded photos are served statically under `/uploads/`.

pub mod auth;
pub mod employees;
pub mod health;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::{Config, ServerState};

/// Request bodies above this size are rejected before the handlers run.
/// Comfortably above the 3 MiB photo cap so oversized photos still reach
/// the photo store's own check and its 413 message.
const REQUEST_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// HTTP access log middleware
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

fn cors_layer(config: &Config) -> CorsLayer {
    match &config.client_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_credentials(true),
            Err(_) => {
                tracing::warn!(origin = %origin, "Invalid CLIENT_ORIGIN, falling back to permissive CORS");
                CorsLayer::permissive()
            }
        },
        None => CorsLayer::permissive(),
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(employees::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // Stored photos, served back at the path recorded on the employee
        .nest_service("/uploads", ServeDir::new(state.config.upload_dir_path()))
        // JWT authentication - applied router-wide, skips public routes internally
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
        .with_state(state.clone())
        // ========== Tower HTTP Middleware ==========
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}
