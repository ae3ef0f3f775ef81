//! Authentication middleware
//!
//! Gates every `/api/` route behind a valid bearer token. On success the
//! decoded [`CurrentUser`] is injected into the request extensions for
//! handlers to pick up.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;

/// Routes under `/api/` that are reachable without a token.
///
/// Logout is deliberately public: tokens are stateless, so logging out is
/// a client-side discard and the server only acknowledges it.
const PUBLIC_API_ROUTES: &[&str] = &[
    "/api/auth/register",
    "/api/auth/login",
    "/api/auth/logout",
];

/// Authentication middleware - requires a signed, unexpired token
///
/// Skipped for CORS preflight, non-`/api/` paths (static photos, health),
/// and the public auth routes.
///
/// | Failure | Response |
/// |---------|----------|
/// | No Authorization header | 401 unauthorized |
/// | Malformed header | 401 invalid_token |
/// | Expired token | 401 token_expired |
/// | Bad signature / garbage | 401 invalid_token |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if PUBLIC_API_ROUTES.contains(&path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => {
            JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?
        }
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Request without credentials");
            return Err(AppError::Unauthorized);
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "Token rejected");
            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}
