//! Authentication Handlers
//!
//! Handles registration, login, and logout

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::AppError;
use crate::core::ServerState;
use crate::db::models::NewUser;
use crate::db::repository::UserRepository;
use crate::utils::AppResult;

// Re-use shared DTOs for API consistency
use shared::client::{AuthResponse, LoginRequest, RegisterRequest};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Register handler
///
/// Creates an account and immediately hands back a session token plus the
/// redacted user summary.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let email = trimmed(&req.email);
    let password = req.password.as_deref().unwrap_or("");

    let Some(email) = email else {
        return Err(AppError::validation("Email and password are required"));
    };
    if password.is_empty() {
        return Err(AppError::validation("Email and password are required"));
    }

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .create(NewUser {
            full_name: trimmed(&req.full_name),
            username: trimmed(&req.username),
            email,
            password: password.to_string(),
        })
        .await?;

    let token = state
        .get_jwt_service()
        .generate_token(&user.id, &user.email, user.username.as_deref())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user.id, email = %user.email, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.to_info(),
        }),
    ))
}

/// Login handler
///
/// Resolves the identifier against email or username and verifies the
/// password. Both failure modes return the same message so callers cannot
/// probe which accounts exist.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let identifier = trimmed(&req.identifier);
    let password = req.password.as_deref().unwrap_or("");

    let Some(identifier) = identifier else {
        return Err(AppError::validation("Identifier and password are required"));
    };
    if password.is_empty() {
        return Err(AppError::validation("Identifier and password are required"));
    }

    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_identifier(&identifier).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(identifier = %identifier, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(identifier = %identifier, "Login failed - unknown identifier");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(&user.id, &user.email, user.username.as_deref())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user.id, "User logged in successfully");

    Ok(Json(AuthResponse {
        token,
        user: user.to_info(),
    }))
}

/// Logout handler
///
/// Tokens are stateless and not tracked server-side, so this only
/// acknowledges; the client discards its token.
pub async fn logout() -> Json<Value> {
    Json(json!({ "message": "Logged out" }))
}
