// handlers/public/login.rs - POST /login and POST /auth/login

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::password::{verify_against_dummy, verify_password};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub username: String,
    pub full_name: Option<String>,
}

/// Exchange a username and password for a bearer token.
///
/// Unknown users and wrong passwords get the same 401 and cost the same
/// PBKDF2 work. An existing but disabled account gets 403.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let Json(request) = body?;
    if request.username.trim().is_empty() {
        return Err(ApiError::field_error("username", "Must not be empty"));
    }
    if request.password.is_empty() {
        return Err(ApiError::field_error("password", "Must not be empty"));
    }

    let credential = match state.credentials.find_by_username(&request.username).await? {
        Some(credential) => credential,
        None => {
            verify_against_dummy(&request.password);
            tracing::warn!("Failed login for unknown user {}", request.username);
            return Err(invalid_credentials());
        }
    };

    if !verify_password(&credential.salt, &credential.password_hash, &request.password) {
        tracing::warn!("Failed login for {}", request.username);
        return Err(invalid_credentials());
    }

    if !credential.is_active() {
        tracing::warn!("Login attempt for disabled account {}", request.username);
        return Err(ApiError::forbidden("Account disabled"));
    }

    let access_token = state
        .tokens
        .issue(&credential.username, credential.full_name.as_deref())?;
    tracing::info!("User {} logged in", credential.username);

    Ok(ApiResponse::success(LoginResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.tokens.ttl_seconds(),
        user: LoginUser {
            username: credential.username,
            full_name: credential.full_name,
        },
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid credentials")
}
