// handlers/protected/auth.rs - Session endpoints for authenticated users

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{verify_password, PasswordHash};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// Minimum length for new passwords.
pub const MIN_PASSWORD_LEN: usize = 8;

/// GET /auth/whoami - the identity carried by the token
pub async fn whoami(State(state): State<AppState>, Extension(user): Extension<AuthUser>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "username": user.username,
        "full_name": user.full_name,
        "is_admin": state.is_admin(&user.username),
    })))
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// POST /auth/change-password - rehash with a fresh salt
pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(request) = body?;
    if request.current_password.is_empty() {
        return Err(ApiError::field_error("current_password", "Must not be empty"));
    }
    if request.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::field_error(
            "new_password",
            format!("Must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    let credential = state
        .credentials
        .find_by_username(&user.username)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !verify_password(&credential.salt, &credential.password_hash, &request.current_password) {
        tracing::warn!("Wrong current password in password change for {}", user.username);
        return Err(ApiError::bad_request("Current password is incorrect"));
    }

    let hash = PasswordHash::new(&request.new_password);
    if !state.credentials.update_password(&user.username, &hash).await? {
        return Err(ApiError::not_found("User not found"));
    }

    tracing::info!("User {} changed their password", user.username);
    Ok(ApiResponse::success(json!({ "status": "ok" })))
}
