// handlers/elevated/register.rs - POST /auth/register

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::PasswordHash;
use crate::error::ApiError;
use crate::handlers::protected::auth::MIN_PASSWORD_LEN;
use crate::handlers::protected::usuarios::MIN_USERNAME_LEN;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub full_name: String,
    pub password: String,
}

/// Create an active account. 400 when the username is taken.
pub async fn register(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(request) = body?;
    validate(&request)?;

    let username = request.username.trim();
    let hash = PasswordHash::new(&request.password);
    state
        .credentials
        .create(username, request.full_name.trim(), &hash)
        .await?;

    tracing::info!("{} registered user {}", admin.username, username);
    Ok(ApiResponse::created(json!({ "status": "ok" })))
}

fn validate(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(ApiError::field_error(
            "username",
            format!("Must be at least {} characters", MIN_USERNAME_LEN),
        ));
    }
    if request.full_name.trim().is_empty() {
        return Err(ApiError::field_error("full_name", "Must not be empty"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::field_error(
            "password",
            format!("Must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}
