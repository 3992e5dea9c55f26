// handlers/protected/usuarios.rs - Account administration
//
// Reads are open to any authenticated user; writes sit behind the admin
// gate. Hashes and salts never leave the server.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde_json::{Map, Value};

use crate::auth::PasswordHash;
use crate::database::models::{Usuario, UsuarioCreate, UsuarioUpdate};
use crate::database::{Entity, Repository};
use crate::error::ApiError;
use crate::filter::Filter;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::auth::MIN_PASSWORD_LEN;
use super::crud::parse_key;

/// Minimum username length.
pub const MIN_USERNAME_LEN: usize = 3;

/// GET /usuarios/by-username/:username
pub async fn by_username(State(state): State<AppState>, Path(username): Path<String>) -> ApiResult<Usuario> {
    let filter = Filter::new(Usuario::TABLE).eq("username", username.trim());
    Repository::<Usuario>::from_manager(&state.databases)
        .select_any(filter)
        .await?
        .into_iter()
        .next()
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found("User not found"))
}

/// POST /usuarios - create an account from a clear-text password
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<UsuarioCreate>, JsonRejection>,
) -> ApiResult<Usuario> {
    let Json(request) = body?;
    let values = create_values(request)?;
    let repo = Repository::<Usuario>::from_manager(&state.databases);

    let username = values.get("username").cloned().unwrap_or_default();
    let taken = Filter::new(Usuario::TABLE).eq("username", username);
    if repo.count(&taken).await? > 0 {
        return Err(ApiError::duplicate("User already exists"));
    }

    let created = repo.insert(&values).await?;
    tracing::info!("{} created user {}", user.username, created.username);
    Ok(ApiResponse::created(created))
}

/// PUT|PATCH /usuarios/:id - change the display name, active flag or password
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw): Path<String>,
    body: Result<Json<UsuarioUpdate>, JsonRejection>,
) -> ApiResult<Usuario> {
    let key = parse_key::<Usuario>(&raw)?;
    let Json(request) = body?;
    let changes = update_changes(request)?;

    let repo = Repository::<Usuario>::from_manager(&state.databases);
    repo.select_404(&key).await?;
    let updated = repo.update(&key, &changes).await?;

    tracing::info!("{} updated user {}", user.username, updated.username);
    Ok(ApiResponse::success(updated))
}

fn create_values(request: UsuarioCreate) -> Result<Map<String, Value>, ApiError> {
    let username = request.username.trim().to_string();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ApiError::field_error(
            "username",
            format!("Must be at least {} characters", MIN_USERNAME_LEN),
        ));
    }
    validate_password(&request.password)?;

    let hash = PasswordHash::new(&request.password);
    let mut values = Map::new();
    values.insert("username".into(), Value::String(username));
    values.insert("password_hash".into(), Value::String(hash.hash));
    values.insert("sal".into(), Value::String(hash.salt));
    if let Some(nombre) = request.nombre_completo {
        values.insert("nombre_completo".into(), Value::String(nombre));
    }
    values.insert("activo".into(), Value::from(request.activo.unwrap_or(1)));
    Ok(values)
}

fn update_changes(request: UsuarioUpdate) -> Result<Vec<(String, Value)>, ApiError> {
    let mut changes = Vec::new();
    if let Some(password) = request.password {
        validate_password(&password)?;
        let hash = PasswordHash::new(&password);
        changes.push(("password_hash".to_string(), Value::String(hash.hash)));
        changes.push(("sal".to_string(), Value::String(hash.salt)));
    }
    if let Some(nombre) = request.nombre_completo {
        changes.push(("nombre_completo".to_string(), Value::String(nombre)));
    }
    if let Some(activo) = request.activo {
        changes.push(("activo".to_string(), Value::from(activo)));
    }
    Ok(changes)
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::field_error(
            "password",
            format!("Must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}
