// handlers/protected/crud.rs - Generic CRUD handlers shared by every table
//
// Routes instantiate these per entity, e.g. `get(crud::list::<Reintegros>)`.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Extension, Json,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::database::{Entity, KeyKind, Repository};
use crate::error::ApiError;
use crate::filter::{parse_conditions, parse_page, Filter};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{prepare_create, prepare_update};
use crate::state::AppState;

/// GET /<resource> - paginated, filtered list
pub async fn list<T: Entity>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<T>> {
    let filter = list_filter::<T>(&state, &params)?;
    let rows = Repository::<T>::from_manager(&state.databases).select_any(filter).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /<resource>/:key
pub async fn get<T: Entity>(State(state): State<AppState>, Path(raw): Path<String>) -> ApiResult<T> {
    let key = parse_key::<T>(&raw)?;
    let row = Repository::<T>::from_manager(&state.databases).select_404(&key).await?;
    Ok(ApiResponse::success(row))
}

/// POST /<resource> - 201 with the stored row
pub async fn create<T: Entity>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<T> {
    let Json(body) = body?;
    let mut values = prepare_create::<T>(body, user.display_name())?;
    let repo = Repository::<T>::from_manager(&state.databases);

    if T::KEY_KIND == KeyKind::Text {
        let key = normalize_text_key::<T>(&mut values)?;
        if repo.exists(&key).await? {
            return Err(ApiError::duplicate(format!("{} already exists", T::LABEL)));
        }
    }

    let row = repo.insert(&values).await?;
    tracing::info!("{} created a row in {}", user.username, T::TABLE);
    Ok(ApiResponse::created(row))
}

/// PUT|PATCH /<resource>/:key - partial update
pub async fn update<T: Entity>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<T> {
    let key = parse_key::<T>(&raw)?;
    let Json(body) = body?;
    let repo = Repository::<T>::from_manager(&state.databases);

    let current = repo.select_404(&key).await?;
    let changes = prepare_update(&current, body, user.display_name())?;
    let row = repo.update(&key, &changes).await?;

    tracing::info!("{} updated {} {} = {}", user.username, T::TABLE, T::KEY, key);
    Ok(ApiResponse::success(row))
}

/// DELETE /<resource>/:key - 204
pub async fn delete<T: Entity>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw): Path<String>,
) -> ApiResult<()> {
    let key = parse_key::<T>(&raw)?;
    Repository::<T>::from_manager(&state.databases).delete(&key).await?;
    tracing::info!("{} deleted {} {} = {}", user.username, T::TABLE, T::KEY, key);
    Ok(ApiResponse::no_content())
}

/// Entity filter built from `offset`/`limit` and the entity's filter names.
pub fn list_filter<T: Entity>(state: &AppState, params: &HashMap<String, String>) -> Result<Filter, ApiError> {
    let page = parse_page(params, state.config.api.max_page_limit)?;
    let conditions = parse_conditions(params, &T::FILTERS)?;
    Ok(Repository::<T>::filter().conditions(conditions).page(page))
}

pub fn parse_key<T: Entity>(raw: &str) -> Result<Value, ApiError> {
    T::parse_key(raw).ok_or_else(|| ApiError::field_error(T::KEY, "Invalid key"))
}

/// Store a text key in the same trimmed form `GET /:key` looks it up by.
fn normalize_text_key<T: Entity>(values: &mut Map<String, Value>) -> Result<Value, ApiError> {
    let key = values
        .get(T::KEY)
        .and_then(Value::as_str)
        .and_then(T::parse_key)
        .ok_or_else(|| ApiError::field_error(T::KEY, "Must not be empty"))?;
    values.insert(T::KEY.to_string(), key.clone());
    Ok(key)
}
