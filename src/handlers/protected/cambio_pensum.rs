// handlers/protected/cambio_pensum.rs - GET /informacion-cambio-pensum/:key/exists

use axum::extract::{Path, State};
use serde::Serialize;

use crate::database::models::InformacionCambioPensum;
use crate::database::Repository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::crud::parse_key;

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
    pub docconvfondo: String,
}

pub async fn exists(State(state): State<AppState>, Path(raw): Path<String>) -> ApiResult<ExistsResponse> {
    let key = parse_key::<InformacionCambioPensum>(&raw)?;
    let exists = Repository::<InformacionCambioPensum>::from_manager(&state.databases)
        .exists(&key)
        .await?;
    Ok(ApiResponse::success(ExistsResponse {
        exists,
        docconvfondo: raw.trim().to_string(),
    }))
}
