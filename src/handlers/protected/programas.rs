// handlers/protected/programas.rs - GET /programas-preg-posg/by-ies/:id_ies

use axum::extract::{Path, State};

use crate::database::models::ProgramasPregPosg;
use crate::database::Repository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn by_ies(State(state): State<AppState>, Path(id_ies): Path<String>) -> ApiResult<Vec<ProgramasPregPosg>> {
    let filter = Repository::<ProgramasPregPosg>::filter().eq("id_ies", id_ies.trim());
    let rows = Repository::<ProgramasPregPosg>::from_manager(&state.databases)
        .select_any(filter)
        .await?;
    Ok(ApiResponse::success(rows))
}
