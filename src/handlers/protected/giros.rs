// handlers/protected/giros.rs - Historical disbursement report (read-only)

use axum::extract::{Path, Query, State};
use serde::Serialize;
use std::collections::HashMap;

use crate::database::models::VwGirosGeneralHistoricoIes;
use crate::database::{Entity, Repository};
use crate::error::ApiError;
use crate::filter::Filter;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{group_giros, GirosGroup};
use crate::state::AppState;

use super::crud::list_filter;

type Giros = VwGirosGeneralHistoricoIes;

/// GET /vw-giros-general-historico-ies/documento/:documento - first match
pub async fn by_documento(State(state): State<AppState>, Path(documento): Path<String>) -> ApiResult<Giros> {
    let filter = Filter::new(Giros::TABLE).eq("documento", documento.trim());
    Repository::<Giros>::from_manager(&state.databases)
        .select_any(filter)
        .await?
        .into_iter()
        .next()
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found("Disbursement record not found"))
}

#[derive(Debug, Serialize)]
pub struct ResumenResponse {
    pub total_estados: usize,
    pub estados_disponibles: Vec<String>,
    pub total_registros: i64,
}

/// GET /vw-giros-general-historico-ies/estadisticas/resumen
pub async fn resumen(State(state): State<AppState>) -> ApiResult<ResumenResponse> {
    let repo = Repository::<Giros>::from_manager(&state.databases);
    let filter = Filter::new(Giros::TABLE);
    let estados = repo.distinct(&filter, "estado").await?;
    let total_registros = repo.count(&filter).await?;

    Ok(ApiResponse::success(ResumenResponse {
        total_estados: estados.len(),
        estados_disponibles: estados,
        total_registros,
    }))
}

/// GET /vw-giros-general-historico-ies/agrupado - the list route's rows,
/// grouped per beneficiary, call and fund
pub async fn agrupado(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<GirosGroup>> {
    let filter = list_filter::<Giros>(&state, &params)?;
    let rows = Repository::<Giros>::from_manager(&state.databases).select_any(filter).await?;
    Ok(ApiResponse::success(group_giros(rows)))
}
