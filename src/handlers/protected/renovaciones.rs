// handlers/protected/renovaciones.rs - Late renewals and renewal enablement

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::database::models::RenovacionesExtemporaneas;
use crate::database::{Database, DatabaseError, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::crud::list_filter;

/// GET /renovaciones-extemporaneas - like the generic list, but `periodo`
/// must look like `202402` when present.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<RenovacionesExtemporaneas>> {
    if let Some(periodo) = params.get("periodo") {
        validate_periodo(periodo)?;
    }

    let filter = list_filter::<RenovacionesExtemporaneas>(&state, &params)?;
    let rows = Repository::<RenovacionesExtemporaneas>::from_manager(&state.databases)
        .select_any(filter)
        .await?;
    Ok(ApiResponse::success(rows))
}

#[derive(Debug, Deserialize)]
pub struct HabilitarRequest {
    pub documento: i64,
}

#[derive(Debug, Serialize)]
pub struct HabilitarResponse {
    pub status: &'static str,
    pub documento: i64,
}

/// POST /renovaciones-extemporaneas/habilitar - enable a beneficiary for
/// renewal with every fund flag cleared.
pub async fn habilitar(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<HabilitarRequest>, JsonRejection>,
) -> ApiResult<HabilitarResponse> {
    let Json(request) = body?;

    sqlx::query(
        "INSERT INTO fondos_habilitados_renovar (
            documento, efe, fa, ren_mb, leg_mb, pp, epm, dpt,
            ren_mb_ext, pp_ext, epm_ext, efe_ext, fa_ext, dpt_ext,
            pre_mb, add_periodo, ctm, ss
        ) VALUES (?, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0)",
    )
    .bind(request.documento)
    .execute(state.databases.pool(Database::Convocatoria))
    .await
    .map_err(|e| match DatabaseError::from(e) {
        DatabaseError::Duplicate(_) => ApiError::duplicate("Document already enabled for renewal"),
        other => ApiError::from(other),
    })?;

    tracing::info!("{} enabled {} for renewal", user.username, request.documento);
    Ok(ApiResponse::created(HabilitarResponse {
        status: "ok",
        documento: request.documento,
    }))
}

fn validate_periodo(periodo: &str) -> Result<(), ApiError> {
    if periodo.trim().chars().count() != 6 {
        return Err(ApiError::field_error("periodo", "Must be exactly 6 characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodo_has_six_characters() {
        assert!(validate_periodo("202402").is_ok());
        assert!(validate_periodo("2024-2").is_ok());
        assert!(validate_periodo("20242").is_err());
        assert!(validate_periodo("").is_err());
    }
}
