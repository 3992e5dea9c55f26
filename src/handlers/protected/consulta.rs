// handlers/protected/consulta.rs - GET /consulta?documento=

use axum::extract::{Query, State};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::database::dynamic::DynamicRepository;
use crate::database::Database;
use crate::error::ApiError;
use crate::filter::Filter;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const ENROLMENT_VIEW: &str = "vw_matricula_cero_2025_2";

#[derive(Debug, Serialize)]
pub struct ConsultaResponse {
    pub count: usize,
    pub results: Vec<Map<String, Value>>,
}

/// Every enrolment row for one document number, whatever columns the view has.
pub async fn consulta(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<ConsultaResponse> {
    let documento = validate_documento(params.get("documento").map(String::as_str))?;

    let sql = Filter::new(ENROLMENT_VIEW).eq("documento", documento).to_sql();
    let repo = DynamicRepository::new(state.databases.pool(Database::Convocatoria).clone());
    let results = repo.select_any(&sql).await?;

    Ok(ApiResponse::success(ConsultaResponse {
        count: results.len(),
        results,
    }))
}

fn validate_documento(raw: Option<&str>) -> Result<String, ApiError> {
    let documento = raw.map(str::trim).unwrap_or_default();
    let len = documento.chars().count();
    if !(6..=15).contains(&len) {
        return Err(ApiError::field_error("documento", "Must be between 6 and 15 characters"));
    }
    Ok(documento.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documento_length_bounds() {
        assert!(validate_documento(None).is_err());
        assert!(validate_documento(Some("12345")).is_err());
        assert_eq!(validate_documento(Some(" 123456 ")).unwrap(), "123456");
        assert!(validate_documento(Some("123456789012345")).is_ok());
        assert!(validate_documento(Some("1234567890123456")).is_err());
    }
}
