// handlers/protected/reintegros.rs - GET /reintegros/por-fecha

use axum::extract::{Query, State};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

use crate::database::models::Reintegros;
use crate::database::Repository;
use crate::error::ApiError;
use crate::filter::{parse_page, Condition};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Reimbursements reported between two dates, both inclusive, newest first.
pub async fn por_fecha(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<Reintegros>> {
    let (desde, hasta) = date_range(&params)?;
    let page = parse_page(&params, state.config.api.max_page_limit)?;

    let filter = Repository::<Reintegros>::filter()
        .condition(Condition::Gte("fecha_reporte", Value::String(desde.to_string())))
        .condition(Condition::Lte("fecha_reporte", Value::String(hasta.to_string())))
        .page(page);
    let rows = Repository::<Reintegros>::from_manager(&state.databases)
        .select_any(filter)
        .await?;
    Ok(ApiResponse::success(rows))
}

fn date_range(params: &HashMap<String, String>) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let desde = parse_date(params, "fecha_desde")?;
    let hasta = parse_date(params, "fecha_hasta")?;
    if desde > hasta {
        return Err(ApiError::field_error("fecha_desde", "Must not be after fecha_hasta"));
    }
    Ok((desde, hasta))
}

fn parse_date(params: &HashMap<String, String>, name: &str) -> Result<NaiveDate, ApiError> {
    let raw = params
        .get(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::field_error(name, "Required"))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ApiError::field_error(name, "Expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let (desde, hasta) = date_range(&params(&[("fecha_desde", "2024-01-01"), ("fecha_hasta", "2024-01-01")])).unwrap();
        assert_eq!(desde, hasta);

        assert!(date_range(&params(&[("fecha_desde", "2024-02-01"), ("fecha_hasta", "2024-01-01")])).is_err());
    }

    #[test]
    fn dates_are_required_and_iso() {
        assert!(date_range(&params(&[("fecha_desde", "2024-01-01")])).is_err());
        assert!(date_range(&params(&[("fecha_desde", "01/02/2024"), ("fecha_hasta", "2024-03-01")])).is_err());
    }
}
