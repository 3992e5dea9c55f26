use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::{FilterSpec, OrderInfo, SortDirection};

/// Append-only audit entry describing a change made to a beneficiary's fund.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChangeLog {
    pub id: i64,
    pub tipo_cambio: String,
    pub documento_beneficiario_cambio: String,
    pub responsable_cambio: Option<String>,
    #[sqlx(default)]
    pub fecha_cambio: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeLogCreate {
    pub tipo_cambio: String,
    pub documento_beneficiario_cambio: String,
}

impl Entity for ChangeLog {
    type Create = ChangeLogCreate;

    const TABLE: &'static str = "change_log_fondos";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &["tipo_cambio", "documento_beneficiario_cambio"];
    const SERVER_MANAGED: &'static [&'static str] = &["id", "responsable_cambio", "fecha_cambio"];
    const RESPONSIBLE: Option<&'static str> = Some("responsable_cambio");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["tipo_cambio", "documento_beneficiario_cambio"],
        contains: &[],
    };
    const ORDER: Option<OrderInfo> = Some(OrderInfo {
        column: "id",
        sort: SortDirection::Desc,
    });
    const LABEL: &'static str = "Change log entry";
}
