use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::{FilterSpec, OrderInfo, SortDirection};

/// Reimbursement of disbursed funds. Amounts are DECIMAL(15,2).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reintegros {
    pub id: i64,
    pub beneficiario: String,
    pub ies: String,
    pub documento: String,
    pub monto_girado: Decimal,
    pub monto_reintegro: Option<Decimal>,
    pub fecha_reporte: NaiveDate,
    pub estado_correo: Option<String>,
    pub certificado: Option<String>,
    pub estado_fiducia: Option<String>,
    pub fecha_efectuado: Option<NaiveDate>,
    pub fecha_registro: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReintegrosCreate {
    pub beneficiario: String,
    pub ies: String,
    pub documento: String,
    pub monto_girado: Decimal,
    pub monto_reintegro: Option<Decimal>,
    pub fecha_reporte: NaiveDate,
    pub estado_correo: Option<String>,
    pub certificado: Option<String>,
    pub estado_fiducia: Option<String>,
    pub fecha_efectuado: Option<NaiveDate>,
}

impl Entity for Reintegros {
    type Create = ReintegrosCreate;

    const TABLE: &'static str = "reintegros";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &[
        "beneficiario",
        "ies",
        "documento",
        "monto_girado",
        "monto_reintegro",
        "fecha_reporte",
        "estado_correo",
        "certificado",
        "estado_fiducia",
        "fecha_efectuado",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["id", "fecha_registro"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_registro");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento", "estado_fiducia"],
        contains: &["beneficiario"],
    };
    const ORDER: Option<OrderInfo> = Some(OrderInfo {
        column: "fecha_reporte",
        sort: SortDirection::Desc,
    });
    const LABEL: &'static str = "Reimbursement";
}
