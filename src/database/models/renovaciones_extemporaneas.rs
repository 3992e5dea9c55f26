use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Late renewal window opened for a beneficiary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RenovacionesExtemporaneas {
    pub id: i64,
    pub documento: String,
    pub periodo: String,
    pub fecha_inicio_renovacion: NaiveDate,
    pub fecha_fin_renovacion: NaiveDate,
    pub codigo_fondo_activacion: String,
    pub radicado_pqrs: String,
    pub responsable_activacion: Option<String>,
    pub fecha_registro: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenovacionesExtemporaneasCreate {
    pub documento: String,
    pub periodo: String,
    pub fecha_inicio_renovacion: NaiveDate,
    pub fecha_fin_renovacion: NaiveDate,
    pub codigo_fondo_activacion: String,
    pub radicado_pqrs: String,
}

impl Entity for RenovacionesExtemporaneas {
    type Create = RenovacionesExtemporaneasCreate;

    const TABLE: &'static str = "renovaciones_extemporaneas";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &[
        "documento",
        "periodo",
        "fecha_inicio_renovacion",
        "fecha_fin_renovacion",
        "codigo_fondo_activacion",
        "radicado_pqrs",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["id", "fecha_registro", "responsable_activacion"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_registro");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_activacion");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento", "periodo", "codigo_fondo_activacion"],
        contains: &[],
    };
    const LABEL: &'static str = "Late renewal";
}
