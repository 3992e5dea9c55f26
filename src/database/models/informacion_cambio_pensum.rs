use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::{FilterSpec, OrderInfo, SortDirection};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InformacionCambioPensum {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo: String,
    pub ies_actual: Option<String>,
    pub programa_actual: Option<String>,
    pub numero_semestres_pensum_anterior: Option<i64>,
    pub numero_semestres_pensum_actual: Option<i64>,
    pub numero_creditos_pensum_anterior: Option<i64>,
    pub numero_creditos_pensum_actual: Option<i64>,
    pub periodo_efectivo_cambio: Option<String>,
    pub radicado_pqrs_cambio: Option<String>,
    pub fecha_actualizacion: Option<NaiveDateTime>,
    pub responsable_actualizacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformacionCambioPensumCreate {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo: String,
    pub ies_actual: Option<String>,
    pub programa_actual: Option<String>,
    pub numero_semestres_pensum_anterior: Option<i64>,
    pub numero_semestres_pensum_actual: Option<i64>,
    pub numero_creditos_pensum_anterior: Option<i64>,
    pub numero_creditos_pensum_actual: Option<i64>,
    pub periodo_efectivo_cambio: Option<String>,
    pub radicado_pqrs_cambio: Option<String>,
}

impl Entity for InformacionCambioPensum {
    type Create = InformacionCambioPensumCreate;

    const TABLE: &'static str = "informacion_cambio_pensum";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "docconvfondo";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "documento",
        "convocatoria",
        "fondo",
        "ies_actual",
        "programa_actual",
        "numero_semestres_pensum_anterior",
        "numero_semestres_pensum_actual",
        "numero_creditos_pensum_anterior",
        "numero_creditos_pensum_actual",
        "periodo_efectivo_cambio",
        "radicado_pqrs_cambio",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["fecha_actualizacion", "responsable_actualizacion"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_actualizacion");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_actualizacion");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento", "convocatoria"],
        contains: &[],
    };
    const ORDER: Option<OrderInfo> = Some(OrderInfo {
        column: "fecha_actualizacion",
        sort: SortDirection::Desc,
    });
    const LABEL: &'static str = "Curriculum change record";
}
