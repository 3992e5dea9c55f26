use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Grace-period extension granted to a beneficiary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProrrogaPeriodoDeGracia {
    pub id: i64,
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub fecha_fin_prorroga: NaiveDate,
    pub radicado_pqrs: String,
    pub responsable_registro: Option<String>,
    pub fecha_registro: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProrrogaPeriodoDeGraciaCreate {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub fecha_fin_prorroga: NaiveDate,
    pub radicado_pqrs: String,
}

impl Entity for ProrrogaPeriodoDeGracia {
    type Create = ProrrogaPeriodoDeGraciaCreate;

    const TABLE: &'static str = "prorroga_periodo_de_gracia";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "documento",
        "convocatoria",
        "fondo_sapiencia",
        "fecha_fin_prorroga",
        "radicado_pqrs",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["id", "fecha_registro", "responsable_registro"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_registro");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_registro");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["docconvfondo", "documento", "convocatoria"],
        contains: &[],
    };
    const LABEL: &'static str = "Grace-period extension";
}
