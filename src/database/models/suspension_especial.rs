use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SuspensionEspecial {
    pub id: i64,
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub periodo_suspension_especial: String,
    pub motivo_suspension_especial: String,
    pub radicado_pqrs: Option<String>,
    pub fecha_creacion: Option<NaiveDateTime>,
    pub responsable_creacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspensionEspecialCreate {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub periodo_suspension_especial: String,
    pub motivo_suspension_especial: String,
    pub radicado_pqrs: Option<String>,
}

impl Entity for SuspensionEspecial {
    type Create = SuspensionEspecialCreate;

    const TABLE: &'static str = "suspension_especial";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "documento",
        "convocatoria",
        "fondo_sapiencia",
        "periodo_suspension_especial",
        "motivo_suspension_especial",
        "radicado_pqrs",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["id", "fecha_creacion", "responsable_creacion"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_creacion");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_creacion");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["docconvfondo", "documento", "convocatoria", "periodo_suspension_especial"],
        contains: &[],
    };
    const LABEL: &'static str = "Special suspension";
}
