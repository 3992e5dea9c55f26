use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RenunciaOTerminacion {
    pub id: i64,
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub periodo_incurre_renuncia_o_terminacion: String,
    pub motivo_renuncia_o_terminacion: String,
    pub radicado_pqrs: Option<String>,
    pub fecha_creacion: Option<NaiveDateTime>,
    pub responsable_creacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenunciaOTerminacionCreate {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub periodo_incurre_renuncia_o_terminacion: String,
    pub motivo_renuncia_o_terminacion: String,
    pub radicado_pqrs: Option<String>,
}

impl Entity for RenunciaOTerminacion {
    type Create = RenunciaOTerminacionCreate;

    const TABLE: &'static str = "renuncia_o_terminacion";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "documento",
        "convocatoria",
        "fondo_sapiencia",
        "periodo_incurre_renuncia_o_terminacion",
        "motivo_renuncia_o_terminacion",
        "radicado_pqrs",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["id", "fecha_creacion", "responsable_creacion"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_creacion");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_creacion");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["docconvfondo", "documento", "convocatoria"],
        contains: &[],
    };
    const LABEL: &'static str = "Renunciation or termination";
}
