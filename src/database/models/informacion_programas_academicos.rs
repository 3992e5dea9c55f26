use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InformacionProgramasAcademicos {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo: String,
    pub ies_legalizacion: Option<String>,
    pub ies_actual: Option<String>,
    pub programa_legalizacion: Option<String>,
    pub programa_actual: Option<String>,
    pub numero_semestres_programa: Option<i64>,
    pub numero_total_creditos_programa: Option<i64>,
    pub es_cuatrimestral: String,
    pub cambio_afecta_numero_giros_proyectados_inicialmente: Option<String>,
    pub cuantos_giros_reducidos_proyectados: Option<i64>,
    pub periodo_efectivo_cambio: Option<String>,
    pub radicado_pqrs_cambio: Option<String>,
    pub fecha_actualizacion: Option<NaiveDateTime>,
    pub responsable_actualizacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformacionProgramasAcademicosCreate {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo: String,
    pub ies_legalizacion: Option<String>,
    pub ies_actual: Option<String>,
    pub programa_legalizacion: Option<String>,
    pub programa_actual: Option<String>,
    pub numero_semestres_programa: Option<i64>,
    pub numero_total_creditos_programa: Option<i64>,
    #[serde(default = "default_es_cuatrimestral")]
    pub es_cuatrimestral: String,
    pub cambio_afecta_numero_giros_proyectados_inicialmente: Option<String>,
    pub cuantos_giros_reducidos_proyectados: Option<i64>,
    pub periodo_efectivo_cambio: Option<String>,
    pub radicado_pqrs_cambio: Option<String>,
}

// Placeholder the front-end treats as "not answered"
fn default_es_cuatrimestral() -> String {
    ".".to_string()
}

impl Entity for InformacionProgramasAcademicos {
    type Create = InformacionProgramasAcademicosCreate;

    const TABLE: &'static str = "informacion_programas_academicos";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "docconvfondo";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "documento",
        "convocatoria",
        "fondo",
        "ies_legalizacion",
        "ies_actual",
        "programa_legalizacion",
        "programa_actual",
        "numero_semestres_programa",
        "numero_total_creditos_programa",
        "es_cuatrimestral",
        "cambio_afecta_numero_giros_proyectados_inicialmente",
        "cuantos_giros_reducidos_proyectados",
        "periodo_efectivo_cambio",
        "radicado_pqrs_cambio",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["fecha_actualizacion", "responsable_actualizacion"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_actualizacion");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_actualizacion");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento", "convocatoria", "fondo"],
        contains: &["programa_actual", "ies_actual"],
    };
    const LABEL: &'static str = "Academic programme record";
}
