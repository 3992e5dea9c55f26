use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EstudianteObtieneGrado {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: Option<String>,
    pub fondo_sapiencia: String,
    pub periodo_grado: Option<String>,
    pub fecha_grado: Option<NaiveDate>,
    pub fecha_creacion: Option<NaiveDateTime>,
    pub responsable_creacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstudianteObtieneGradoCreate {
    pub docconvfondo: String,
    pub documento: String,
    pub convocatoria: Option<String>,
    pub fondo_sapiencia: String,
    pub periodo_grado: Option<String>,
    pub fecha_grado: Option<NaiveDate>,
}

impl Entity for EstudianteObtieneGrado {
    type Create = EstudianteObtieneGradoCreate;

    const TABLE: &'static str = "estudiante_obtiene_grado";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "docconvfondo";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "documento",
        "convocatoria",
        "fondo_sapiencia",
        "periodo_grado",
        "fecha_grado",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["fecha_creacion", "responsable_creacion"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_creacion");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_creacion");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento", "convocatoria", "fondo_sapiencia", "periodo_grado"],
        contains: &[],
    };
    const LABEL: &'static str = "Graduation record";
}
