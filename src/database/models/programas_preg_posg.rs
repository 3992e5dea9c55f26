use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Academic programme catalogue, linked to an IES through `id_ies`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProgramasPregPosg {
    pub id: i64,
    pub id_programa: String,
    pub id_ies: Option<String>,
    pub estado: Option<String>,
    pub recibe_nuevos: Option<String>,
    pub codigo_snies: Option<String>,
    pub nombre_programa: String,
    pub tipo_programa: String,
    pub conteo_programa: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramasPregPosgCreate {
    pub id_programa: String,
    pub id_ies: Option<String>,
    pub estado: Option<String>,
    pub recibe_nuevos: Option<String>,
    pub codigo_snies: Option<String>,
    pub nombre_programa: String,
    pub tipo_programa: String,
    pub conteo_programa: String,
}

impl Entity for ProgramasPregPosg {
    type Create = ProgramasPregPosgCreate;

    const TABLE: &'static str = "programas_preg_posg";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &[
        "id_programa",
        "id_ies",
        "estado",
        "recibe_nuevos",
        "codigo_snies",
        "nombre_programa",
        "tipo_programa",
        "conteo_programa",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["id"];
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["id_programa", "id_ies", "estado", "tipo_programa"],
        contains: &["nombre_programa"],
    };
    const LABEL: &'static str = "Programme";
}
