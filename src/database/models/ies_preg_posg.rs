use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Higher-education institution catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IesPregPosg {
    pub id: i64,
    pub id_ies: String,
    pub nombre_ies: Option<String>,
    pub estado: Option<String>,
    pub sector: Option<String>,
    pub conteo_ies: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IesPregPosgCreate {
    pub id_ies: String,
    pub nombre_ies: Option<String>,
    pub estado: Option<String>,
    pub sector: Option<String>,
    pub conteo_ies: Option<String>,
}

impl Entity for IesPregPosg {
    type Create = IesPregPosgCreate;

    const TABLE: &'static str = "ies_preg_posg";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &["id_ies", "nombre_ies", "estado", "sector", "conteo_ies"];
    const SERVER_MANAGED: &'static [&'static str] = &["id"];
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["id_ies", "estado", "sector"],
        contains: &["nombre_ies"],
    };
    const LABEL: &'static str = "IES";
}
