use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Beneficiary personal and residence data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InformacionPersonal {
    pub docconvfondo: String,
    pub id_usuario: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub nombre_completo: Option<String>,
    pub genero: Option<String>,
    pub lgtbi: Option<String>,
    pub fecha_nacimiento: Option<NaiveDateTime>,
    pub telefono: Option<String>,
    pub celular: Option<String>,
    pub celular_alternativo: Option<String>,
    pub correo: Option<String>,
    pub correo_alternativo: Option<String>,
    pub estrato_residencia_legalizacion: Option<String>,
    pub estrato_residencia_actual: Option<String>,
    pub direccion_residencia_legalizacion: Option<String>,
    pub direccion_residencia_actual: Option<String>,
    pub comuna_residencia_legalizacion: Option<String>,
    pub comuna_residencia_actual: Option<String>,
    pub municipio_residencia_legalizacion: Option<String>,
    pub municipio_residencia_actual: Option<String>,
    pub barrio_residencia_legalizacion: Option<String>,
    pub barrio_residencia_actual: Option<String>,
    pub victima_conflicto: Option<String>,
    pub hecho_victimizante: Option<String>,
    pub situacion_discapacidad: Option<String>,
    pub tipo_discapacidad: Option<String>,
    pub puntaje_sisben: Option<String>,
    pub pertenece_etnia: Option<String>,
    pub tipo_etnia: Option<String>,
    pub fecha_actualizacion: Option<NaiveDateTime>,
    pub responsable_actualizacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformacionPersonalCreate {
    pub docconvfondo: String,
    pub id_usuario: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub nombre_completo: Option<String>,
    pub genero: Option<String>,
    pub lgtbi: Option<String>,
    pub fecha_nacimiento: Option<NaiveDateTime>,
    pub telefono: Option<String>,
    pub celular: Option<String>,
    pub celular_alternativo: Option<String>,
    pub correo: Option<String>,
    pub correo_alternativo: Option<String>,
    pub estrato_residencia_legalizacion: Option<String>,
    pub estrato_residencia_actual: Option<String>,
    pub direccion_residencia_legalizacion: Option<String>,
    pub direccion_residencia_actual: Option<String>,
    pub comuna_residencia_legalizacion: Option<String>,
    pub comuna_residencia_actual: Option<String>,
    pub municipio_residencia_legalizacion: Option<String>,
    pub municipio_residencia_actual: Option<String>,
    pub barrio_residencia_legalizacion: Option<String>,
    pub barrio_residencia_actual: Option<String>,
    pub victima_conflicto: Option<String>,
    pub hecho_victimizante: Option<String>,
    pub situacion_discapacidad: Option<String>,
    pub tipo_discapacidad: Option<String>,
    pub puntaje_sisben: Option<String>,
    pub pertenece_etnia: Option<String>,
    pub tipo_etnia: Option<String>,
}

impl Entity for InformacionPersonal {
    type Create = InformacionPersonalCreate;

    const TABLE: &'static str = "informacion_personal";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "docconvfondo";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "id_usuario",
        "documento",
        "convocatoria",
        "fondo_sapiencia",
        "nombre_completo",
        "genero",
        "lgtbi",
        "fecha_nacimiento",
        "telefono",
        "celular",
        "celular_alternativo",
        "correo",
        "correo_alternativo",
        "estrato_residencia_legalizacion",
        "estrato_residencia_actual",
        "direccion_residencia_legalizacion",
        "direccion_residencia_actual",
        "comuna_residencia_legalizacion",
        "comuna_residencia_actual",
        "municipio_residencia_legalizacion",
        "municipio_residencia_actual",
        "barrio_residencia_legalizacion",
        "barrio_residencia_actual",
        "victima_conflicto",
        "hecho_victimizante",
        "situacion_discapacidad",
        "tipo_discapacidad",
        "puntaje_sisben",
        "pertenece_etnia",
        "tipo_etnia",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["fecha_actualizacion", "responsable_actualizacion"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_actualizacion");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_actualizacion");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento", "convocatoria", "fondo_sapiencia", "id_usuario"],
        contains: &["nombre_completo"],
    };
    const LABEL: &'static str = "Personal information record";
}
