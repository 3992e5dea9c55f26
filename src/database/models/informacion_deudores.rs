use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Co-signer (deudor) details of a beneficiary, keyed by `idconvfondo`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InformacionDeudores {
    pub idconvfondo: String,
    pub docconvfondo: String,
    pub id_usuario: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub tipo_documento_deudor: Option<String>,
    pub documento_deudor: Option<String>,
    pub nombre_deudor: Option<String>,
    pub parentesco_deudor: Option<String>,
    pub telefono_deudor: Option<String>,
    pub celular_deudor: Option<String>,
    pub correo_deudor: Option<String>,
    pub direccion_residencia_deudor: Option<String>,
    pub departamento_residencia_deudor: Option<String>,
    pub municipio_residencia_deudor: Option<String>,
    pub tiempo_residencia_deudor: Option<String>,
    pub comuna_residencia_deudor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformacionDeudoresCreate {
    pub idconvfondo: String,
    pub docconvfondo: String,
    pub id_usuario: String,
    pub documento: String,
    pub convocatoria: String,
    pub fondo_sapiencia: String,
    pub tipo_documento_deudor: Option<String>,
    pub documento_deudor: Option<String>,
    pub nombre_deudor: Option<String>,
    pub parentesco_deudor: Option<String>,
    pub telefono_deudor: Option<String>,
    pub celular_deudor: Option<String>,
    pub correo_deudor: Option<String>,
    pub direccion_residencia_deudor: Option<String>,
    pub departamento_residencia_deudor: Option<String>,
    pub municipio_residencia_deudor: Option<String>,
    pub tiempo_residencia_deudor: Option<String>,
    pub comuna_residencia_deudor: Option<String>,
}

impl Entity for InformacionDeudores {
    type Create = InformacionDeudoresCreate;

    const TABLE: &'static str = "informacion_deudores";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "idconvfondo";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const COLUMNS: &'static [&'static str] = &[
        "idconvfondo",
        "docconvfondo",
        "id_usuario",
        "documento",
        "convocatoria",
        "fondo_sapiencia",
        "tipo_documento_deudor",
        "documento_deudor",
        "nombre_deudor",
        "parentesco_deudor",
        "telefono_deudor",
        "celular_deudor",
        "correo_deudor",
        "direccion_residencia_deudor",
        "departamento_residencia_deudor",
        "municipio_residencia_deudor",
        "tiempo_residencia_deudor",
        "comuna_residencia_deudor",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &[];
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["docconvfondo", "documento", "convocatoria", "documento_deudor"],
        contains: &["nombre_deudor"],
    };
    const LABEL: &'static str = "Debtor record";
}
