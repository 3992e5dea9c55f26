use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Beneficiary giving up some or all pending disbursements.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RenunciaGiros {
    pub docconvfondo: String,
    pub documento_beneficiario: String,
    pub motivo_renuncia_giro: String,
    pub periodo_al_que_renuncia_giro: Option<String>,
    pub radicado_pqrs: Option<String>,
    pub modalidad_renuncia_giro: Option<String>,
    pub a_cuantos_giros_renuncia: i64,
    pub id_usuario: i64,
    pub fondo_convocatoria: String,
    pub giros_pendientes: i64,
    pub giros_restantes_renuncia: i64,
    pub fecha_registro: Option<NaiveDateTime>,
    pub responsable_registro: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenunciaGirosCreate {
    pub docconvfondo: String,
    pub documento_beneficiario: String,
    pub motivo_renuncia_giro: String,
    pub periodo_al_que_renuncia_giro: Option<String>,
    pub radicado_pqrs: Option<String>,
    pub modalidad_renuncia_giro: Option<String>,
    pub a_cuantos_giros_renuncia: i64,
    pub id_usuario: i64,
    pub fondo_convocatoria: String,
    pub giros_pendientes: i64,
    pub giros_restantes_renuncia: i64,
}

impl Entity for RenunciaGiros {
    type Create = RenunciaGirosCreate;

    const TABLE: &'static str = "renuncia_giros";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "docconvfondo";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const COLUMNS: &'static [&'static str] = &[
        "docconvfondo",
        "documento_beneficiario",
        "motivo_renuncia_giro",
        "periodo_al_que_renuncia_giro",
        "radicado_pqrs",
        "modalidad_renuncia_giro",
        "a_cuantos_giros_renuncia",
        "id_usuario",
        "fondo_convocatoria",
        "giros_pendientes",
        "giros_restantes_renuncia",
    ];
    const SERVER_MANAGED: &'static [&'static str] = &["fecha_registro", "responsable_registro"];
    const TIMESTAMP: Option<&'static str> = Some("fecha_registro");
    const RESPONSIBLE: Option<&'static str> = Some("responsable_registro");
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento_beneficiario", "fondo_convocatoria"],
        contains: &[],
    };
    const LABEL: &'static str = "Disbursement renunciation";
}
