use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Historical disbursement report, one row per (beneficiary, period).
/// The view lives in the financial database and is never written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VwGirosGeneralHistoricoIes {
    pub documento: String,
    pub solicitud: Option<String>,
    pub solicitud_nuevo_fiduciaria: Option<String>,
    pub convocatoria: Option<String>,
    pub convocatoria_numero: Option<String>,
    pub encargo_fiduciario: Option<String>,
    pub orden_pago_sostenimiento: Option<String>,
    pub orden_pago_matricula: Option<String>,
    pub periodo: Option<String>,
    pub estado: Option<String>,
    pub tipo_documento: Option<String>,
    pub documento_actual: Option<String>,
    pub documento_anterior: Option<String>,
    pub genero: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub nombre: Option<String>,
    #[sqlx(rename = "primerApellido")]
    #[serde(rename = "primerApellido")]
    pub primer_apellido: Option<String>,
    #[sqlx(rename = "segundoApellido")]
    #[serde(rename = "segundoApellido")]
    pub segundo_apellido: Option<String>,
    #[sqlx(rename = "primerNombre")]
    #[serde(rename = "primerNombre")]
    pub primer_nombre: Option<String>,
    #[sqlx(rename = "segundoNombre")]
    #[serde(rename = "segundoNombre")]
    pub segundo_nombre: Option<String>,
    pub ies: Option<String>,
    pub programa: Option<String>,
    pub modalidad: Option<String>,
    pub semestre_cursar: Option<String>,
    pub giros_solicitados: Option<i64>,
    pub giros_realizados: Option<i64>,
    pub debito: Option<String>,
    pub consignacion_sostenimiento: Option<String>,
    pub valor_debito: Option<Decimal>,
    pub valor_debito_real: Option<String>,
    pub valor_liquidacion_matricula: Option<Decimal>,
    pub valor_pagar_matricula: Option<Decimal>,
    pub valor_pagar_sostenimiento: Option<Decimal>,
    pub valor_girar: Option<Decimal>,
    pub fecha_registro: Option<NaiveDateTime>,
    pub departamento_nacimiento: Option<String>,
    pub municipio_nacimiento: Option<String>,
    pub departamento_residencia: Option<String>,
    pub municipio_residencia: Option<String>,
    pub barrio: Option<String>,
    pub comuna: Option<String>,
    pub estrato: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub celular: Option<String>,
    pub correo: Option<String>,
    pub correo_alterno: Option<String>,
    pub observacion: Option<String>,
    pub corte_aprobado: Option<String>,
    pub fondo: Option<String>,
    pub periodo_academico: Option<String>,
    pub id_fondo: Option<i64>,
}

impl Entity for VwGirosGeneralHistoricoIes {
    type Create = ();

    const TABLE: &'static str = "vw_giros_general_historico_ies";
    const DATABASE: Database = Database::DtfFinanciera;
    const KEY: &'static str = "documento";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const COLUMNS: &'static [&'static str] = &[];
    const SERVER_MANAGED: &'static [&'static str] = &[];
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["estado"],
        contains: &["documento", "fondo", "ies"],
    };
    const LABEL: &'static str = "Disbursement record";
}
