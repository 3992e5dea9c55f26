//! Grouped view of the historical disbursement report.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::database::models::VwGirosGeneralHistoricoIes;

/// One beneficiary's disbursements for a call and fund.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GirosGroup {
    pub documento: String,
    pub convocatoria: Option<String>,
    pub fondo: Option<String>,
    pub giros: Vec<Giro>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Giro {
    pub periodo: Option<String>,
    pub estado: Option<String>,
    pub valor_girar: Option<Decimal>,
    pub fecha_registro: Option<NaiveDateTime>,
}

/// Group rows by `(documento, convocatoria, fondo)`. Groups appear in the
/// order their first row appears; rows keep their order within a group.
pub fn group_giros(rows: Vec<VwGirosGeneralHistoricoIes>) -> Vec<GirosGroup> {
    let mut groups: Vec<GirosGroup> = Vec::new();
    let mut index: HashMap<(String, Option<String>, Option<String>), usize> = HashMap::new();

    for row in rows {
        let key = (row.documento.clone(), row.convocatoria.clone(), row.fondo.clone());
        let giro = Giro {
            periodo: row.periodo,
            estado: row.estado,
            valor_girar: row.valor_girar,
            fecha_registro: row.fecha_registro,
        };

        match index.get(&key) {
            Some(&i) => groups[i].giros.push(giro),
            None => {
                index.insert(key, groups.len());
                groups.push(GirosGroup {
                    documento: row.documento,
                    convocatoria: row.convocatoria,
                    fondo: row.fondo,
                    giros: vec![giro],
                });
            }
        }
    }

    groups
}
