use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Database, Entity, KeyKind};
use crate::filter::FilterSpec;

/// Row of `usuarios`. The hash and salt are never serialised.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    #[serde(default, skip_serializing)]
    pub sal: String,
    pub nombre_completo: Option<String>,
    pub activo: Option<i64>,
    pub creado_en: Option<NaiveDateTime>,
}

/// Create body. The clear-text password is hashed before insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsuarioCreate {
    pub username: String,
    pub password: String,
    pub nombre_completo: Option<String>,
    pub activo: Option<i64>,
}

/// Partial update body. The username cannot change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsuarioUpdate {
    pub password: Option<String>,
    pub nombre_completo: Option<String>,
    pub activo: Option<i64>,
}

impl Entity for Usuario {
    type Create = UsuarioCreate;

    const TABLE: &'static str = "usuarios";
    const DATABASE: Database = Database::Analitica;
    const KEY: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::AutoIncrement;
    const COLUMNS: &'static [&'static str] = &["username", "password_hash", "sal", "nombre_completo", "activo"];
    const SERVER_MANAGED: &'static [&'static str] = &["id", "creado_en"];
    const FILTERS: FilterSpec = FilterSpec {
        exact: &["username", "activo"],
        contains: &["nombre_completo"],
    };
    const LABEL: &'static str = "User";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_not_serialised() {
        let user = Usuario {
            id: 1,
            username: "admin".into(),
            password_hash: "abc".into(),
            sal: "def".into(),
            nombre_completo: Some("Administrador".into()),
            activo: Some(1),
            creado_en: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("sal").is_none());
        assert_eq!(json["username"], "admin");
    }

    #[test]
    fn update_rejects_username() {
        let result = serde_json::from_value::<UsuarioUpdate>(serde_json::json!({ "username": "otro" }));
        assert!(result.is_err());
    }
}
