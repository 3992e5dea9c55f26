use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::database::manager::Database;
use crate::database::record::FieldRules;
use crate::filter::{FilterSpec, OrderInfo};

/// How a primary key arrives in a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Natural text key supplied by the client (e.g. `docconvfondo`).
    Text,
    /// AUTO_INCREMENT integer assigned by MySQL.
    AutoIncrement,
}

/// Static description of one domain table.
///
/// `COLUMNS` lists every column a client may write on create, including a
/// natural key. `SERVER_MANAGED` lists the columns the server owns (an
/// auto-increment key, the timestamp, the responsible party); bodies that
/// carry them are rejected.
pub trait Entity:
    for<'r> FromRow<'r, MySqlRow> + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    /// Typed create body; deserializing it enforces required fields and types.
    type Create: DeserializeOwned + Serialize + Send;

    const TABLE: &'static str;
    const DATABASE: Database;
    const KEY: &'static str;
    const KEY_KIND: KeyKind;
    const COLUMNS: &'static [&'static str];
    const SERVER_MANAGED: &'static [&'static str];
    const TIMESTAMP: Option<&'static str> = None;
    const RESPONSIBLE: Option<&'static str> = None;
    const FILTERS: FilterSpec = FilterSpec {
        exact: &[],
        contains: &[],
    };
    const ORDER: Option<OrderInfo> = None;
    /// Human label used in not-found messages.
    const LABEL: &'static str = "Record";

    fn field_rules() -> FieldRules<'static> {
        FieldRules {
            writable: Self::COLUMNS,
            server_managed: Self::SERVER_MANAGED,
        }
    }

    /// Parse a path segment into a bindable key value.
    fn parse_key(raw: &str) -> Option<Value> {
        match Self::KEY_KIND {
            KeyKind::Text => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| Value::String(trimmed.to_string()))
            }
            KeyKind::AutoIncrement => raw.trim().parse::<i64>().ok().map(Value::from),
        }
    }
}
