//! Rows of arbitrary shape (database views) as JSON objects.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::database::manager::DatabaseError;
use crate::database::query_builder::prepare;
use crate::filter::SqlResult;

pub struct DynamicRepository {
    pool: MySqlPool,
}

impl DynamicRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Run a query and return every row as a JSON map keyed by column name.
    pub async fn select_any(&self, sql: &SqlResult) -> Result<Vec<Map<String, Value>>, DatabaseError> {
        let rows = prepare(sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}

pub fn row_to_json(row: &MySqlRow) -> Map<String, Value> {
    let mut map = Map::new();
    for (i, column) in row.columns().iter().enumerate() {
        map.insert(column.name().to_string(), column_to_json(row, i));
    }
    map
}

fn column_to_json(row: &MySqlRow, i: usize) -> Value {
    let is_null = row.try_get_raw(i).map(|raw| raw.is_null()).unwrap_or(true);
    if is_null {
        return Value::Null;
    }

    let type_name = row.column(i).type_info().name().to_ascii_uppercase();
    let decoded = match type_name.as_str() {
        "BOOLEAN" => row.try_get::<bool, _>(i).map(Value::Bool).ok(),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<i64, _>(i).map(Value::from).ok()
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" | "YEAR" => row.try_get::<u64, _>(i).map(Value::from).ok(),
        "FLOAT" | "DOUBLE" => row
            .try_get::<f64, _>(i)
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        "DECIMAL" => row.try_get::<Decimal, _>(i).ok().map(decimal_to_json),
        "DATE" => row
            .try_get::<NaiveDate, _>(i)
            .map(|d| Value::String(d.to_string()))
            .ok(),
        "DATETIME" | "TIMESTAMP" => row
            .try_get::<NaiveDateTime, _>(i)
            .map(|dt| Value::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string()))
            .ok(),
        "TIME" => row
            .try_get::<NaiveTime, _>(i)
            .map(|t| Value::String(t.to_string()))
            .ok(),
        "JSON" => row.try_get::<Value, _>(i).ok(),
        _ => None,
    };

    // Text, enums and anything unrecognised
    decoded
        .or_else(|| row.try_get::<String, _>(i).map(Value::String).ok())
        .unwrap_or(Value::Null)
}

fn decimal_to_json(d: Decimal) -> Value {
    use rust_decimal::prelude::ToPrimitive;
    d.to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(d.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_become_numbers() {
        let value = decimal_to_json(Decimal::new(123456, 2));
        assert_eq!(value, serde_json::json!(1234.56));
    }
}
