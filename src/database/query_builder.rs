use serde_json::{Map, Value};
use sqlx::mysql::{MySql, MySqlArguments};

use crate::filter::SqlResult;

pub type MySqlQuery<'q> = sqlx::query::Query<'q, MySql, MySqlArguments>;

/// Quote a MySQL identifier with backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// `INSERT INTO t (a, b) VALUES (?, ?)` over the entries of `values`, in the
/// order given by `columns` so the statement text is stable.
pub fn insert_sql(table: &str, columns: &[&str], values: &Map<String, Value>) -> SqlResult {
    let present: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|c| values.contains_key(*c))
        .collect();

    let query = if present.is_empty() {
        format!("INSERT INTO {} () VALUES ()", quote_identifier(table))
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_identifier(table),
            present.iter().map(|c| quote_identifier(c)).collect::<Vec<_>>().join(", "),
            vec!["?"; present.len()].join(", ")
        )
    };

    let params = present
        .iter()
        .map(|c| values.get(*c).cloned().unwrap_or(Value::Null))
        .collect();

    SqlResult { query, params }
}

/// `UPDATE t SET a = ?, ts = CURRENT_TIMESTAMP WHERE key = ?`. Returns `None`
/// when there is nothing to set.
pub fn update_sql(
    table: &str,
    key: &str,
    key_value: &Value,
    changes: &[(String, Value)],
    touch: Option<&str>,
) -> Option<SqlResult> {
    // Nothing to write, so the timestamp stays put too
    if changes.is_empty() {
        return None;
    }

    let mut assignments: Vec<String> = changes
        .iter()
        .map(|(column, _)| format!("{} = ?", quote_identifier(column)))
        .collect();
    if let Some(column) = touch {
        assignments.push(format!("{} = CURRENT_TIMESTAMP", quote_identifier(column)));
    }

    let mut params: Vec<Value> = changes.iter().map(|(_, v)| v.clone()).collect();
    params.push(key_value.clone());

    Some(SqlResult {
        query: format!(
            "UPDATE {} SET {} WHERE {} = ?",
            quote_identifier(table),
            assignments.join(", "),
            quote_identifier(key)
        ),
        params,
    })
}

pub fn delete_sql(table: &str, key: &str, key_value: &Value) -> SqlResult {
    SqlResult {
        query: format!(
            "DELETE FROM {} WHERE {} = ?",
            quote_identifier(table),
            quote_identifier(key)
        ),
        params: vec![key_value.clone()],
    }
}

pub fn select_by_key_sql(table: &str, key: &str, key_value: &Value) -> SqlResult {
    SqlResult {
        query: format!(
            "SELECT * FROM {} WHERE {} = ? LIMIT 1",
            quote_identifier(table),
            quote_identifier(key)
        ),
        params: vec![key_value.clone()],
    }
}

/// Build a query with every parameter of `sql` bound in order.
pub fn prepare(sql: &SqlResult) -> MySqlQuery<'_> {
    sql.params
        .iter()
        .fold(sqlx::query(&sql.query), |q, p| bind_param_query(q, p))
}

pub fn bind_param_query<'q>(q: MySqlQuery<'q>, v: &'q Value) -> MySqlQuery<'q> {
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(u) = n.as_u64() {
                q.bind(u)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        // No column stores structured JSON; keep the text form
        Value::Array(_) | Value::Object(_) => q.bind(v.to_string()),
    }
}
