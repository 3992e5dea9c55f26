//! Turning request bodies into column values for the generic repository.
//!
//! Both flows are pure: they validate a JSON body against an entity's
//! description and produce the exact values to write, leaving I/O to the
//! handlers.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::database::{Entity, Record, RecordError};

/// Validate a create body and return the column values to insert.
///
/// The body may only carry writable columns. It must deserialize into the
/// entity's create shape, which enforces required fields and types. Fields
/// the client omitted are left out so database defaults apply; the
/// responsible column (if any) is stamped with `responsible`.
pub fn prepare_create<T: Entity>(body: Value, responsible: &str) -> Result<Map<String, Value>, RecordError> {
    let record = Record::from_json(body, T::field_rules())?;

    let typed: T::Create = serde_json::from_value(record.to_json())
        .map_err(|e| RecordError::InvalidShape(e.to_string()))?;
    let normalized = to_map(&typed)?;

    let mut values = Map::new();
    for (column, value) in normalized {
        if value.is_null() && record.get(&column).is_none() {
            continue;
        }
        values.insert(column, value);
    }

    if let Some(column) = T::RESPONSIBLE {
        values.insert(column.to_string(), Value::String(responsible.to_string()));
    }

    Ok(values)
}

/// Validate a partial update against the stored row and return the
/// `(column, value)` pairs to write.
///
/// Only fields whose normalized value actually changes are returned, in
/// column-name order. The key can never change. The merged row must still
/// deserialize as the entity, so a patch cannot null out a required column
/// or send a value of the wrong type. The responsible column is restamped
/// only when something changed; an empty result means there is nothing to
/// write.
pub fn prepare_update<T: Entity>(
    current: &T,
    body: Value,
    responsible: &str,
) -> Result<Vec<(String, Value)>, RecordError> {
    if let Value::Object(map) = &body {
        if map.contains_key(T::KEY) {
            return Err(RecordError::ServerManagedField(T::KEY.to_string()));
        }
    }
    let patch = Record::from_json(body, T::field_rules())?.into_map();

    let before = to_map(current)?;
    let mut record = Record::from_row(before.clone());
    record.apply_changes(patch);

    let typed: T = serde_json::from_value(record.to_json())
        .map_err(|e| RecordError::InvalidShape(e.to_string()))?;
    let normalized = to_map(&typed)?;

    let mut changes: Vec<(String, Value)> = record
        .changes()
        .into_iter()
        .filter_map(|change| {
            let value = normalized.get(&change.field).cloned().unwrap_or(change.new_value);
            // `1500` and `1500.00` are the same stored value
            if before.get(&change.field) == Some(&value) {
                None
            } else {
                Some((change.field, value))
            }
        })
        .collect();

    if changes.is_empty() {
        return Ok(changes);
    }
    if let Some(column) = T::RESPONSIBLE {
        changes.push((column.to_string(), Value::String(responsible.to_string())));
    }

    Ok(changes)
}

fn to_map<S: Serialize>(value: &S) -> Result<Map<String, Value>, RecordError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(RecordError::InvalidShape("Expected JSON object".to_string())),
        Err(e) => Err(RecordError::InvalidShape(e.to_string())),
    }
}
