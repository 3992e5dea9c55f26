use serde_json::{Map, Value};
use std::collections::HashSet;

/// Field change information for diff tracking
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: String,
    pub old_value: Option<Value>,
    pub new_value: Value,
}

/// Errors that can occur while turning request bodies into records
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Field '{0}' is managed by the server")]
    ServerManagedField(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
    #[error("{0}")]
    InvalidShape(String),
}

/// Which fields a request body may carry.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules<'a> {
    pub writable: &'a [&'a str],
    pub server_managed: &'a [&'a str],
}

/// A row as a JSON map, tracking which fields a request changed.
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Stored state (None for CREATE operations)
    original: Option<Map<String, Value>>,
    /// Current field values
    fields: Map<String, Value>,
    /// Fields that have been set since original
    modified_fields: HashSet<String>,
}

impl Record {
    /// Create record from API input JSON, rejecting fields the caller may not set
    pub fn from_json(json: Value, rules: FieldRules<'_>) -> Result<Self, RecordError> {
        let map = match json {
            Value::Object(map) => map,
            _ => return Err(RecordError::InvalidJson("Expected JSON object".to_string())),
        };

        for key in map.keys() {
            if rules.server_managed.contains(&key.as_str()) {
                return Err(RecordError::ServerManagedField(key.clone()));
            }
            if !rules.writable.contains(&key.as_str()) {
                return Err(RecordError::UnknownField(key.clone()));
            }
        }

        Ok(Self {
            original: None,
            fields: map,
            modified_fields: HashSet::new(),
        })
    }

    /// Create record from stored row data
    pub fn from_row(data: Map<String, Value>) -> Self {
        Self {
            original: Some(data.clone()),
            fields: data,
            modified_fields: HashSet::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set field value with automatic change tracking
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if self.original.is_some() {
            self.modified_fields.insert(key.clone());
        }
        self.fields.insert(key, value.into());
        self
    }

    /// Apply a partial update: only the provided fields are touched
    pub fn apply_changes(&mut self, changes: Map<String, Value>) -> &mut Self {
        for (key, value) in changes {
            self.set(key, value);
        }
        self
    }

    /// Check if a specific field differs from the stored value
    pub fn changed(&self, key: &str) -> bool {
        match (&self.original, self.fields.get(key)) {
            (Some(original), Some(current)) => original.get(key) != Some(current),
            (Some(original), None) => original.contains_key(key),
            (None, Some(_)) => true,
            (None, None) => false,
        }
    }

    /// Fields whose value actually differs from the stored row, sorted by name
    pub fn changes(&self) -> Vec<FieldChange> {
        let mut changes: Vec<FieldChange> = match &self.original {
            Some(original) => self
                .modified_fields
                .iter()
                .filter(|field| self.changed(field))
                .filter_map(|field| {
                    self.fields.get(field).map(|new_value| FieldChange {
                        field: field.clone(),
                        old_value: original.get(field).cloned(),
                        new_value: new_value.clone(),
                    })
                })
                .collect(),
            None => self
                .fields
                .iter()
                .map(|(field, value)| FieldChange {
                    field: field.clone(),
                    old_value: None,
                    new_value: value.clone(),
                })
                .collect(),
        };
        changes.sort_by(|a, b| a.field.cmp(&b.field));
        changes
    }

    pub fn has_changes(&self) -> bool {
        self.original.is_none() || !self.changes().is_empty()
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: FieldRules<'static> = FieldRules {
        writable: &["documento", "correo", "telefono"],
        server_managed: &["docconvfondo", "fecha_actualizacion", "responsable_actualizacion"],
    };

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn rejects_server_managed_and_unknown_fields() {
        let err = Record::from_json(json!({"docconvfondo": "x"}), RULES).unwrap_err();
        assert!(matches!(err, RecordError::ServerManagedField(f) if f == "docconvfondo"));

        let err = Record::from_json(json!({"apodo": "x"}), RULES).unwrap_err();
        assert!(matches!(err, RecordError::UnknownField(f) if f == "apodo"));

        let err = Record::from_json(json!([1, 2]), RULES).unwrap_err();
        assert!(matches!(err, RecordError::InvalidJson(_)));
    }

    #[test]
    fn partial_update_leaves_other_fields_alone() {
        let mut record = Record::from_row(object(json!({
            "documento": "1001",
            "correo": "old@x.co",
            "telefono": "555"
        })));
        let patch = Record::from_json(json!({"correo": "new@x.co", "telefono": "555"}), RULES).unwrap();
        record.apply_changes(patch.into_map());

        let changes = record.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "correo");
        assert_eq!(changes[0].old_value, Some(json!("old@x.co")));
        assert_eq!(changes[0].new_value, json!("new@x.co"));
        assert_eq!(record.get("documento"), Some(&json!("1001")));
        assert_eq!(record.get("telefono"), Some(&json!("555")));
    }

    #[test]
    fn setting_null_is_a_change() {
        let mut record = Record::from_row(object(json!({"correo": "a@x.co"})));
        record.set("correo", Value::Null);
        assert!(record.changed("correo"));
        assert!(record.has_changes());
    }

    #[test]
    fn new_records_report_every_field() {
        let record = Record::from_json(json!({"documento": "1", "correo": null}), RULES).unwrap();
        let fields: Vec<String> = record.changes().into_iter().map(|c| c.field).collect();
        assert_eq!(fields, vec!["correo", "documento"]);
    }
}
