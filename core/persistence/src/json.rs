//! FILENAME: core/persistence/src/json.rs

use engine::{FieldType, Schema, Value, ID_FIELD};
use serde_json::{Map, Number, Value as JsonValue};

use crate::{parse_iso_date, ExportTable, PersistenceError};

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Number(n) => {
            // Whole numbers serialize as integers (50000, not 50000.0)
            if n.fract() == 0.0 && n.abs() < 1e15 {
                JsonValue::Number(Number::from(*n as i64))
            } else {
                Number::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number)
            }
        }
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Date(_) => JsonValue::String(value.display_text()),
    }
}

/// Renders the table as a pretty-printed array of objects keyed by field name.
pub fn to_json(table: &ExportTable) -> Result<String, PersistenceError> {
    let rows: Vec<JsonValue> = table
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, JsonValue> = table
                .columns
                .iter()
                .zip(row)
                .map(|(col, value)| (col.name.clone(), value_to_json(value)))
                .collect();
            JsonValue::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

fn json_to_value(field: &str, field_type: FieldType, json: &JsonValue) -> Result<Value, PersistenceError> {
    let converted = match field_type {
        FieldType::Text => json.as_str().map(Value::text),
        FieldType::Number => json.as_f64().map(Value::Number),
        FieldType::Boolean => json.as_bool().map(Value::Boolean),
        FieldType::Date => json.as_str().and_then(parse_iso_date).map(Value::Date),
    };
    converted.ok_or_else(|| {
        PersistenceError::InvalidFormat(format!(
            "field '{}' expects {}, found {}",
            field, field_type, json
        ))
    })
}

/// Parses an array of objects into positional rows for `TableEngine::add_record`.
/// An `id` key is ignored; the engine assigns identifiers.
pub fn load_json_rows(schema: &Schema, json: &str) -> Result<Vec<Vec<Value>>, PersistenceError> {
    let parsed: JsonValue = serde_json::from_str(json)?;
    let items = parsed
        .as_array()
        .ok_or_else(|| PersistenceError::InvalidFormat("expected a JSON array".to_string()))?;

    let mut rows = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or_else(|| {
            PersistenceError::InvalidFormat(format!("row {} is not an object", idx))
        })?;

        let mut values = Vec::with_capacity(schema.len());
        for field in schema.fields() {
            let json = object.get(&field.name).ok_or_else(|| {
                PersistenceError::InvalidFormat(format!("row {} is missing '{}'", idx, field.name))
            })?;
            values.push(json_to_value(&field.name, field.field_type, json)?);
        }

        for key in object.keys() {
            if key != ID_FIELD && schema.resolve(key).is_err() {
                return Err(PersistenceError::InvalidFormat(format!(
                    "row {} has unknown field '{}'",
                    idx, key
                )));
            }
        }

        rows.push(values);
    }
    Ok(rows)
}
