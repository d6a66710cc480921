//! FILENAME: core/engine/src/record.rs
//! PURPOSE: A single row of uniform-schema data with a stable identifier.

use crate::error::TableError;
use crate::schema::{FieldRef, Schema};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable record identifier. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// One value per schema field, in schema order.
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(id: RecordId, values: Vec<Value>) -> Self {
        Record { id, values }
    }

    /// Reads a resolved field. The identifier reads as a number.
    pub fn value(&self, field: FieldRef) -> Value {
        match field {
            FieldRef::Id => Value::Number(self.id.0 as f64),
            FieldRef::Column(idx) => self.values[idx].clone(),
        }
    }

    /// Borrowing variant of `value` for user columns; `None` for the identifier.
    pub fn value_ref(&self, field: FieldRef) -> Option<&Value> {
        match field {
            FieldRef::Id => None,
            FieldRef::Column(idx) => self.values.get(idx),
        }
    }

    /// Text form of every field, identifier first.
    pub fn texts(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.id.0.to_string()).chain(self.values.iter().map(Value::display_text))
    }
}

/// Reads a field by name.
pub fn get_field(schema: &Schema, record: &Record, name: &str) -> Result<Value, TableError> {
    let field = schema.resolve(name)?;
    Ok(record.value(field))
}
