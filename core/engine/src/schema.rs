//! FILENAME: core/engine/src/schema.rs
//! PURPOSE: The ordered, typed field list shared by every record of a collection.
//! CONTEXT: Field names are resolved against the schema once, turning a string
//! lookup into a `FieldRef`. An unknown name is a `TableError::UnknownField`
//! instead of a silently missing value.

use crate::error::TableError;
use crate::value::{FieldType, Value};
use serde::{Deserialize, Serialize};

/// Name of the built-in identifier field.
pub const ID_FIELD: &str = "id";

/// Describes one user-defined field (column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Key used to address the field (e.g., "salary").
    pub name: String,
    /// Display label (e.g., "Salary"). Defaults to the name.
    pub label: String,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        FieldDescriptor {
            label: name.clone(),
            name,
            field_type,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A resolved reference to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRef {
    /// The built-in record identifier.
    Id,
    /// Index into `Schema::fields` and `Record::values`.
    Column(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, TableError> {
        for (i, field) in fields.iter().enumerate() {
            if field.name == ID_FIELD {
                return Err(TableError::InvalidSchema(format!(
                    "'{}' is reserved for the record identifier",
                    ID_FIELD
                )));
            }
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(TableError::InvalidSchema(format!(
                    "duplicate field '{}'",
                    field.name
                )));
            }
        }
        Ok(Schema { fields })
    }

    /// User-defined fields in declaration order (excludes `id`).
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All addressable field names, `id` first.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ID_FIELD).chain(self.fields.iter().map(|f| f.name.as_str()))
    }

    pub fn resolve(&self, name: &str) -> Result<FieldRef, TableError> {
        if name == ID_FIELD {
            return Ok(FieldRef::Id);
        }
        self.fields
            .iter()
            .position(|f| f.name == name)
            .map(FieldRef::Column)
            .ok_or_else(|| TableError::UnknownField(name.to_string()))
    }

    pub fn field_type(&self, field: FieldRef) -> FieldType {
        match field {
            FieldRef::Id => FieldType::Number,
            FieldRef::Column(idx) => self.fields[idx].field_type,
        }
    }

    pub fn field_name(&self, field: FieldRef) -> &str {
        match field {
            FieldRef::Id => ID_FIELD,
            FieldRef::Column(idx) => &self.fields[idx].name,
        }
    }

    pub fn field_label(&self, field: FieldRef) -> &str {
        match field {
            FieldRef::Id => "ID",
            FieldRef::Column(idx) => &self.fields[idx].label,
        }
    }

    /// Checks that `value` fits the declared type of `field`. Numbers must be
    /// finite: NaN and infinities are rejected.
    pub fn check_type(&self, field: FieldRef, value: &Value) -> Result<(), TableError> {
        let expected = self.field_type(field);
        let found = value.field_type();
        if expected != found {
            return Err(TableError::TypeMismatch {
                field: self.field_name(field).to_string(),
                expected,
                found,
            });
        }
        match value {
            Value::Number(n) if !n.is_finite() => Err(TableError::NonFiniteNumber(
                self.field_name(field).to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Validates a full positional row of values.
    pub fn check_row(&self, values: &[Value]) -> Result<(), TableError> {
        if values.len() != self.fields.len() {
            return Err(TableError::ArityMismatch {
                expected: self.fields.len(),
                found: values.len(),
            });
        }
        for (idx, value) in values.iter().enumerate() {
            self.check_type(FieldRef::Column(idx), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees() -> Schema {
        Schema::new(vec![
            FieldDescriptor::new("dept", FieldType::Text).with_label("Department"),
            FieldDescriptor::new("salary", FieldType::Number),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_id_and_columns() {
        let schema = employees();
        assert_eq!(schema.resolve("id"), Ok(FieldRef::Id));
        assert_eq!(schema.resolve("salary"), Ok(FieldRef::Column(1)));
        assert_eq!(schema.field_label(FieldRef::Column(0)), "Department");
    }

    #[test]
    fn unknown_field_is_an_error() {
        let schema = employees();
        assert_eq!(
            schema.resolve("bonus"),
            Err(TableError::UnknownField("bonus".to_string()))
        );
    }

    #[test]
    fn rejects_reserved_and_duplicate_names() {
        let reserved = Schema::new(vec![FieldDescriptor::new("id", FieldType::Number)]);
        assert!(matches!(reserved, Err(TableError::InvalidSchema(_))));

        let duplicate = Schema::new(vec![
            FieldDescriptor::new("a", FieldType::Text),
            FieldDescriptor::new("a", FieldType::Number),
        ]);
        assert!(matches!(duplicate, Err(TableError::InvalidSchema(_))));
    }

    #[test]
    fn check_row_validates_arity_and_types() {
        let schema = employees();
        assert!(schema.check_row(&[Value::text("Eng"), Value::Number(1.0)]).is_ok());
        assert_eq!(
            schema.check_row(&[Value::text("Eng")]),
            Err(TableError::ArityMismatch { expected: 2, found: 1 })
        );
        assert!(matches!(
            schema.check_row(&[Value::text("Eng"), Value::text("lots")]),
            Err(TableError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let schema = employees();
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                schema.check_row(&[Value::text("Eng"), Value::Number(n)]),
                Err(TableError::NonFiniteNumber("salary".to_string()))
            );
        }
        assert!(schema.check_type(FieldRef::Column(1), &Value::Number(-0.0)).is_ok());
    }

    #[test]
    fn field_names_start_with_id() {
        let schema = employees();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["id", "dept", "salary"]);
    }
}
