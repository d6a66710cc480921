//! FILENAME: core/engine/src/value.rs
//! PURPOSE: Defines the scalar values a record field can hold.
//! CONTEXT: Every record in a collection stores one `Value` per schema field.
//! Values know how to render themselves as text (for free-text search and
//! export) and how to order themselves against each other (for sorting).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Date,
}

impl FieldType {
    /// Rank used to order values of different types against each other.
    fn rank(self) -> u8 {
        match self {
            FieldType::Number => 0,
            FieldType::Text => 1,
            FieldType::Boolean => 2,
            FieldType::Date => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single scalar stored in a record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Value {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Text(_) => FieldType::Text,
            Value::Number(_) => FieldType::Number,
            Value::Boolean(_) => FieldType::Boolean,
            Value::Date(_) => FieldType::Date,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as text, the form used by free-text search,
    /// category keys and exports.
    pub fn display_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => {
                // -0.0 renders as "0"
                let n = if *n == 0.0 { 0.0 } else { *n };
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            Value::Boolean(b) => b.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Natural ordering: lexicographic text, numeric numbers, chronological
    /// dates, `false < true`. Mixed types fall back to a fixed type rank so
    /// the ordering is total.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (a, b) => a.field_type().rank().cmp(&b.field_type().rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_decimals() {
        assert_eq!(Value::Number(50000.0).display_text(), "50000");
        assert_eq!(Value::Number(-3.0).display_text(), "-3");
        assert_eq!(Value::Number(2.5).display_text(), "2.5");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(Value::Number(-0.0).display_text(), "0");
        assert_eq!(Value::Number(0.0).display_text(), "0");
    }

    #[test]
    fn dates_render_iso() {
        let d = NaiveDate::from_ymd_opt(2023, 4, 9).unwrap();
        assert_eq!(Value::Date(d).display_text(), "2023-04-09");
    }

    #[test]
    fn booleans_render_lowercase() {
        assert_eq!(Value::Boolean(true).display_text(), "true");
    }

    #[test]
    fn numbers_compare_numerically_not_lexically() {
        let a = Value::Number(9.0);
        let b = Value::Number(10.0);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(Value::text("9").compare(&Value::text("10")), Ordering::Greater);
    }

    #[test]
    fn dates_compare_chronologically() {
        let early = Value::Date(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
        let late = Value::Date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(early.compare(&late), Ordering::Less);
    }

    #[test]
    fn mixed_types_use_type_rank() {
        assert_eq!(Value::Number(1.0).compare(&Value::text("a")), Ordering::Less);
        assert_eq!(Value::Boolean(false).compare(&Value::text("a")), Ordering::Greater);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&Value::Number(1.5)).unwrap();
        assert_eq!(json, r#"{"type":"number","value":1.5}"#);
    }
}
