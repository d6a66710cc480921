//! FILENAME: core/engine/src/error.rs

use crate::record::RecordId;
use crate::value::FieldType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Type mismatch on field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: FieldType,
    },

    #[error("Field '{0}' requires a finite number")]
    NonFiniteNumber(String),

    #[error("Unknown record: {0}")]
    UnknownRecord(RecordId),

    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),

    #[error("Expected {expected} values, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}
