//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the record value model.
//! CONTEXT: Re-exports public types used by the table engine and its collaborators.

pub mod error;
pub mod record;
pub mod schema;
pub mod value;

// Re-export commonly used types at the crate root
pub use error::TableError;
pub use record::{get_field, Record, RecordId};
pub use schema::{FieldDescriptor, FieldRef, Schema, ID_FIELD};
pub use value::{FieldType, Value};
