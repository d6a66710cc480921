//! FILENAME: core/table-engine/src/lib.rs
//! Interactive table subsystem.
//!
//! This crate provides the tabular data engine as a standalone module. It
//! depends on `engine` only for shared types (Value, Schema, Record).
//!
//! Layers:
//! - `definition`: Serializable view-state vocabulary (sort, filter, batch actions)
//! - `filter` / `sort`: Derivation of the view from the collection
//! - `selection`: Identifier set for batch actions
//! - `aggregate`: Category sums and summary statistics
//! - `view`: Renderable metadata for the frontend
//! - `engine`: The state owner tying it all together

pub mod aggregate;
pub mod definition;
mod filter;
pub mod selection;
mod sort;
pub mod view;
pub mod engine;

pub use aggregate::{CategoryTotal, CategoryTotals, Summary};
pub use definition::*;
pub use crate::engine::TableEngine;
pub use selection::SelectionSet;
pub use view::{ColumnInfo, ViewInfo};
