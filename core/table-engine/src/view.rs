//! FILENAME: core/table-engine/src/view.rs
//! Renderable metadata about the current view, for the presentation layer.

use engine::FieldType;
use serde::{Deserialize, Serialize};

/// "Showing `visible` of `total`" counters plus the active query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewInfo {
    pub visible: usize,
    pub total: usize,
    pub filter: String,
}

impl ViewInfo {
    pub fn is_filtered(&self) -> bool {
        !self.filter.is_empty() || self.visible != self.total
    }
}

/// Describes one column header: the built-in `id` or a schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub visible: bool,
    /// Direction arrow when this column carries the active sort.
    pub sorted: Option<crate::definition::SortDirection>,
}
