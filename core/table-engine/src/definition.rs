//! FILENAME: core/table-engine/src/definition.rs
//! Table view definition - the serializable view-state vocabulary.
//!
//! These types DESCRIBE how the collection is looked at (sort, filter,
//! selection) and what a batch action does. They are plain data: the
//! engine validates and resolves them against its schema.

use engine::Value;
use serde::{Deserialize, Serialize};

// ============================================================================
// SORTING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// Active sort. `field == None` means insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: SortDirection,
}

// ============================================================================
// FILTERING
// ============================================================================

/// A structured predicate on one field. Multiple field filters combine with AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldFilter {
    /// Field value equals `value`.
    Equals { field: String, value: Value },
    /// Field value lies within `[min, max]`. Either bound may be open.
    Between {
        field: String,
        min: Option<Value>,
        max: Option<Value>,
    },
}

impl FieldFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        FieldFilter::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn between(field: impl Into<String>, min: Option<Value>, max: Option<Value>) -> Self {
        FieldFilter::Between {
            field: field.into(),
            min,
            max,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FieldFilter::Equals { field, .. } | FieldFilter::Between { field, .. } => field,
        }
    }
}

/// Full filter state: free-text query plus structured field filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring matched against every field. Empty means no filtering.
    pub query: String,
    pub field_filters: Vec<FieldFilter>,
}

// ============================================================================
// SELECTION & BATCH ACTIONS
// ============================================================================

/// Tri-state of the selection relative to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionState {
    /// Nothing selected.
    None,
    /// Something selected, but not exactly the visible rows.
    Partial,
    /// The selection equals the identifiers of the current view.
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BatchAction {
    Delete,
    SetField { field: String, value: Value },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    /// Number of records deleted or updated. Zero when nothing was selected.
    pub affected: usize,
}
