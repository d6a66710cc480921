//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions for communication with the presentation layer.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use serde::{Deserialize, Serialize};
use table_engine::{CategoryTotal, ColumnInfo, SelectionState, Summary, ViewInfo};

/// One rendered row. `cells` holds the text of each visible column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    pub id: u64,
    pub cells: Vec<String>,
    pub selected: bool,
}

/// Everything the table needs to re-render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewData {
    /// All columns, including hidden ones (see `ColumnInfo::visible`).
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<RowData>,
    pub selection: SelectionState,
    pub selected_count: usize,
    pub info: ViewInfo,
}

/// Result of a command with no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    pub fn ok() -> Self {
        CommandResult { success: true, error: None }
    }

    pub fn err(error: impl ToString) -> Self {
        CommandResult {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Result of a batch action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub success: bool,
    pub affected: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of adding or importing records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResult {
    pub success: bool,
    /// Identifiers assigned to the new records.
    #[serde(default)]
    pub ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Category totals for the bar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationData {
    pub success: bool,
    pub totals: Vec<CategoryTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Distinct values of a field, as text, for filter dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctValuesResult {
    pub success: bool,
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    /// Rendered text for CSV/JSON; `None` for file exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub row_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
