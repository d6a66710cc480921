//! FILENAME: core/persistence/src/lib.rs
//! Table Export/Import Module
//!
//! Renders the current table view to CSV, JSON and XLSX, and reads rows back
//! from JSON and XLSX for the upload flows. The engine itself never touches
//! files; this crate works on an `ExportTable` snapshot of the view.

mod csv_writer;
mod error;
mod json;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_writer::to_csv;
pub use error::PersistenceError;
pub use json::{load_json_rows, to_json};
pub use xlsx_reader::load_xlsx_rows;
pub use xlsx_writer::save_xlsx;

use chrono::{Duration, NaiveDate};
use engine::{FieldType, Value};
use serde::{Deserialize, Serialize};
use table_engine::TableEngine;

// ============================================================================
// EXPORT TABLE
// ============================================================================

/// One exported column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportColumn {
    /// Field name, used as the JSON key.
    pub name: String,
    /// Header label, used as the CSV/XLSX header.
    pub label: String,
    pub field_type: FieldType,
}

/// A snapshot of the current view restricted to visible columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTable {
    pub columns: Vec<ExportColumn>,
    pub rows: Vec<Vec<Value>>,
}

impl ExportTable {
    pub fn from_engine(engine: &TableEngine) -> Self {
        let schema = engine.schema();
        let fields = engine.visible_columns();

        let columns = fields
            .iter()
            .map(|&f| ExportColumn {
                name: schema.field_name(f).to_string(),
                label: schema.field_label(f).to_string(),
                field_type: schema.field_type(f),
            })
            .collect();

        let rows = engine
            .view()
            .into_iter()
            .map(|record| fields.iter().map(|&f| record.value(f)).collect())
            .collect();

        ExportTable { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// ============================================================================
// EXCEL DATE SERIALS
// ============================================================================

fn excel_epoch() -> NaiveDate {
    // Serial 0 is 1899-12-30 once the 1900 leap-year bug is accounted for.
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

pub(crate) fn date_to_serial(date: NaiveDate) -> f64 {
    (date - excel_epoch()).num_days() as f64
}

pub(crate) fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    excel_epoch().checked_add_signed(Duration::days(serial.floor() as i64))
}

pub(crate) fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
