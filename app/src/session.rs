//! FILENAME: app/src/session.rs
// PURPOSE: The top-level view controller. One session owns one table engine.
// CONTEXT: Commands mirror engine operations and return serializable results
//          so the presentation layer can re-render from them directly.

use std::path::Path;

use engine::{RecordId, TableError, Value};
use persistence::{load_json_rows, load_xlsx_rows, save_xlsx, to_csv, to_json, ExportTable, PersistenceError};
use table_engine::{BatchAction, FieldFilter, TableEngine};

use crate::api_types::{
    AggregationData, BatchResult, CommandResult, DistinctValuesResult, ExportResult, RecordResult,
    RowData, SummaryData, ViewData,
};
use crate::fixtures;
use crate::{log_debug, log_enter, log_error, log_exit, log_warn};

pub struct Session {
    engine: TableEngine,
}

impl Session {
    pub fn new(engine: TableEngine) -> Self {
        Session { engine }
    }

    pub fn with_sample_users(count: usize) -> Result<Self, TableError> {
        Ok(Session::new(fixtures::sample_users(count)?))
    }

    pub fn with_sample_sales(count: usize) -> Result<Self, TableError> {
        Ok(Session::new(fixtures::sample_sales(count)?))
    }

    pub fn engine(&self) -> &TableEngine {
        &self.engine
    }

    // ========================================================================
    // VIEW
    // ========================================================================

    pub fn get_view(&self) -> ViewData {
        let visible = self.engine.visible_columns();
        let rows = self
            .engine
            .view()
            .into_iter()
            .map(|record| RowData {
                id: record.id.0,
                cells: visible.iter().map(|&f| record.value(f).display_text()).collect(),
                selected: self.engine.is_selected(record.id),
            })
            .collect();

        ViewData {
            columns: self.engine.columns(),
            rows,
            selection: self.engine.selection_state(),
            selected_count: self.engine.selection_len(),
            info: self.engine.view_info(),
        }
    }

    pub fn set_filter(&mut self, query: &str) -> ViewData {
        log_debug!("CMD", "set_filter {:?}", query);
        self.engine.set_filter(query);
        self.get_view()
    }

    pub fn add_field_filter(&mut self, filter: FieldFilter) -> CommandResult {
        match self.engine.add_field_filter(filter) {
            Ok(()) => CommandResult::ok(),
            Err(e) => {
                log_warn!("CMD", "add_field_filter rejected: {}", e);
                CommandResult::err(e)
            }
        }
    }

    pub fn clear_field_filters(&mut self) -> CommandResult {
        self.engine.clear_field_filters();
        CommandResult::ok()
    }

    pub fn sort_by(&mut self, field: &str) -> CommandResult {
        log_enter!("CMD", "sort_by", "{}", field);
        match self.engine.set_sort(field) {
            Ok(direction) => {
                log_exit!("CMD", "sort_by", "{:?}", direction);
                CommandResult::ok()
            }
            Err(e) => {
                log_warn!("CMD", "sort_by rejected: {}", e);
                CommandResult::err(e)
            }
        }
    }

    pub fn reset_sort(&mut self) -> CommandResult {
        self.engine.reset_sort();
        CommandResult::ok()
    }

    pub fn toggle_column(&mut self, field: &str) -> CommandResult {
        match self.engine.toggle_column(field) {
            Ok(_) => CommandResult::ok(),
            Err(e) => CommandResult::err(e),
        }
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    pub fn toggle_select(&mut self, id: u64) -> CommandResult {
        match self.engine.toggle_select(RecordId(id)) {
            Ok(_) => CommandResult::ok(),
            Err(e) => CommandResult::err(e),
        }
    }

    pub fn select_all(&mut self) -> CommandResult {
        self.engine.select_all();
        CommandResult::ok()
    }

    pub fn clear_selection(&mut self) -> CommandResult {
        self.engine.clear_selection();
        CommandResult::ok()
    }

    // ========================================================================
    // BATCH
    // ========================================================================

    fn batch(&mut self, action: BatchAction) -> BatchResult {
        match self.engine.batch_apply(action) {
            Ok(outcome) => BatchResult {
                success: true,
                affected: outcome.affected,
                error: None,
            },
            Err(e) => {
                log_warn!("CMD", "batch rejected: {}", e);
                BatchResult {
                    success: false,
                    affected: 0,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn batch_delete(&mut self) -> BatchResult {
        log_enter!("CMD", "batch_delete", "{} selected", self.engine.selection_len());
        self.batch(BatchAction::Delete)
    }

    pub fn batch_set_field(&mut self, field: &str, value: Value) -> BatchResult {
        log_enter!("CMD", "batch_set_field", "{} = {}", field, value);
        self.batch(BatchAction::SetField {
            field: field.to_string(),
            value,
        })
    }

    // ========================================================================
    // COLLECTION MAINTENANCE
    // ========================================================================

    pub fn add_record(&mut self, values: Vec<Value>) -> RecordResult {
        match self.engine.add_record(values) {
            Ok(id) => RecordResult {
                success: true,
                ids: vec![id.0],
                error: None,
            },
            Err(e) => RecordResult {
                success: false,
                ids: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    pub fn remove_record(&mut self, id: u64) -> CommandResult {
        match self.engine.remove_record(RecordId(id)) {
            Ok(_) => CommandResult::ok(),
            Err(e) => CommandResult::err(e),
        }
    }

    pub fn update_record(&mut self, id: u64, field: &str, value: Value) -> CommandResult {
        match self.engine.update_record(RecordId(id), field, value) {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::err(e),
        }
    }

    pub fn move_record(&mut self, id: u64, to_index: usize) -> CommandResult {
        match self.engine.move_record(RecordId(id), to_index) {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::err(e),
        }
    }

    // ========================================================================
    // AGGREGATION
    // ========================================================================

    pub fn aggregate(&self, category_field: &str, value_field: &str) -> AggregationData {
        match self.engine.aggregate_by(category_field, value_field) {
            Ok(totals) => AggregationData {
                success: true,
                totals: totals.entries().to_vec(),
                error: None,
            },
            Err(e) => AggregationData {
                success: false,
                totals: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    pub fn summarize(&self, value_field: &str) -> SummaryData {
        match self.engine.summarize(value_field) {
            Ok(summary) => SummaryData {
                success: true,
                summary: Some(summary),
                error: None,
            },
            Err(e) => SummaryData {
                success: false,
                summary: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn distinct_values(&self, field: &str) -> DistinctValuesResult {
        match self.engine.distinct_values(field) {
            Ok(values) => DistinctValuesResult {
                success: true,
                values: values.iter().map(Value::display_text).collect(),
                error: None,
            },
            Err(e) => DistinctValuesResult {
                success: false,
                values: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    // ========================================================================
    // EXPORT / IMPORT
    // ========================================================================

    pub fn export_csv(&self) -> ExportResult {
        let table = ExportTable::from_engine(&self.engine);
        ExportResult {
            success: true,
            row_count: table.row_count(),
            content: Some(to_csv(&table)),
            error: None,
        }
    }

    pub fn export_json(&self) -> ExportResult {
        let table = ExportTable::from_engine(&self.engine);
        match to_json(&table) {
            Ok(json) => ExportResult {
                success: true,
                row_count: table.row_count(),
                content: Some(json),
                error: None,
            },
            Err(e) => export_error(e),
        }
    }

    pub fn export_xlsx(&self, path: &Path) -> ExportResult {
        log_enter!("CMD", "export_xlsx", "{:?}", path);
        let table = ExportTable::from_engine(&self.engine);
        match save_xlsx(&table, path) {
            Ok(()) => ExportResult {
                success: true,
                row_count: table.row_count(),
                content: None,
                error: None,
            },
            Err(e) => export_error(e),
        }
    }

    pub fn import_json(&mut self, json: &str) -> RecordResult {
        let rows = load_json_rows(self.engine.schema(), json);
        self.import_rows(rows)
    }

    pub fn import_xlsx(&mut self, path: &Path) -> RecordResult {
        let rows = load_xlsx_rows(self.engine.schema(), path);
        self.import_rows(rows)
    }

    /// Adds all rows or none of them.
    fn import_rows(&mut self, rows: Result<Vec<Vec<Value>>, PersistenceError>) -> RecordResult {
        let result = rows.and_then(|rows| {
            for values in &rows {
                self.engine.schema().check_row(values)?;
            }
            let mut ids = Vec::with_capacity(rows.len());
            for values in rows {
                ids.push(self.engine.add_record(values)?.0);
            }
            Ok(ids)
        });

        match result {
            Ok(ids) => {
                log_debug!("CMD", "imported {} records", ids.len());
                RecordResult {
                    success: true,
                    ids,
                    error: None,
                }
            }
            Err(e) => {
                log_error!("CMD", "import failed: {}", e);
                RecordResult {
                    success: false,
                    ids: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

fn export_error(e: PersistenceError) -> ExportResult {
    log_error!("CMD", "export failed: {}", e);
    ExportResult {
        success: false,
        content: None,
        row_count: 0,
        error: Some(e.to_string()),
    }
}
