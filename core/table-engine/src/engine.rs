//! FILENAME: core/table-engine/src/engine.rs
//! Table Engine - owns the record collection and its view state.
//!
//! The engine holds:
//! - the collection (records in insertion order, identifiers never reused)
//! - the selection set
//! - the sort key and the filter (query plus field filters)
//! - column visibility
//!
//! `view()` is derived on demand and never mutates state:
//! 1. Filter: keep records matching the query (any field, case-insensitive)
//!    and every field filter
//! 2. Sort: stable sort by the active field, reversed for descending
//!
//! Every mutating operation validates its input before touching state, so a
//! failed call leaves the engine exactly as it was.

use engine::{FieldRef, Record, RecordId, Schema, TableError, Value};
use rustc_hash::FxHashSet;

use crate::aggregate::{self, CategoryTotals, Summary};
use crate::definition::{
    BatchAction, BatchOutcome, FieldFilter, FilterSpec, SelectionState, SortDirection, SortSpec,
};
use crate::filter::{filter_records, ResolvedFilter};
use crate::selection::SelectionSet;
use crate::sort::sort_records;
use crate::view::{ColumnInfo, ViewInfo};

#[derive(Debug, Clone)]
pub struct TableEngine {
    schema: Schema,
    records: Vec<Record>,
    next_id: u64,
    selection: SelectionSet,
    sort: Option<(FieldRef, SortDirection)>,
    query: String,
    /// Lowercased `query`, computed once per `set_filter`.
    needle: String,
    field_filters: Vec<ResolvedFilter>,
    hidden_columns: FxHashSet<FieldRef>,
}

impl TableEngine {
    /// Creates an empty engine over `schema`.
    pub fn new(schema: Schema) -> Self {
        TableEngine {
            schema,
            records: Vec::new(),
            next_id: 1,
            selection: SelectionSet::new(),
            sort: None,
            query: String::new(),
            needle: String::new(),
            field_filters: Vec::new(),
            hidden_columns: FxHashSet::default(),
        }
    }

    /// Creates an engine seeded with `rows`. Fails on the first invalid row.
    pub fn with_rows(schema: Schema, rows: Vec<Vec<Value>>) -> Result<Self, TableError> {
        let mut engine = TableEngine::new(schema);
        for values in &rows {
            engine.schema.check_row(values)?;
        }
        for values in rows {
            engine.push_record(values);
        }
        log::debug!("seeded table with {} records", engine.records.len());
        Ok(engine)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The full collection in insertion (or manually reordered) order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    fn position(&self, id: RecordId) -> Result<usize, TableError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(TableError::UnknownRecord(id))
    }

    fn push_record(&mut self, values: Vec<Value>) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.push(Record::new(id, values));
        id
    }

    // ========================================================================
    // COLLECTION MAINTENANCE
    // ========================================================================

    /// Appends a record and returns its freshly assigned identifier.
    pub fn add_record(&mut self, values: Vec<Value>) -> Result<RecordId, TableError> {
        self.schema.check_row(&values)?;
        let id = self.push_record(values);
        log::debug!("added record {}", id);
        Ok(id)
    }

    /// Removes a record and drops it from the selection.
    pub fn remove_record(&mut self, id: RecordId) -> Result<Record, TableError> {
        let idx = self.position(id)?;
        self.selection.remove(id);
        log::debug!("removed record {}", id);
        Ok(self.records.remove(idx))
    }

    /// Sets one field of one record. The identifier is read-only.
    pub fn update_record(&mut self, id: RecordId, field: &str, value: Value) -> Result<(), TableError> {
        let column = self.writable_column(field, &value)?;
        let idx = self.position(id)?;
        self.records[idx].values[column] = value;
        Ok(())
    }

    /// Moves a record to `to_index` in the collection order (drag-and-drop
    /// reordering). Indices past the end move the record to the end.
    pub fn move_record(&mut self, id: RecordId, to_index: usize) -> Result<(), TableError> {
        let from = self.position(id)?;
        let record = self.records.remove(from);
        let to = to_index.min(self.records.len());
        self.records.insert(to, record);
        log::debug!("moved record {} from {} to {}", id, from, to);
        Ok(())
    }

    fn writable_column(&self, field: &str, value: &Value) -> Result<usize, TableError> {
        match self.schema.resolve(field)? {
            FieldRef::Id => Err(TableError::ReadOnlyField(field.to_string())),
            column @ FieldRef::Column(idx) => {
                self.schema.check_type(column, value)?;
                Ok(idx)
            }
        }
    }

    // ========================================================================
    // FILTER & SORT
    // ========================================================================

    /// Replaces the free-text query. Empty clears it. The selection is kept.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.to_lowercase();
    }

    pub fn filter(&self) -> &str {
        &self.query
    }

    /// Adds a structured field filter, ANDed with the query and other filters.
    pub fn add_field_filter(&mut self, filter: FieldFilter) -> Result<(), TableError> {
        let resolved = ResolvedFilter::resolve(&self.schema, filter)?;
        self.field_filters.push(resolved);
        Ok(())
    }

    pub fn clear_field_filters(&mut self) {
        self.field_filters.clear();
    }

    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            query: self.query.clone(),
            field_filters: self.field_filters.iter().map(|f| f.filter.clone()).collect(),
        }
    }

    /// Sorts by `field`. Repeating the active field flips the direction;
    /// a new field starts ascending.
    pub fn set_sort(&mut self, field: &str) -> Result<SortDirection, TableError> {
        let field = self.schema.resolve(field)?;
        let direction = match self.sort {
            Some((current, direction)) if current == field => direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some((field, direction));
        log::debug!(
            "sort by {} {:?}",
            self.schema.field_name(field),
            direction
        );
        Ok(direction)
    }

    /// Returns to insertion order.
    pub fn reset_sort(&mut self) {
        self.sort = None;
    }

    pub fn sort_spec(&self) -> SortSpec {
        match self.sort {
            Some((field, direction)) => SortSpec {
                field: Some(self.schema.field_name(field).to_string()),
                direction,
            },
            None => SortSpec::default(),
        }
    }

    // ========================================================================
    // VIEW
    // ========================================================================

    /// Filtered records in collection order, ignoring the sort.
    pub fn filtered(&self) -> Vec<&Record> {
        filter_records(&self.records, &self.needle, &self.field_filters)
    }

    /// The filtered and sorted projection of the collection.
    pub fn view(&self) -> Vec<&Record> {
        let mut rows = self.filtered();
        if let Some((field, direction)) = self.sort {
            sort_records(&mut rows, field, direction);
        }
        rows
    }

    pub fn view_ids(&self) -> Vec<RecordId> {
        self.view().iter().map(|r| r.id).collect()
    }

    pub fn view_info(&self) -> ViewInfo {
        ViewInfo {
            visible: self.filtered().len(),
            total: self.records.len(),
            filter: self.query.clone(),
        }
    }

    // ========================================================================
    // COLUMNS
    // ========================================================================

    /// Shows or hides a column. Returns whether it is now visible.
    pub fn toggle_column(&mut self, field: &str) -> Result<bool, TableError> {
        let field = self.schema.resolve(field)?;
        if self.hidden_columns.remove(&field) {
            Ok(true)
        } else {
            self.hidden_columns.insert(field);
            Ok(false)
        }
    }

    fn all_columns(&self) -> impl Iterator<Item = FieldRef> + '_ {
        std::iter::once(FieldRef::Id).chain((0..self.schema.len()).map(FieldRef::Column))
    }

    /// Visible columns in display order, `id` first.
    pub fn visible_columns(&self) -> Vec<FieldRef> {
        self.all_columns()
            .filter(|f| !self.hidden_columns.contains(f))
            .collect()
    }

    pub fn columns(&self) -> Vec<ColumnInfo> {
        self.all_columns()
            .map(|f| ColumnInfo {
                name: self.schema.field_name(f).to_string(),
                label: self.schema.field_label(f).to_string(),
                field_type: self.schema.field_type(f),
                visible: !self.hidden_columns.contains(&f),
                sorted: self.sort.filter(|(s, _)| *s == f).map(|(_, d)| d),
            })
            .collect()
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Flips the selection of one record. Returns whether it is now selected.
    pub fn toggle_select(&mut self, id: RecordId) -> Result<bool, TableError> {
        self.position(id)?;
        Ok(self.selection.toggle(id))
    }

    /// Selects exactly the visible rows, or clears the selection when it
    /// already equals them.
    pub fn select_all(&mut self) {
        let view_ids = self.view_ids();
        if self.selection.equals(&view_ids) {
            self.selection.clear();
        } else {
            self.selection.replace(view_ids);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state(&self.view_ids())
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.selection.sorted_ids()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    // ========================================================================
    // BATCH
    // ========================================================================

    /// Applies `action` to every selected record as one transition.
    /// Does nothing when the selection is empty.
    pub fn batch_apply(&mut self, action: BatchAction) -> Result<BatchOutcome, TableError> {
        if self.selection.is_empty() {
            return Ok(BatchOutcome::default());
        }

        let affected = match action {
            BatchAction::Delete => {
                let before = self.records.len();
                let selection = &self.selection;
                self.records.retain(|r| !selection.contains(r.id));
                self.selection.clear();
                before - self.records.len()
            }
            BatchAction::SetField { field, value } => {
                let column = self.writable_column(&field, &value)?;
                let mut affected = 0;
                for record in self.records.iter_mut() {
                    if self.selection.contains(record.id) {
                        record.values[column] = value.clone();
                        affected += 1;
                    }
                }
                affected
            }
        };

        log::debug!("batch applied to {} records", affected);
        Ok(BatchOutcome { affected })
    }

    // ========================================================================
    // AGGREGATION
    // ========================================================================

    /// Sums `value_field` per distinct `category_field` over the filtered
    /// rows. Sort and selection do not affect the result.
    pub fn aggregate_by(
        &self,
        category_field: &str,
        value_field: &str,
    ) -> Result<CategoryTotals, TableError> {
        let category = self.schema.resolve(category_field)?;
        let value = self.schema.resolve(value_field)?;
        aggregate::aggregate_by(&self.schema, &self.filtered(), category, value)
    }

    /// Count, total, average and extremes of `value_field` over the filtered rows.
    pub fn summarize(&self, value_field: &str) -> Result<Summary, TableError> {
        let value = self.schema.resolve(value_field)?;
        aggregate::summarize(&self.schema, &self.filtered(), value)
    }

    /// Distinct values of `field` across the whole collection, sorted.
    pub fn distinct_values(&self, field: &str) -> Result<Vec<Value>, TableError> {
        let field = self.schema.resolve(field)?;
        Ok(aggregate::distinct_values(&self.records, field))
    }
}
