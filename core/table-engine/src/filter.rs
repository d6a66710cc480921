//! FILENAME: core/table-engine/src/filter.rs
//! Row filtering: free-text query and structured field filters.

use std::cmp::Ordering;

use engine::{FieldRef, Record, Schema, TableError};

use crate::definition::FieldFilter;

/// A field filter whose field name has been resolved against the schema.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedFilter {
    pub field: FieldRef,
    pub filter: FieldFilter,
}

impl ResolvedFilter {
    /// Resolves the field and checks every operand against its declared type.
    pub fn resolve(schema: &Schema, filter: FieldFilter) -> Result<Self, TableError> {
        let field = schema.resolve(filter.field())?;
        match &filter {
            FieldFilter::Equals { value, .. } => schema.check_type(field, value)?,
            FieldFilter::Between { min, max, .. } => {
                for bound in min.iter().chain(max.iter()) {
                    schema.check_type(field, bound)?;
                }
            }
        }
        Ok(ResolvedFilter { field, filter })
    }

    pub fn matches(&self, record: &Record) -> bool {
        let value = record.value(self.field);
        match &self.filter {
            FieldFilter::Equals { value: expected, .. } => {
                value.compare(expected) == Ordering::Equal
            }
            FieldFilter::Between { min, max, .. } => {
                let above_min = min
                    .as_ref()
                    .map_or(true, |m| value.compare(m) != Ordering::Less);
                let below_max = max
                    .as_ref()
                    .map_or(true, |m| value.compare(m) != Ordering::Greater);
                above_min && below_max
            }
        }
    }
}

/// True when `needle` (already lowercased) occurs in the text form of any field.
pub(crate) fn matches_query(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.texts().any(|text| text.to_lowercase().contains(needle))
}

/// Applies the query and every field filter, preserving collection order.
pub(crate) fn filter_records<'a>(
    records: &'a [Record],
    needle: &str,
    field_filters: &[ResolvedFilter],
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| matches_query(r, needle))
        .filter(|r| field_filters.iter().all(|f| f.matches(r)))
        .collect()
}
