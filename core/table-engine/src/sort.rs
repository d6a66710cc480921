//! FILENAME: core/table-engine/src/sort.rs
//! Stable single-key sorting of view rows.

use std::cmp::Ordering;

use engine::{FieldRef, Record};

use crate::definition::SortDirection;

/// Compares two records on one field using the value's natural ordering.
pub(crate) fn compare_records(a: &Record, b: &Record, field: FieldRef) -> Ordering {
    match (a.value_ref(field), b.value_ref(field)) {
        (Some(va), Some(vb)) => va.compare(vb),
        _ => a.id.cmp(&b.id),
    }
}

/// Sorts rows in place. `sort_by` is stable, so equal keys keep their input
/// order in both directions.
pub(crate) fn sort_records(rows: &mut [&Record], field: FieldRef, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_records(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
