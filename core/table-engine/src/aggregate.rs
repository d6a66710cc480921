//! FILENAME: core/table-engine/src/aggregate.rs
//! Aggregation over view rows: per-category sums and summary statistics.
//!
//! Numeric fields are never coerced. A non-numeric value where a number is
//! required is a `TableError::TypeMismatch`.

use engine::{FieldRef, FieldType, Record, Schema, TableError, Value};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY TOTALS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Sum of a numeric field per distinct category value.
///
/// Entries keep the order in which each category first appears in the view.
/// Categories without matching rows are absent, never present with zero.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl CategoryTotals {
    fn add(&mut self, category: String, amount: f64) {
        match self.index.get(&category) {
            Some(&idx) => self.entries[idx].total += amount,
            None => {
                self.index.insert(category.clone(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category,
                    total: amount,
                });
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|&idx| self.entries[idx].total)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|e| (e.category.as_str(), e.total))
    }

    pub fn entries(&self) -> &[CategoryTotal] {
        &self.entries
    }
}

impl PartialEq for CategoryTotals {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

fn numeric_value(schema: &Schema, record: &Record, field: FieldRef) -> Result<f64, TableError> {
    let value = record.value(field);
    value.as_number().ok_or_else(|| TableError::TypeMismatch {
        field: schema.field_name(field).to_string(),
        expected: FieldType::Number,
        found: value.field_type(),
    })
}

/// Groups `rows` by `category` and sums `value` within each group.
pub fn aggregate_by(
    schema: &Schema,
    rows: &[&Record],
    category: FieldRef,
    value: FieldRef,
) -> Result<CategoryTotals, TableError> {
    let mut totals = CategoryTotals::default();
    for record in rows {
        let amount = numeric_value(schema, record, value)?;
        totals.add(record.value(category).display_text(), amount);
    }
    Ok(totals)
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Count, total, average and extremes of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarizes `value` over `rows`. An empty slice yields all zeros.
pub fn summarize(schema: &Schema, rows: &[&Record], value: FieldRef) -> Result<Summary, TableError> {
    let mut summary = Summary::default();
    for record in rows {
        let n = numeric_value(schema, record, value)?;
        if summary.count == 0 {
            summary.min = n;
            summary.max = n;
        } else {
            summary.min = summary.min.min(n);
            summary.max = summary.max.max(n);
        }
        summary.total += n;
        summary.count += 1;
    }
    if summary.count > 0 {
        summary.average = summary.total / summary.count as f64;
    }
    Ok(summary)
}

/// Distinct values of `field`, sorted by natural order.
pub fn distinct_values(records: &[Record], field: FieldRef) -> Vec<Value> {
    let mut values: Vec<Value> = records.iter().map(|r| r.value(field)).collect();
    values.sort_by(|a, b| a.compare(b));
    values.dedup_by(|a, b| a.compare(b) == std::cmp::Ordering::Equal);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{FieldDescriptor, RecordId};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDescriptor::new("dept", FieldType::Text),
            FieldDescriptor::new("salary", FieldType::Number),
        ])
        .unwrap()
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new(RecordId(1), vec![Value::text("Eng"), Value::Number(50000.0)]),
            Record::new(RecordId(2), vec![Value::text("Eng"), Value::Number(70000.0)]),
            Record::new(RecordId(3), vec![Value::text("HR"), Value::Number(40000.0)]),
        ]
    }

    #[test]
    fn sums_per_category_in_first_appearance_order() {
        let records = records();
        let rows: Vec<&Record> = records.iter().collect();
        let totals = aggregate_by(&schema(), &rows, FieldRef::Column(0), FieldRef::Column(1)).unwrap();

        let collected: Vec<(&str, f64)> = totals.iter().collect();
        assert_eq!(collected, vec![("Eng", 120000.0), ("HR", 40000.0)]);
        assert_eq!(totals.get("HR"), Some(40000.0));
        assert_eq!(totals.get("Sales"), None);
    }

    #[test]
    fn non_numeric_value_field_is_a_type_mismatch() {
        let records = records();
        let rows: Vec<&Record> = records.iter().collect();
        let err = aggregate_by(&schema(), &rows, FieldRef::Column(1), FieldRef::Column(0)).unwrap_err();
        assert_eq!(
            err,
            TableError::TypeMismatch {
                field: "dept".to_string(),
                expected: FieldType::Number,
                found: FieldType::Text,
            }
        );
    }

    #[test]
    fn summary_of_rows() {
        let records = records();
        let rows: Vec<&Record> = records.iter().collect();
        let summary = summarize(&schema(), &rows, FieldRef::Column(1)).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, 160000.0);
        assert_eq!(summary.min, 40000.0);
        assert_eq!(summary.max, 70000.0);
        assert!((summary.average - 53333.333).abs() < 0.001);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = summarize(&schema(), &[], FieldRef::Column(1)).unwrap();
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let values = distinct_values(&records(), FieldRef::Column(0));
        assert_eq!(values, vec![Value::text("Eng"), Value::text("HR")]);
    }
}
