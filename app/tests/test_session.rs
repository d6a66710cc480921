//! FILENAME: tests/test_session.rs
//! Integration tests for session commands: filter, sort, selection, batch, aggregation.

mod common;

use common::{EmployeeFixture, TestHarness};
use engine::Value;
use table_engine::{FieldFilter, SelectionState, SortDirection};

// ============================================================================
// FILTER & SORT
// ============================================================================

#[test]
fn test_filter_returns_matching_rows() {
    let mut harness = TestHarness::new();

    let view = harness.session.set_filter("eng");
    assert_eq!(view.info.visible, 2);
    assert_eq!(view.info.total, 3);
    assert_eq!(harness.view_ids(), vec![1, 2]);
}

#[test]
fn test_filtered_rows_contain_query() {
    let mut harness = TestHarness::with_users(50);
    let view = harness.session.set_filter("son");

    assert!(!view.rows.is_empty());
    for row in &view.rows {
        assert!(row.cells.iter().any(|c| c.to_lowercase().contains("son")));
    }
}

#[test]
fn test_sort_toggles_direction() {
    let mut harness = TestHarness::new();

    assert!(harness.session.sort_by("salary").success);
    assert_eq!(harness.view_ids(), vec![3, 1, 2]);

    assert!(harness.session.sort_by("salary").success);
    assert_eq!(harness.view_ids(), vec![2, 1, 3]);

    let view = harness.session.get_view();
    let salary = view.columns.iter().find(|c| c.name == "salary").unwrap();
    assert_eq!(salary.sorted, Some(SortDirection::Descending));
}

#[test]
fn test_sort_is_stable_for_duplicate_departments() {
    let mut harness = TestHarness::with_users(40);
    let unsorted = harness.view_ids();

    harness.session.sort_by("department");
    let view = harness.session.get_view();
    let dept_col = view.columns.iter().filter(|c| c.visible).position(|c| c.name == "department").unwrap();

    for pair in view.rows.windows(2) {
        if pair[0].cells[dept_col] == pair[1].cells[dept_col] {
            let a = unsorted.iter().position(|&id| id == pair[0].id).unwrap();
            let b = unsorted.iter().position(|&id| id == pair[1].id).unwrap();
            assert!(a < b, "equal departments must keep input order");
        }
    }
}

#[test]
fn test_sort_unknown_field_reports_error() {
    let mut harness = TestHarness::new();
    let result = harness.session.sort_by("bonus");
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Unknown field: bonus"));
}

#[test]
fn test_reset_sort_restores_insertion_order() {
    let mut harness = TestHarness::new();
    harness.session.sort_by("salary");
    harness.session.reset_sort();
    assert_eq!(harness.view_ids(), vec![1, 2, 3]);
}

#[test]
fn test_field_filters_on_sales() {
    let mut harness = TestHarness::with_sales(100);
    let result = harness.session.add_field_filter(FieldFilter::equals("region", "North"));
    assert!(result.success);

    let view = harness.session.get_view();
    assert!(view.info.visible > 0);
    assert!(view.rows.iter().all(|r| r.cells.contains(&"North".to_string())));

    let bad = harness.session.add_field_filter(FieldFilter::equals("value", "lots"));
    assert!(!bad.success);
}

// ============================================================================
// SELECTION & BATCH
// ============================================================================

#[test]
fn test_select_all_toggles() {
    let mut harness = TestHarness::new();

    harness.session.select_all();
    let view = harness.session.get_view();
    assert_eq!(view.selection, SelectionState::All);
    assert!(view.rows.iter().all(|r| r.selected));

    harness.session.select_all();
    assert_eq!(harness.session.get_view().selection, SelectionState::None);
}

#[test]
fn test_partial_selection() {
    let mut harness = TestHarness::new();
    assert!(harness.session.toggle_select(2).success);

    let view = harness.session.get_view();
    assert_eq!(view.selection, SelectionState::Partial);
    assert_eq!(view.selected_count, 1);
}

#[test]
fn test_toggle_unknown_record_fails() {
    let mut harness = TestHarness::new();
    let result = harness.session.toggle_select(42);
    assert!(!result.success);
}

#[test]
fn test_batch_delete_removes_selected() {
    let mut harness = TestHarness::new();
    harness.session.toggle_select(1);
    harness.session.toggle_select(2);

    let result = harness.session.batch_delete();
    assert!(result.success);
    assert_eq!(result.affected, 2);
    assert_eq!(harness.view_ids(), vec![3]);
    assert_eq!(harness.session.get_view().selection, SelectionState::None);
}

#[test]
fn test_batch_delete_without_selection_is_noop() {
    let mut harness = TestHarness::new();
    let result = harness.session.batch_delete();
    assert!(result.success);
    assert_eq!(result.affected, 0);
    assert_eq!(harness.view_ids(), vec![1, 2, 3]);
}

#[test]
fn test_batch_mark_status() {
    let mut harness = TestHarness::with_users(10);
    harness.session.select_all();

    let result = harness.session.batch_set_field("status", Value::text("Active"));
    assert_eq!(result.affected, 10);

    let statuses = harness.session.distinct_values("status");
    assert_eq!(statuses.values, vec!["Active".to_string()]);
    assert_eq!(harness.session.get_view().selection, SelectionState::All);
}

#[test]
fn test_select_all_under_filter_then_delete() {
    let mut harness = TestHarness::new();
    harness.session.set_filter("hr");
    harness.session.select_all();
    harness.session.set_filter("");

    let result = harness.session.batch_delete();
    assert_eq!(result.affected, 1);
    assert_eq!(harness.view_ids(), vec![1, 2]);
}

// ============================================================================
// COLLECTION MAINTENANCE
// ============================================================================

#[test]
fn test_add_update_remove_record() {
    let mut harness = TestHarness::new();

    let added = harness.session.add_record(vec![Value::text("Ops"), Value::Number(30000.0)]);
    assert!(added.success);
    assert_eq!(added.ids, vec![4]);

    assert!(harness.session.update_record(4, "dept", Value::text("Support")).success);
    assert!(!harness.session.update_record(4, "id", Value::Number(9.0)).success);

    assert!(harness.session.remove_record(4).success);
    assert!(!harness.session.remove_record(4).success);

    let again = harness.session.add_record(vec![Value::text("Ops"), Value::Number(1.0)]);
    assert_eq!(again.ids, vec![5]);
}

#[test]
fn test_add_record_rejects_wrong_shape() {
    let mut harness = TestHarness::new();
    let result = harness.session.add_record(vec![Value::text("Ops")]);
    assert!(!result.success);
    assert_eq!(harness.session.engine().len(), 3);
}

#[test]
fn test_move_record() {
    let mut harness = TestHarness::new();
    assert!(harness.session.move_record(3, 0).success);
    assert_eq!(harness.view_ids(), vec![3, 1, 2]);
}

// ============================================================================
// AGGREGATION
// ============================================================================

#[test]
fn test_aggregate_by_department() {
    let mut harness = TestHarness::new();

    let data = harness.session.aggregate("dept", "salary");
    assert!(data.success);
    let pairs: Vec<(String, f64)> = data.totals.iter().map(|t| (t.category.clone(), t.total)).collect();
    assert_eq!(pairs, vec![("Eng".to_string(), 120000.0), ("HR".to_string(), 40000.0)]);

    harness.session.set_filter("eng");
    let data = harness.session.aggregate("dept", "salary");
    assert_eq!(data.totals.len(), 1);
    assert_eq!(data.totals[0].category, "Eng");
}

#[test]
fn test_aggregate_non_numeric_fails() {
    let harness = TestHarness::new();
    let data = harness.session.aggregate("salary", "dept");
    assert!(!data.success);
    assert!(data.error.unwrap().contains("Type mismatch"));
}

#[test]
fn test_sales_totals_match_summary() {
    let harness = TestHarness::with_sales(100);
    let totals = harness.session.aggregate("category", "value");
    let summary = harness.session.summarize("value").summary.unwrap();

    let sum: f64 = totals.totals.iter().map(|t| t.total).sum();
    assert_eq!(sum, summary.total);
    assert_eq!(summary.count, 100);
}

#[test]
fn test_summary_on_empty_view_is_zero() {
    let mut harness = TestHarness::new();
    harness.session.set_filter("nobody");
    let summary = harness.session.summarize("salary").summary.unwrap();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.total, 0.0);
}

#[test]
fn test_fixture_shape() {
    assert_eq!(EmployeeFixture::data().len(), 3);
}
