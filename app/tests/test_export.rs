//! FILENAME: tests/test_export.rs
//! Integration tests for export and import commands.

mod common;

use common::TestHarness;

#[test]
fn test_csv_export_follows_view() {
    let mut harness = TestHarness::new();
    harness.session.set_filter("eng");
    harness.session.sort_by("salary");
    harness.session.sort_by("salary");

    let export = harness.session.export_csv();
    assert!(export.success);
    assert_eq!(export.row_count, 2);
    assert_eq!(
        export.content.unwrap(),
        "ID,Department,Salary\n2,Eng,70000\n1,Eng,50000"
    );
}

#[test]
fn test_csv_export_skips_hidden_columns() {
    let mut harness = TestHarness::new();
    assert!(harness.session.toggle_column("id").success);

    let csv = harness.session.export_csv().content.unwrap();
    assert_eq!(csv.lines().next(), Some("Department,Salary"));
}

#[test]
fn test_json_export_and_reimport() {
    let mut harness = TestHarness::new();
    let json = harness.session.export_json().content.unwrap();

    let result = harness.session.import_json(&json);
    assert!(result.success, "{:?}", result.error);
    assert_eq!(result.ids, vec![4, 5, 6]);
    assert_eq!(harness.session.engine().len(), 6);

    let totals = harness.session.aggregate("dept", "salary");
    assert_eq!(totals.totals[0].total, 240000.0);
}

#[test]
fn test_import_is_all_or_nothing() {
    let mut harness = TestHarness::new();
    let json = r#"[
        {"dept": "Ops", "salary": 1000},
        {"dept": "Ops", "salary": "unknown"}
    ]"#;

    let result = harness.session.import_json(json);
    assert!(!result.success);
    assert_eq!(harness.session.engine().len(), 3);
}

#[test]
fn test_xlsx_export_and_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.xlsx");

    let harness = TestHarness::with_users(25);
    let export = harness.session.export_xlsx(&path);
    assert!(export.success, "{:?}", export.error);
    assert_eq!(export.row_count, 25);
    assert!(path.exists());

    let mut target = TestHarness::with_users(0);
    let imported = target.session.import_xlsx(&path);
    assert!(imported.success, "{:?}", imported.error);
    assert_eq!(imported.ids.len(), 25);

    let original: Vec<_> = harness.session.engine().records().iter().map(|r| r.values.clone()).collect();
    let restored: Vec<_> = target.session.engine().records().iter().map(|r| r.values.clone()).collect();
    assert_eq!(original, restored);
}

#[test]
fn test_xlsx_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.xlsx");

    let harness = TestHarness::new();
    let export = harness.session.export_xlsx(&path);
    assert!(!export.success);
    assert!(export.error.is_some());
}
