//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for session integration tests.

#![allow(dead_code)]

use app_lib::Session;
use engine::{FieldDescriptor, FieldType, Schema, Value};
use table_engine::TableEngine;

/// Test harness wrapping one session.
pub struct TestHarness {
    pub session: Session,
}

impl TestHarness {
    /// Harness over the three-employee fixture.
    pub fn new() -> Self {
        TestHarness {
            session: Session::new(EmployeeFixture::engine()),
        }
    }

    /// Harness over the generated user collection.
    pub fn with_users(count: usize) -> Self {
        TestHarness {
            session: Session::with_sample_users(count).unwrap(),
        }
    }

    /// Harness over the generated sales collection.
    pub fn with_sales(count: usize) -> Self {
        TestHarness {
            session: Session::with_sample_sales(count).unwrap(),
        }
    }

    /// Ids of the rows currently in view, in display order.
    pub fn view_ids(&self) -> Vec<u64> {
        self.session.get_view().rows.iter().map(|r| r.id).collect()
    }
}

/// Small employee collection used across tests.
pub struct EmployeeFixture;

impl EmployeeFixture {
    pub fn schema() -> Schema {
        Schema::new(vec![
            FieldDescriptor::new("dept", FieldType::Text).with_label("Department"),
            FieldDescriptor::new("salary", FieldType::Number).with_label("Salary"),
        ])
        .unwrap()
    }

    pub fn data() -> Vec<(&'static str, f64)> {
        vec![("Eng", 50000.0), ("Eng", 70000.0), ("HR", 40000.0)]
    }

    pub fn engine() -> TableEngine {
        let rows = Self::data()
            .into_iter()
            .map(|(dept, salary)| vec![Value::text(dept), Value::Number(salary)])
            .collect();
        TableEngine::with_rows(Self::schema(), rows).unwrap()
    }
}
