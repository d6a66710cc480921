//! FILENAME: app/src/fixtures.rs
// PURPOSE: Deterministic sample collections for new sessions and the demo.
// CONTEXT: Values are picked by index arithmetic so every run yields the same data.

use chrono::{Duration, NaiveDate};
use engine::{FieldDescriptor, FieldType, Schema, TableError, Value};
use table_engine::TableEngine;

const FIRST_NAMES: &[&str] = &[
    "John", "Emma", "Michael", "Sophia", "William", "Olivia", "James", "Ava", "Robert", "Mia",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson", "Moore",
];
const DEPARTMENTS: &[&str] = &[
    "Engineering", "Marketing", "Sales", "HR", "Finance", "IT", "Operations", "Product", "Design",
    "Support",
];
const STATUSES: &[&str] = &["Active", "Inactive", "Pending"];
const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Diego", "Dallas",
];

const CATEGORIES: &[&str] = &["Electronics", "Clothing", "Food", "Books", "Sports"];
const REGIONS: &[&str] = &["North", "South", "East", "West"];

fn pick<'a>(items: &[&'a str], index: usize, stride: usize) -> &'a str {
    items[(index * stride + index / items.len()) % items.len()]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn users_schema() -> Result<Schema, TableError> {
    Schema::new(vec![
        FieldDescriptor::new("firstName", FieldType::Text).with_label("First Name"),
        FieldDescriptor::new("lastName", FieldType::Text).with_label("Last Name"),
        FieldDescriptor::new("email", FieldType::Text).with_label("Email"),
        FieldDescriptor::new("department", FieldType::Text).with_label("Department"),
        FieldDescriptor::new("status", FieldType::Text).with_label("Status"),
        FieldDescriptor::new("age", FieldType::Number).with_label("Age"),
        FieldDescriptor::new("salary", FieldType::Number).with_label("Salary"),
        FieldDescriptor::new("city", FieldType::Text).with_label("City"),
        FieldDescriptor::new("joinDate", FieldType::Date).with_label("Join Date"),
    ])
}

/// Employee records for the interactive table.
pub fn sample_users(count: usize) -> Result<TableEngine, TableError> {
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        let joined = date(
            2020 + (i % 4) as i32,
            (i * 5 % 12) as u32 + 1,
            (i * 11 % 28) as u32 + 1,
        );
        rows.push(vec![
            Value::text(pick(FIRST_NAMES, i, 3)),
            Value::text(pick(LAST_NAMES, i, 7)),
            Value::text(format!("user{}@example.com", i + 1)),
            Value::text(pick(DEPARTMENTS, i, 3)),
            Value::text(pick(STATUSES, i, 1)),
            Value::Number((20 + i * 17 % 40) as f64),
            Value::Number((30000 + i * 7919 % 80000) as f64),
            Value::text(pick(CITIES, i, 5)),
            Value::Date(joined),
        ]);
    }
    TableEngine::with_rows(users_schema()?, rows)
}

pub fn sales_schema() -> Result<Schema, TableError> {
    Schema::new(vec![
        FieldDescriptor::new("date", FieldType::Date).with_label("Date"),
        FieldDescriptor::new("category", FieldType::Text).with_label("Category"),
        FieldDescriptor::new("region", FieldType::Text).with_label("Region"),
        FieldDescriptor::new("value", FieldType::Number).with_label("Value"),
    ])
}

/// Sales records for the bar-chart dashboard, spread over 2024 in date order.
pub fn sample_sales(count: usize) -> Result<TableEngine, TableError> {
    let start = date(2024, 1, 1);
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        let offset = (i * 365 / count.max(1)) as i64;
        rows.push(vec![
            Value::Date(start + Duration::days(offset)),
            Value::text(pick(CATEGORIES, i, 2)),
            Value::text(pick(REGIONS, i, 3)),
            Value::Number((1000 + i * 4099 % 9000) as f64),
        ]);
    }
    TableEngine::with_rows(sales_schema()?, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_are_deterministic() {
        let a = sample_users(20).unwrap();
        let b = sample_users(20).unwrap();
        assert_eq!(a.records(), b.records());
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn sales_are_in_date_order() {
        let sales = sample_sales(100).unwrap();
        let dates: Vec<Value> = sales.records().iter().map(|r| r.values[0].clone()).collect();
        assert!(dates.windows(2).all(|w| w[0].compare(&w[1]) != std::cmp::Ordering::Greater));
    }

    #[test]
    fn join_dates_are_real_calendar_dates() {
        let users = sample_users(60).unwrap();
        let joined = users.schema().resolve("joinDate").unwrap();
        for record in users.records() {
            match record.value(joined) {
                Value::Date(d) => assert!((2020..=2023).contains(&chrono::Datelike::year(&d))),
                other => panic!("expected a date, got {:?}", other),
            }
        }
    }

    #[test]
    fn departments_repeat() {
        let users = sample_users(50).unwrap();
        let departments = users.distinct_values("department").unwrap();
        assert!(departments.len() > 1);
        assert!(departments.len() < 50);
    }
}
