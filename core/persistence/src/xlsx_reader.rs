// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::{parse_iso_date, serial_to_date, PersistenceError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use engine::{FieldType, Schema, Value, ID_FIELD};
use std::path::Path;

/// Reads rows from the first worksheet. The header row must name schema
/// fields (by name or label); an `id` column is skipped.
pub fn load_xlsx_rows(schema: &Schema, path: &Path) -> Result<Vec<Vec<Value>>, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PersistenceError::InvalidFormat("Workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .ok_or_else(|| PersistenceError::InvalidFormat("Worksheet is empty".to_string()))?;

    // For each schema field, the sheet column that holds it.
    let mut column_of = Vec::with_capacity(schema.len());
    for field in schema.fields() {
        let col = header
            .iter()
            .position(|cell| match cell {
                Data::String(s) => s == &field.name || s == &field.label,
                _ => false,
            })
            .ok_or_else(|| {
                PersistenceError::InvalidFormat(format!("missing column '{}'", field.name))
            })?;
        column_of.push(col);
    }
    for cell in header {
        if let Data::String(s) = cell {
            let known = s == ID_FIELD
                || s == "ID"
                || schema.fields().iter().any(|f| s == &f.name || s == &f.label);
            if !known {
                return Err(PersistenceError::InvalidFormat(format!("unknown column '{}'", s)));
            }
        }
    }

    let mut rows = Vec::new();
    for (row_idx, row) in rows_iter.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let mut values = Vec::with_capacity(schema.len());
        for (field, &col) in schema.fields().iter().zip(&column_of) {
            let cell = row.get(col).unwrap_or(&Data::Empty);
            let value = cell_to_value(field.field_type, cell).ok_or_else(|| {
                PersistenceError::InvalidFormat(format!(
                    "row {}: field '{}' expects {}, found {:?}",
                    row_idx + 2,
                    field.name,
                    field.field_type,
                    cell
                ))
            })?;
            values.push(value);
        }
        rows.push(values);
    }

    Ok(rows)
}

fn cell_to_value(field_type: FieldType, cell: &Data) -> Option<Value> {
    match (field_type, cell) {
        (FieldType::Text, Data::String(s)) => Some(Value::text(s.clone())),
        // Empty strings are written as blank cells
        (FieldType::Text, Data::Empty) => Some(Value::text("")),
        (FieldType::Text, Data::Float(f)) => Some(Value::text(Value::Number(*f).display_text())),
        (FieldType::Text, Data::Int(i)) => Some(Value::text(i.to_string())),
        (FieldType::Number, Data::Float(f)) => Some(Value::Number(*f)),
        (FieldType::Number, Data::Int(i)) => Some(Value::Number(*i as f64)),
        (FieldType::Boolean, Data::Bool(b)) => Some(Value::Boolean(*b)),
        (FieldType::Date, Data::DateTime(dt)) => serial_to_date(dt.as_f64()).map(Value::Date),
        (FieldType::Date, Data::Float(f)) => serial_to_date(*f).map(Value::Date),
        (FieldType::Date, Data::String(s)) | (FieldType::Date, Data::DateTimeIso(s)) => {
            parse_iso_date(s.get(..10).unwrap_or(s)).map(Value::Date)
        }
        _ => None,
    }
}
