//! FILENAME: core/persistence/src/csv_writer.rs

use crate::ExportTable;

/// Renders the table as CSV: header labels first, one line per row.
pub fn to_csv(table: &ExportTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);

    let header: Vec<String> = table.columns.iter().map(|c| escape(&c.label)).collect();
    lines.push(header.join(","));

    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|v| escape(&v.display_text())).collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
