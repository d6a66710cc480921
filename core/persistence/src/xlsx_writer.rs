//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::{date_to_serial, ExportTable, PersistenceError};
use engine::Value;
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};
use std::path::Path;

/// Name of the single worksheet written by `save_xlsx`.
pub const EXPORT_SHEET_NAME: &str = "Data";

pub fn save_xlsx(table: &ExportTable, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, column) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, &column.label, &header_format)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                Value::Text(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
                Value::Number(n) => {
                    worksheet.write_number(row_num, col, *n)?;
                }
                Value::Boolean(b) => {
                    worksheet.write_boolean(row_num, col, *b)?;
                }
                Value::Date(d) => {
                    worksheet.write_number_with_format(row_num, col, date_to_serial(*d), &date_format)?;
                }
            }
        }
    }

    xlsx.save(path)?;
    Ok(())
}
