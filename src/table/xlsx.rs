// SPDX-License-Identifier: PMPL-1.0-or-later

//! Excel load/save for [`Table`].
//!
//! Reading takes the first worksheet and treats its first row as the
//! header row, matching how the catalog exports are produced. Writing
//! emits a single worksheet with the header row first.

use super::{CellValue, Table};
use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub fn load(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path).context("open failed")?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook has no worksheets"))?
        .context("worksheet range unreadable")?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => return Ok(Table::new()),
    };

    let data = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(Table::from_rows(headers, data))
}

pub fn save(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.column_names().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }
    for (col, column) in table.columns().iter().enumerate() {
        for (row, value) in column.values.iter().enumerate() {
            let row = (row + 1) as u32;
            let col = col as u16;
            match value {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    worksheet.write_string(row, col, s)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
            }
        }
    }

    workbook.save(path).context("save failed")?;
    Ok(())
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // Date/time and error cells keep their display form; nothing in
        // the title columns should ever hold one.
        other => CellValue::Text(other.to_string()),
    }
}
