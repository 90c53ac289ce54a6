// SPDX-License-Identifier: PMPL-1.0-or-later

//! CSV load/save for [`Table`].
//!
//! Library exports from older catalog systems are frequently Windows-1252
//! rather than UTF-8, so loading tries strict UTF-8 first and falls back
//! to a Windows-1252 decode.

use super::{CellValue, Table};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use encoding_rs::WINDOWS_1252;
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<Table> {
    let bytes = fs::read(path).context("read failed")?;
    let content = decode(&bytes);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("header row unreadable")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("row {} unreadable", index + 2))?;
        rows.push(record.iter().map(cell_from_field).collect());
    }

    Ok(Table::from_rows(headers, rows))
}

pub fn save(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path).context("open failed")?;
    writer.write_record(table.column_names())?;
    for row in 0..table.row_count() {
        writer.write_record(
            table
                .columns()
                .iter()
                .map(|column| column.values[row].to_string()),
        )?;
    }
    writer.flush().context("flush failed")?;
    Ok(())
}

fn cell_from_field(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(field.to_string())
    }
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (content, _, _) = WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}
