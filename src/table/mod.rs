// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory spreadsheet table: ordered columns of typed cells.
//!
//! The table is loaded once, mutated only by column addition, and written
//! once. Rows are positional across columns — every column holds exactly
//! `row_count()` values and row order is never changed.
//!
//! File formats are dispatched on extension: `.csv` through the `csv`
//! crate (with Windows-1252 fallback for legacy exports), `.xlsx`/`.xlsm`
//! through `calamine` for reading and `rust_xlsxwriter` for writing.

mod csv;
mod xlsx;

use anyhow::{bail, Context, Result};
use std::fmt;
use std::path::Path;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Trimmed string form of the cell, or `None` when the cell is empty
    /// or holds only whitespace. Numbers and booleans coerce to their
    /// display form.
    pub fn coerce_text(&self) -> Option<String> {
        let text = match self {
            CellValue::Empty => return None,
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A named column and its cell values, in row order.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

/// An ordered sequence of columns. Column order is load order; appended
/// columns always land after every existing column.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a header row and positional data rows. Short
    /// rows are padded with empty cells; overlong rows are truncated to
    /// the header width.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();
        for mut row in rows {
            row.resize(width, CellValue::Empty);
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }
        Self { columns }
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Replace the values of an existing column in place, or append a new
    /// column after all existing ones. `values` must hold one cell per
    /// row of the table.
    pub fn set_column(&mut self, name: &str, values: Vec<CellValue>) {
        debug_assert!(
            self.columns.is_empty() || values.len() == self.row_count(),
            "column {name:?} has {} values for a {}-row table",
            values.len(),
            self.row_count()
        );
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(Column {
                name: name.to_string(),
                values,
            }),
        }
    }

    /// Load a table from disk, dispatching on the file extension.
    pub fn load(path: &Path) -> Result<Table> {
        match extension_of(path)?.as_str() {
            "csv" => csv::load(path)
                .with_context(|| format!("failed to load CSV file {}", path.display())),
            "xlsx" | "xlsm" => xlsx::load(path)
                .with_context(|| format!("failed to load Excel file {}", path.display())),
            other => bail!(
                "unsupported spreadsheet extension {:?} for {}",
                other,
                path.display()
            ),
        }
    }

    /// Write the table to disk, dispatching on the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        match extension_of(path)?.as_str() {
            "csv" => csv::save(self, path)
                .with_context(|| format!("failed to write CSV file {}", path.display())),
            "xlsx" => xlsx::save(self, path)
                .with_context(|| format!("failed to write Excel file {}", path.display())),
            other => bail!(
                "unsupported spreadsheet extension {:?} for {}",
                other,
                path.display()
            ),
        }
    }
}

fn extension_of(path: &Path) -> Result<String> {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        bail!("no file extension on {}", path.display());
    };
    Ok(ext.to_ascii_lowercase())
}
