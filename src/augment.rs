// SPDX-License-Identifier: PMPL-1.0-or-later

//! Derives one language column per target column.
//!
//! Target columns are processed in the given order; each derived column
//! is appended after all existing columns, so the final layout is the
//! original columns followed by the derived columns in target order.
//! Row count and original cell values are never touched.

use crate::classify::LanguageClassifier;
use crate::table::{CellValue, Table};
use anyhow::{anyhow, Result};

/// Suffix appended to a target column's name to form its derived column.
pub const LANGUAGE_COLUMN_SUFFIX: &str = " - Language";

/// Name of the derived column for a target column.
pub fn derived_column_name(target: &str) -> String {
    format!("{target}{LANGUAGE_COLUMN_SUFFIX}")
}

/// Append a `"{target} - Language"` column for every target column.
///
/// A target name absent from the table fails fast with an error naming
/// the column; the caller aborts before writing any output, so a typo in
/// a column name can never produce a half-tagged file.
pub fn augment(
    table: &mut Table,
    targets: &[String],
    classifier: &LanguageClassifier,
) -> Result<()> {
    for name in targets {
        let source = table.column(name).ok_or_else(|| {
            anyhow!(
                "column {:?} not found in input (available columns: {})",
                name,
                table.column_names().collect::<Vec<_>>().join(", ")
            )
        })?;
        let derived: Vec<CellValue> = source
            .values
            .iter()
            .map(|value| CellValue::Text(classifier.classify(value)))
            .collect();
        table.set_column(&derived_column_name(name), derived);
    }
    Ok(())
}
