// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tag: the load → classify → resolve → save pipeline.
//!
//! One linear single-threaded pass per run. Load and save errors and a
//! missing target column abort the run; only per-cell classification
//! misses are absorbed (as the `"Unknown"` sentinel, inside the
//! classifier).

use crate::augment::{self, derived_column_name};
use crate::classify::{ClassifierConfig, LanguageClassifier};
use crate::outpath;
use crate::table::Table;
use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The MARC 245 (title statement) and 246 (variant title) columns the
/// catalog exports carry; these are tagged when no override is given.
pub const DEFAULT_TARGET_COLUMNS: [&str; 2] = ["Title 245 (1)(a)", "Title 246 (1)(a)"];

pub fn default_target_columns() -> Vec<String> {
    DEFAULT_TARGET_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Configuration for a tag run.
pub struct TagConfig {
    /// Input spreadsheet path
    pub input: PathBuf,
    /// Base output path; `None` derives `{input stem}_with_lang.{ext}`
    pub output: Option<PathBuf>,
    /// Columns whose values are classified
    pub columns: Vec<String>,
    /// Detector configuration
    pub classifier: ClassifierConfig,
}

/// Per-target-column tally of assigned languages.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnTally {
    pub column: String,
    pub derived_column: String,
    /// Language name/code → number of rows that received it
    pub languages: BTreeMap<String, usize>,
}

/// Summary of a completed tag run.
#[derive(Debug, Clone, Serialize)]
pub struct TagReport {
    pub created_at: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub tallies: Vec<ColumnTally>,
}

/// Run the pipeline: load the input table, derive a language column per
/// target, pick a collision-free output path, and write the result.
pub fn run(config: &TagConfig) -> Result<TagReport> {
    let mut table = Table::load(&config.input)?;

    let classifier = LanguageClassifier::new(config.classifier);
    augment::augment(&mut table, &config.columns, &classifier)?;

    let base = config
        .output
        .clone()
        .unwrap_or_else(|| default_output_base(&config.input));
    let output = outpath::resolve(&base);
    table.save(&output)?;

    let tallies = config
        .columns
        .iter()
        .map(|name| tally_column(&table, name))
        .collect();

    Ok(TagReport {
        created_at: Utc::now().to_rfc3339(),
        input: config.input.clone(),
        output,
        rows: table.row_count(),
        tallies,
    })
}

/// Default output base: the input path with `_with_lang` appended to the
/// stem, e.g. `titles.xlsx` → `titles_with_lang.xlsx`.
fn default_output_base(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}_with_lang.{}", ext.to_string_lossy()),
        None => format!("{stem}_with_lang"),
    };
    input.with_file_name(file_name)
}

fn tally_column(table: &Table, target: &str) -> ColumnTally {
    let derived = derived_column_name(target);
    let mut languages = BTreeMap::new();
    if let Some(column) = table.column(&derived) {
        for value in &column.values {
            *languages.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    ColumnTally {
        column: target.to_string(),
        derived_column: derived,
        languages,
    }
}
