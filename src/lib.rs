// SPDX-License-Identifier: PMPL-1.0-or-later

//! title-lang — language tagging for bibliographic title spreadsheets.
//!
//! Reads a spreadsheet of catalog title records (CSV or Excel), detects
//! the natural language of the MARC 245/246 title columns per row, and
//! writes an augmented copy with one `"<column> - Language"` column per
//! target column. Output files are never overwritten: occupied paths get
//! `_2`, `_3`, … suffixes.
//!
//! PIPELINE STAGES:
//! 1. **Table**: ordered-column spreadsheet model with CSV/Excel I/O.
//! 2. **Classify**: per-cell language detection that never fails —
//!    blank or undetectable cells become the `"Unknown"` sentinel.
//! 3. **Augment**: appends the derived language columns in target order.
//! 4. **Outpath**: picks the first collision-free output path.

pub mod augment;
pub mod classify;
pub mod i18n;
pub mod outpath;
pub mod table;
pub mod tag;
