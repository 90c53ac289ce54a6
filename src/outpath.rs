// SPDX-License-Identifier: PMPL-1.0-or-later

//! Collision-avoiding output path selection.
//!
//! Prior runs accumulate numbered siblings next to the base path and are
//! never overwritten. The existence check and the eventual write are not
//! atomic; two concurrent runs against the same base can race to the same
//! candidate, which this tool accepts.

use std::path::{Path, PathBuf};

/// First of `base`, `base_2`, `base_3`, … with no filesystem entry.
///
/// The counter always suffixes the ORIGINAL base stem, so an occupied
/// `titles.xlsx` resolves to `titles_2.xlsx`, never `titles_2_2.xlsx`.
pub fn resolve(base: &Path) -> PathBuf {
    if !base.exists() {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = base.extension().map(|e| e.to_string_lossy().into_owned());
    let parent = base.parent().unwrap_or_else(|| Path::new(""));

    let mut counter = 2u64;
    loop {
        let file_name = match &extension {
            Some(ext) => format!("{stem}_{counter}.{ext}"),
            None => format!("{stem}_{counter}"),
        };
        let candidate = parent.join(file_name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
