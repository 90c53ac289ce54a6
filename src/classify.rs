// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-cell language classification.
//!
//! The classifier never fails: every cell resolves to a display name from
//! the four-entry catalog lookup, a raw ISO 639-1 code, or the
//! [`UNKNOWN`] sentinel. Detection misses are collapsed to the sentinel
//! here and nowhere else — callers never see an error.
//!
//! Detection is deterministic: the detector is trigram-based with no
//! random state, so repeated runs over the same input produce the same
//! output. Its knobs live in [`ClassifierConfig`] rather than any
//! process-global configuration.

use crate::i18n;
use crate::table::CellValue;

/// Sentinel for cells that are blank or defeat detection.
pub const UNKNOWN: &str = "Unknown";

/// Detector configuration, passed explicitly to the classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifierConfig {
    /// Discard detections the detector marks unreliable instead of
    /// trusting its best guess. Off by default: short title strings
    /// rarely reach the reliability bar, and a best-guess code is more
    /// useful to a cataloger than a column of sentinels.
    pub reliable_only: bool,
}

/// Maps cell text to a human-readable language name, a raw ISO 639-1
/// code, or [`UNKNOWN`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageClassifier {
    config: ClassifierConfig,
}

impl LanguageClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a single cell.
    ///
    /// Blank cells (missing, empty, or whitespace-only after string
    /// coercion) return [`UNKNOWN`] without invoking the detector.
    pub fn classify(&self, value: &CellValue) -> String {
        let Some(text) = value.coerce_text() else {
            return UNKNOWN.to_string();
        };
        match self.detect(&text) {
            Some(code) => display_name(code)
                .unwrap_or(code)
                .to_string(),
            None => UNKNOWN.to_string(),
        }
    }

    /// ISO 639-1 code of the detected language, or `None` when the text
    /// defeats detection. This is the single point where detector misses
    /// become the sentinel.
    fn detect(&self, text: &str) -> Option<&'static str> {
        let info = whatlang::detect(text)?;
        if self.config.reliable_only && !info.is_reliable() {
            return None;
        }
        Some(i18n::iso639_1(info.lang()))
    }
}

/// Display names for the catalog's four primary languages. Codes outside
/// this set surface to the spreadsheet as the raw ISO 639-1 code.
fn display_name(code: &str) -> Option<&'static str> {
    match code {
        "ar" => Some("Arabic"),
        "en" => Some("English"),
        "fr" => Some("French"),
        "de" => Some("German"),
        _ => None,
    }
}
