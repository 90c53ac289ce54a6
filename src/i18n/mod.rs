// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639 code handling for detected languages.
//!
//! The detector reports languages as ISO 639-3 three-letter identifiers;
//! everything downstream of this tool (the display lookup, the derived
//! spreadsheet columns, the catalog records they feed) speaks ISO 639-1
//! two-letter codes. This module owns that bridge.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

mod iso639;

pub use iso639::{is_valid_iso639_1, iso639_1};
