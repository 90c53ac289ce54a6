// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests: whole runs through `tag::run` over real CSV and
//! Excel files on disk.

use std::fs;
use tempfile::TempDir;
use title_lang::classify::ClassifierConfig;
use title_lang::table::{CellValue, Table};
use title_lang::tag::{self, TagConfig};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

const ARABIC: &str = "مرحبا بالعالم هذه تجربة لتحديد اللغة العربية في السجلات";
const ENGLISH: &str = "Hello world this is a test of the language detection routine";
const FRENCH: &str = "Bonjour tout le monde ceci est une phrase en français pour le test";

fn write_input_csv(path: &std::path::Path) {
    let content = format!(
        "Title 245 (1)(a),Title 246 (1)(a)\n{ARABIC},\n,{FRENCH}\n{ENGLISH},{ENGLISH}\n"
    );
    fs::write(path, content).unwrap();
}

fn default_config(input: std::path::PathBuf) -> TagConfig {
    TagConfig {
        input,
        output: None,
        columns: tag::default_target_columns(),
        classifier: ClassifierConfig::default(),
    }
}

#[test]
fn test_csv_run_derives_language_columns() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    write_input_csv(&input);

    let report = tag::run(&default_config(input)).expect("tag run should succeed");

    assert_eq!(report.output, dir.path().join("titles_with_lang.csv"));
    assert_eq!(report.rows, 3);

    let output = Table::load(&report.output).unwrap();
    assert_eq!(
        output.column_names().collect::<Vec<_>>(),
        vec![
            "Title 245 (1)(a)",
            "Title 246 (1)(a)",
            "Title 245 (1)(a) - Language",
            "Title 246 (1)(a) - Language",
        ]
    );
    assert_eq!(
        output.column("Title 245 (1)(a) - Language").unwrap().values,
        vec![text("Arabic"), text("Unknown"), text("English")]
    );
    assert_eq!(
        output.column("Title 246 (1)(a) - Language").unwrap().values,
        vec![text("Unknown"), text("French"), text("English")]
    );
}

#[test]
fn test_csv_run_reports_language_tallies() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    write_input_csv(&input);

    let report = tag::run(&default_config(input)).unwrap();

    assert_eq!(report.tallies.len(), 2);
    let tally_245 = &report.tallies[0];
    assert_eq!(tally_245.column, "Title 245 (1)(a)");
    assert_eq!(tally_245.derived_column, "Title 245 (1)(a) - Language");
    assert_eq!(tally_245.languages.get("Arabic"), Some(&1));
    assert_eq!(tally_245.languages.get("Unknown"), Some(&1));
    assert_eq!(tally_245.languages.get("English"), Some(&1));

    // The report serializes for the --summary flag.
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"created_at\""));
    assert!(json.contains("Title 245 (1)(a) - Language"));
}

#[test]
fn test_second_run_never_overwrites_the_first() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    write_input_csv(&input);

    let first = tag::run(&default_config(input.clone())).unwrap();
    let marker = "marker: first run output";
    fs::write(&first.output, marker).unwrap();

    let second = tag::run(&default_config(input)).unwrap();
    assert_eq!(second.output, dir.path().join("titles_with_lang_2.csv"));
    assert_eq!(fs::read_to_string(&first.output).unwrap(), marker);
}

#[test]
fn test_xlsx_run_round_trips_through_excel() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.xlsx");

    let table = Table::from_rows(
        vec!["Title 245 (1)(a)".to_string(), "Title 246 (1)(a)".to_string()],
        vec![
            vec![text(ARABIC), CellValue::Empty],
            vec![CellValue::Empty, text(FRENCH)],
            vec![text(ENGLISH), text(ENGLISH)],
        ],
    );
    table.save(&input).unwrap();

    let report = tag::run(&default_config(input)).unwrap();
    assert_eq!(report.output, dir.path().join("titles_with_lang.xlsx"));

    let output = Table::load(&report.output).unwrap();
    assert_eq!(output.row_count(), 3);
    assert_eq!(
        output.column("Title 245 (1)(a) - Language").unwrap().values,
        vec![text("Arabic"), text("Unknown"), text("English")]
    );
    assert_eq!(
        output.column("Title 246 (1)(a) - Language").unwrap().values,
        vec![text("Unknown"), text("French"), text("English")]
    );
}

#[test]
fn test_explicit_output_base_is_respected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    write_input_csv(&input);

    let wanted = dir.path().join("tagged.csv");
    let mut config = default_config(input);
    config.output = Some(wanted.clone());

    let report = tag::run(&config).unwrap();
    assert_eq!(report.output, wanted);
    assert!(wanted.exists());
}

#[test]
fn test_missing_column_aborts_without_writing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    fs::write(&input, "Some Other Column\nHello\n").unwrap();

    let err = tag::run(&default_config(input)).unwrap_err();
    assert!(err.to_string().contains("Title 245 (1)(a)"), "got: {err}");
    assert!(
        !dir.path().join("titles_with_lang.csv").exists(),
        "failed runs must not leave an output file"
    );
}

#[test]
fn test_missing_input_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = tag::run(&default_config(dir.path().join("absent.csv"))).unwrap_err();
    assert!(err.to_string().contains("absent.csv"), "got: {err}");
}
