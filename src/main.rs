// SPDX-License-Identifier: PMPL-1.0-or-later

//! title-lang: language tagging for bibliographic title spreadsheets
//!
//! Reads a catalog export (CSV or Excel), detects the language of the
//! title columns, and writes an augmented copy alongside the input
//! without overwriting prior runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use title_lang::classify::ClassifierConfig;
use title_lang::table::Table;
use title_lang::tag::{self, TagConfig, TagReport};

#[derive(Parser)]
#[command(name = "title-lang")]
#[command(version)]
#[command(about = "Language tagging for bibliographic title spreadsheets")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag title columns with their detected language
    Tag {
        /// Input spreadsheet (.csv, .xlsx, .xlsm)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Base output path (default: INPUT with `_with_lang` before the extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Columns to classify (default: the MARC 245/246 title columns)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Discard detections the detector marks unreliable
        #[arg(long)]
        reliable_only: bool,

        /// Write a JSON run summary to this path
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Print the column names and row count of a spreadsheet
    Inspect {
        /// Input spreadsheet (.csv, .xlsx, .xlsm)
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tag {
            input,
            output,
            columns,
            reliable_only,
            summary,
        } => {
            let config = TagConfig {
                input,
                output,
                columns: columns.unwrap_or_else(tag::default_target_columns),
                classifier: ClassifierConfig { reliable_only },
            };

            println!("Tagging languages in: {}", config.input.display());
            let report = tag::run(&config)?;
            print_report(&report);

            if let Some(summary_path) = summary {
                fs::write(&summary_path, serde_json::to_string_pretty(&report)?)?;
                println!("Summary written to: {}", summary_path.display());
            }
        }

        Commands::Inspect { input } => {
            println!("Inspecting: {}", input.display());
            let table = Table::load(&input)?;

            println!("\n{}", "COLUMNS".bold().yellow());
            for (index, name) in table.column_names().enumerate() {
                println!("  {:>3}  {}", index + 1, name);
            }
            println!("\nRows: {}", table.row_count());
        }
    }

    Ok(())
}

fn print_report(report: &TagReport) {
    for tally in &report.tallies {
        println!("\n{}", tally.derived_column.bold().yellow());
        for (language, count) in &tally.languages {
            println!("  {language:<12} {count}");
        }
    }
    println!("\nRows processed: {}", report.rows);
    println!(
        "{} {}",
        "Result stored in:".green().bold(),
        report.output.display()
    );
}
