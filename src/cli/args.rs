//! Command-line argument definitions for the EDT parser
//!
//! Every option overrides the matching key of the configuration file.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the EDT export parser
///
/// Reads the Attività, Aule, Docenti and Classi tables exported from EDT
/// Monoposto and writes a single normalized JSON timetable.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "edt-parser",
    version,
    about = "Convert EDT timetable TSV exports into a normalized JSON document",
    long_about = "Reads the Attività, Aule, Docenti and Classi tables copied out of EDT Monoposto \
                  (tab-separated, UTF-8), normalizes days, times, durations and week numbers, \
                  and writes one JSON document for the room-map viewer. Unplaced lessons are \
                  left out."
)]
pub struct Args {
    /// Directory containing the exported tables
    ///
    /// Defaults to ./CSVFiles. The files are expected to be named
    /// Attività.csv, Aule.csv, Docenti.csv and Classi.csv.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Directory containing the EDT exports"
    )]
    pub input_dir: Option<PathBuf>,

    /// Output path for the JSON document
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the JSON document (default: orario.json)"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/edt-parser/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Real minutes in one EDT lesson hour
    #[arg(
        long = "lesson-unit",
        value_name = "MINUTES",
        help = "Minutes per EDT lesson hour (default: 50)"
    )]
    pub lesson_unit_minutes: Option<u32>,

    /// Print the JSON document to stdout instead of writing a file
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Format of the end-of-run summary
    #[arg(
        long = "summary-format",
        value_enum,
        default_value = "human",
        help = "Format of the end-of-run summary"
    )]
    pub summary_format: SummaryFormat,
}

/// Summary output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Human,
    Json,
}

impl Args {
    /// Log level for the tracing filter
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// The summary is skipped in quiet mode and when the document goes to stdout
    pub fn show_summary(&self) -> bool {
        !self.quiet && !self.stdout
    }
}
