//! Command implementation for the EDT parser CLI
//!
//! Orchestrates load → build → export, and reports the outcome.

use crate::app::services::json_exporter::{export_json, to_json_string};
use crate::app::services::model_builder::{BuildStats, ModelBuilder};
use crate::app::services::tsv_loader::ExportTables;
use crate::cli::args::{Args, SummaryFormat};
use crate::config::ParserConfig;
use crate::constants::EDT_VERSION;
use crate::error::{EdtError, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Exit code for errors caused by the exports or settings
pub const EXIT_USER_ERROR: i32 = 1;

/// Exit code for unexpected failures
pub const EXIT_UNEXPECTED_ERROR: i32 = 2;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Rows loaded per table
    pub table_rows: [(&'static str, usize); 4],

    /// What the builder kept and skipped
    pub build_stats: BuildStats,

    /// Written file and its size, `None` when printed to stdout
    pub output: Option<(PathBuf, u64)>,

    pub processing_time: Duration,
}

/// Run the parser end to end
pub fn run(args: &Args) -> Result<RunSummary> {
    info!("Parser EDT avviato (versione EDT attesa: {})", EDT_VERSION);
    let start_time = Instant::now();

    let config = load_configuration(args)?;

    let tables = ExportTables::load(&config)?;

    info!("Costruzione del modello dati…");
    let builder = ModelBuilder::new(config.lesson_unit_minutes);
    let (model, build_stats) = builder.build_model_with_stats(
        &tables.activities,
        &tables.rooms,
        &tables.teachers,
        &tables.classes,
    )?;

    let output = if args.stdout {
        print!("{}", to_json_string(&model)?);
        None
    } else {
        info!("Esportazione JSON in '{}'…", config.output_path.display());
        let bytes = export_json(&model, &config.output_path)?;
        Some((config.output_path.clone(), bytes))
    };

    info!("Operazione completata con successo.");

    Ok(RunSummary {
        table_rows: tables.row_counts(),
        build_stats,
        output,
        processing_time: start_time.elapsed(),
    })
}

/// Set up structured logging on stderr based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("edt_parser={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (defaults -> file -> args)
fn load_configuration(args: &Args) -> Result<ParserConfig> {
    let mut config = ParserConfig::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut ParserConfig, args: &Args) {
    if let Some(input_dir) = &args.input_dir {
        config.input_dir = input_dir.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.output_path = output_path.clone();
    }
    if let Some(minutes) = args.lesson_unit_minutes {
        config.lesson_unit_minutes = minutes;
    }
}

/// Log a failed run and pick the process exit code
pub fn report_failure(error: &EdtError) -> i32 {
    if error.is_user_actionable() {
        error!("{}", error);
        error!("Parsing interrotto per errore. Verificare i file TSV esportati da EDT.");
        EXIT_USER_ERROR
    } else {
        error!("Errore imprevisto: {}", error);
        error!(
            "Parsing interrotto per errore non previsto. Potrebbe essere necessario controllare il codice del parser."
        );
        EXIT_UNEXPECTED_ERROR
    }
}

/// Generate final run report
pub fn generate_final_report(args: &Args, summary: &RunSummary) -> Result<()> {
    match args.summary_format {
        SummaryFormat::Human => {
            generate_human_report(summary);
            Ok(())
        }
        SummaryFormat::Json => generate_json_report(summary),
    }
}

/// Generate human-readable report
fn generate_human_report(summary: &RunSummary) {
    let stats = &summary.build_stats;

    println!();
    println!("{}", "EDT export converted".bright_green().bold());
    println!("{}", "Rows loaded:".bright_white());
    for (table, rows) in &summary.table_rows {
        println!("   • {}: {}", table.bright_cyan(), rows);
    }

    println!("{}", "Records built:".bright_white());
    println!(
        "   • Lessons: {} {}",
        stats.lessons_built,
        format!("({} unplaced skipped)", stats.unplaced_skipped).bright_black()
    );
    println!("   • Rooms: {}", stats.rooms_built);
    println!("   • Teachers: {}", stats.teachers_built);
    println!("   • Classes: {}", stats.classes_built);
    println!(
        "{} {} records, {:.1}% of activities placed",
        "Total:".bright_white(),
        stats.total_records(),
        stats.placement_rate()
    );

    if let Some((path, bytes)) = &summary.output {
        println!(
            "{} {} ({})",
            "Output:".bright_white(),
            path.display().to_string().bright_yellow(),
            format_size(*bytes)
        );
    }

    println!(
        "{} {:.2?}",
        "Processing time:".bright_white(),
        summary.processing_time
    );
    println!();
}

/// Generate JSON report for machine consumption
fn generate_json_report(summary: &RunSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&json_report(summary))?);
    Ok(())
}

fn json_report(summary: &RunSummary) -> serde_json::Value {
    serde_json::json!({
        "tables": summary.table_rows.iter().map(|(table, rows)| {
            serde_json::json!({ "table": table, "rows": rows })
        }).collect::<Vec<_>>(),
        "build": summary.build_stats,
        "total_records": summary.build_stats.total_records(),
        "placement_rate_percent": summary.build_stats.placement_rate(),
        "output_path": summary.output.as_ref().map(|(path, _)| path.display().to_string()),
        "output_size_bytes": summary.output.as_ref().map(|(_, bytes)| bytes),
        "processing_time_seconds": summary.processing_time.as_secs_f64(),
    })
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
