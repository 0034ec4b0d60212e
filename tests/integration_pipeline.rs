//! Integration tests for the full export-to-JSON pipeline
//!
//! These tests write a realistic EDT export batch to a temporary directory
//! and check the document a downstream viewer would read.

use edt_parser::app::services::json_exporter::export_json;
use edt_parser::app::services::model_builder::ModelBuilder;
use edt_parser::app::services::tsv_loader::ExportTables;
use edt_parser::{EdtError, Model, ParserConfig};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

const ACTIVITIES: &str = "\u{feff}Durata\tGiorno e ora\tDocente\tMateria\tClasse\tAula\tSettimana d'applicazione\tPeriodicità
1h00\tlunedì 07h55\tBIANCHI SONIA\tINGLESE\t1D\t_LabCloud_303\tSettimana 49\tS (33/33)
2h00\tmercoledì 09h35\tROSSI MARIO\tMATEMATICA\t2A\tAula 12\t\tS (33/33)
1h00\tNon piazzata\tROSSI MARIO\tMATEMATICA\t2A\t\t\tS (33/33)
1h00\tsabato 23h30\tVERDI LUCA\tSTORIA\t1D\tAula 12\t\tQ (16/33)
";

const ROOMS: &str = "Nome\tCapienza\tQuantità\tOccupazione\t\"Tasso d'occup. potenziale\"\t\"Picco d'occupazione\"
_LabCloud_303\t\t1\t22h00\t26%\t4
Aula 12\t28\t1\t30h00\t35%\t6
";

const TEACHERS: &str = "Titolo\tCognome\tNome\tE-mail \tDisciplina\tMonte ore settimanale
Prof.\tBianchi\tSonia\tSonia.Bianchi@scuola.it\tAB24   Inglese\t18h00
Prof.\tRossi\tMario\t\tA026 Matematica\t18h00
";

const CLASSES: &str = "Nome\tAlunni inseriti\tLivelli\tAula preferenziale
1D\t25\t1°\t_LabCloud_303
2A\t22\t2°
";

fn write_export(dir: &Path) {
    std::fs::write(dir.join("Attività.csv"), ACTIVITIES).unwrap();
    std::fs::write(dir.join("Aule.csv"), ROOMS).unwrap();
    std::fs::write(dir.join("Docenti.csv"), TEACHERS).unwrap();
    std::fs::write(dir.join("Classi.csv"), CLASSES).unwrap();
}

fn build_from(config: &ParserConfig) -> edt_parser::Result<Model> {
    let tables = ExportTables::load(config)?;
    ModelBuilder::new(config.lesson_unit_minutes).build_model(
        &tables.activities,
        &tables.rooms,
        &tables.teachers,
        &tables.classes,
    )
}

/// Export a whole batch and read the JSON back as an untyped document
#[test]
fn test_export_batch_to_json_document() {
    let dir = TempDir::new().unwrap();
    write_export(dir.path());
    let output = dir.path().join("out").join("orario.json");
    let config = ParserConfig::default()
        .with_input_dir(dir.path())
        .with_output_path(&output);

    let model = build_from(&config).unwrap();
    export_json(&model, &config.output_path).unwrap();

    let document: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();

    let lessons = document["lezioni"].as_array().unwrap();
    assert_eq!(lessons.len(), 3, "unplaced lesson must be left out");
    assert_eq!(document["aule"].as_array().unwrap().len(), 2);
    assert_eq!(document["docenti"].as_array().unwrap().len(), 2);
    assert_eq!(document["classi"].as_array().unwrap().len(), 2);

    let first = &lessons[0];
    assert_eq!(first["giorno"], 1);
    assert_eq!(first["inizio"], "07:55");
    assert_eq!(first["fine"], "08:45");
    assert_eq!(first["durata_min"], 50);
    assert_eq!(first["docente"], "BIANCHI SONIA");
    assert_eq!(first["aula"], "_LabCloud_303");
    assert_eq!(first["settimana"], 49);
    assert_eq!(first["periodicita"], "S (33/33)");

    let second = &lessons[1];
    assert_eq!(second["giorno"], 3);
    assert_eq!(second["fine"], "11:15");
    assert!(second["settimana"].is_null());

    // End time wraps past midnight
    let late = &lessons[2];
    assert_eq!(late["giorno"], 6);
    assert_eq!(late["fine"], "00:20");
}

#[test]
fn test_optional_columns_round_trip() {
    let dir = TempDir::new().unwrap();
    write_export(dir.path());
    let config = ParserConfig::default().with_input_dir(dir.path());

    let model = build_from(&config).unwrap();

    let lab = &model.rooms[0];
    assert_eq!(lab.name, "_LabCloud_303");
    assert_eq!(lab.capacity, None);
    assert_eq!(lab.potential_occupancy_rate.as_deref(), Some("26%"));
    assert_eq!(lab.peak_occupancy.as_deref(), Some("4"));

    assert_eq!(
        model.teachers[0].email.as_deref(),
        Some("Sonia.Bianchi@scuola.it")
    );
    assert_eq!(model.teachers[1].email, None);

    assert_eq!(model.classes[0].preferred_room.as_deref(), Some("_LabCloud_303"));
    assert_eq!(model.classes[1].preferred_room, None);
}

#[test]
fn test_custom_lesson_unit() {
    let dir = TempDir::new().unwrap();
    write_export(dir.path());
    let config = ParserConfig::default()
        .with_input_dir(dir.path())
        .with_lesson_unit_minutes(60);

    let model = build_from(&config).unwrap();

    assert_eq!(model.lessons[1].duration_minutes, 120);
    assert_eq!(model.lessons[1].end.to_string(), "11:35");
}

#[test]
fn test_missing_export_directory() {
    let dir = TempDir::new().unwrap();
    let config = ParserConfig::default().with_input_dir(dir.path().join("absent"));

    let err = build_from(&config).unwrap_err();

    assert!(matches!(err, EdtError::SourceUnavailable { .. }));
    assert!(err.is_user_actionable());
}
