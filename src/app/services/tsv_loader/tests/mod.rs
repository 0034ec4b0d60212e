//! Test utilities for TSV loading
//!
//! Export fixtures written to temporary files and directories.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;


/// Attività export with one placed and one unplaced lesson
pub fn create_activities_tsv() -> String {
    [
        "Durata\tGiorno e ora\tDocente\tMateria\tClasse\tAula\tSettimana d'applicazione\tPeriodicità",
        "1h00\tlunedì 07h55\tBIANCHI SONIA\tINGLESE\t1D\t_LabCloud_303\tSettimana 49\tS (33/33)",
        "2h00\tNon piazzata\tROSSI MARIO\tMATEMATICA\t2A\t\t\tS (33/33)",
    ]
    .join("\n")
}

/// Aule export with quoted headers
pub fn create_rooms_tsv() -> String {
    [
        "Nome\tCapienza\tQuantità\tOccupazione\t\"Tasso d'occup. potenziale\"",
        "_LabCloud_303\t\t1\t22h00\t26%",
    ]
    .join("\n")
}

pub fn create_teachers_tsv() -> String {
    [
        "Titolo\tCognome\tNome\tE-mail \tDisciplina",
        "Prof.\tBianchi\tSonia\tSonia.Bianchi@scuola.it\tAB24   Inglese",
    ]
    .join("\n")
}

pub fn create_classes_tsv() -> String {
    ["Nome\tAlunni inseriti\tLivelli", "1D\t25\t1°", "2A\t22\t2°"].join("\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}

/// Write the four default export files into `dir`
pub fn write_export_dir(dir: &Path) {
    std::fs::write(dir.join("Attività.csv"), create_activities_tsv()).unwrap();
    std::fs::write(dir.join("Aule.csv"), create_rooms_tsv()).unwrap();
    std::fs::write(dir.join("Docenti.csv"), create_teachers_tsv()).unwrap();
    std::fs::write(dir.join("Classi.csv"), create_classes_tsv()).unwrap();
}
