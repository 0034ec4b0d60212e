//! Test utilities for model builder testing
//!
//! Row fixtures shaped like the tables EDT exports.

use crate::app::models::Row;


/// Build a row from (column, value) pairs
pub fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect()
}

/// Attività row with every required column
pub fn activity_row(day_and_time: &str, duration: &str, week: &str) -> Row {
    row(&[
        ("Durata", duration),
        ("Giorno e ora", day_and_time),
        ("Docente", "BIANCHI SONIA"),
        ("Materia", "INGLESE"),
        ("Classe", "1D"),
        ("Aula", "_LabCloud_303"),
        ("Settimana d'applicazione", week),
        ("Periodicità", "S (33/33)"),
    ])
}

/// Aule row as exported with quoted headers
pub fn room_row(name: &str) -> Row {
    row(&[
        ("Nome", name),
        ("Capienza", ""),
        ("Quantità", "1"),
        ("Occupazione", "22h00"),
        ("\"Tasso d'occup. potenziale\"", "26%"),
        ("\"Picco d'occupazione\"", ""),
    ])
}

/// Docenti row with the trailing-space e-mail header
pub fn teacher_row(last_name: &str, first_name: &str) -> Row {
    row(&[
        ("Titolo", "Prof."),
        ("Cognome", last_name),
        ("Nome", first_name),
        ("E-mail ", "Sonia.Bianchi@scuola.it"),
        ("Disciplina", "AB24   Inglese"),
        ("Monte ore settimanale", "18h00"),
        ("\"Monte ore annuale\"", "594h00"),
    ])
}

/// Classi row
pub fn class_row(name: &str) -> Row {
    row(&[
        ("Nome", name),
        ("Alunni inseriti", "25"),
        ("\"Numero di alunni\"", "0"),
        ("Livelli", "1°"),
        ("Piano di studi", "LICEO SCIENTIFICO"),
        ("Aula preferenziale", ""),
    ])
}
