//! Application constants for the EDT export parser
//!
//! Column names, token literals, default file locations and the day-name
//! table used to read exports from EDT Monoposto.

// =============================================================================
// EDT Version
// =============================================================================

/// EDT release the column layout and token formats were taken from
pub const EDT_VERSION: &str = "EDT Monoposto 2025.2.5 (64bit), versione di consultazione";

// =============================================================================
// Token Literals
// =============================================================================

/// "Giorno e ora" value for lessons that have not been placed in the timetable
pub const UNPLACED_SENTINEL: &str = "Non piazzata";

/// Italian day names as written by EDT, Monday = 1 through Sunday = 7
pub const DAYS: [(&str, u8); 7] = [
    ("lunedì", 1),
    ("martedì", 2),
    ("mercoledì", 3),
    ("giovedì", 4),
    ("venerdì", 5),
    ("sabato", 6),
    ("domenica", 7),
];

/// Real minutes in one EDT "hour" at this institution.
///
/// EDT encodes durations as "1h00", "2h00", ...; each hour is one lesson
/// unit and the minute part of the token is not used.
pub const LESSON_UNIT_MINUTES: u32 = 50;

// =============================================================================
// Default File Locations
// =============================================================================

/// Directory holding the four table exports
pub const DEFAULT_INPUT_DIR: &str = "CSVFiles";

pub const DEFAULT_ACTIVITIES_FILE: &str = "Attività.csv";
pub const DEFAULT_ROOMS_FILE: &str = "Aule.csv";
pub const DEFAULT_TEACHERS_FILE: &str = "Docenti.csv";
pub const DEFAULT_CLASSES_FILE: &str = "Classi.csv";

/// JSON document written at the end of a run
pub const DEFAULT_OUTPUT_PATH: &str = "orario.json";

/// Config file name looked up under the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the user config directory
pub const APP_DIR_NAME: &str = "edt-parser";

// =============================================================================
// Table Names
// =============================================================================

/// Table labels used in error messages and logs
pub mod tables {
    pub const ACTIVITIES: &str = "Attività";
    pub const ROOMS: &str = "Aule";
    pub const TEACHERS: &str = "Docenti";
    pub const CLASSES: &str = "Classi";
}

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column headers as EDT writes them.
///
/// Some exports wrap headers containing an apostrophe in double quotes, so
/// optional columns are listed as ordered candidate sets.
pub mod columns {
    /// Attività table
    pub mod activities {
        pub const DURATION: &str = "Durata";
        pub const DAY_AND_TIME: &str = "Giorno e ora";
        pub const TEACHER: &str = "Docente";
        pub const SUBJECT: &str = "Materia";
        pub const CLASS: &str = "Classe";
        pub const ROOM: &str = "Aula";
        pub const WEEK: &str = "Settimana d'applicazione";
        pub const RECURRENCE: &str = "Periodicità";
    }

    /// Aule table
    pub mod rooms {
        pub const NAME: &str = "Nome";
        pub const CAPACITY: &[&str] = &["Capienza"];
        pub const QUANTITY: &[&str] = &["Quantità"];
        pub const OCCUPANCY: &[&str] = &["Occupazione"];
        pub const POTENTIAL_OCCUPANCY_RATE: &[&str] =
            &["Tasso d'occup. potenziale", "\"Tasso d'occup. potenziale\""];
        pub const PEAK_OCCUPANCY: &[&str] = &["Picco d'occupazione", "\"Picco d'occupazione\""];
    }

    /// Docenti table
    pub mod teachers {
        pub const LAST_NAME: &str = "Cognome";
        pub const FIRST_NAME: &str = "Nome";
        pub const TITLE: &[&str] = &["Titolo"];
        pub const EMAIL: &[&str] = &["E-mail", "E-mail "];
        pub const SUBJECT_AREA: &[&str] = &["Disciplina"];
        pub const WEEKLY_HOURS: &[&str] = &["Monte ore settimanale", "\"Monte ore settimanale\""];
        pub const YEARLY_HOURS: &[&str] = &["Monte ore annuale", "\"Monte ore annuale\""];
    }

    /// Classi table
    pub mod classes {
        pub const NAME: &str = "Nome";
        pub const ENROLLED_COUNT: &[&str] = &["Alunni inseriti", "\"Alunni inseriti\""];
        pub const STUDENT_COUNT: &[&str] = &["Numero di alunni", "\"Numero di alunni\""];
        pub const LEVEL: &[&str] = &["Livelli"];
        pub const STUDY_PLAN: &[&str] = &["Piano di studi", "\"Piano di studi\""];
        pub const PREFERRED_ROOM: &[&str] = &["Aula preferenziale", "\"Aula preferenziale\""];
    }
}

// =============================================================================
// Required Columns
// =============================================================================

/// Columns the loader checks for before the builder runs
pub mod required_columns {
    use super::columns::{activities, classes, rooms, teachers};

    pub const ACTIVITIES: &[&str] = &[
        activities::DURATION,
        activities::DAY_AND_TIME,
        activities::TEACHER,
        activities::SUBJECT,
        activities::CLASS,
        activities::ROOM,
        activities::WEEK,
        activities::RECURRENCE,
    ];

    pub const ROOMS: &[&str] = &[rooms::NAME];

    pub const TEACHERS: &[&str] = &[teachers::LAST_NAME, teachers::FIRST_NAME];

    pub const CLASSES: &[&str] = &[classes::NAME];
}

/// Look up the EDT day name, exact match only
pub fn day_number(name: &str) -> Option<u8> {
    DAYS.iter()
        .find(|(day, _)| *day == name)
        .map(|(_, number)| *number)
}
