//! Error handling for EDT export processing.
//!
//! Distinguishes the errors a user can fix by re-exporting from EDT
//! (missing files, renamed columns, malformed cells) from unexpected
//! failures that point at the parser itself.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdtError {
    /// An export file could not be opened or read
    #[error("File non trovato o non leggibile: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from a table or row
    #[error(
        "La colonna obbligatoria '{column}' non è presente in '{table}'. Colonne trovate: {found:?}"
    )]
    MissingColumn {
        column: String,
        table: String,
        found: Vec<String>,
    },

    /// A mandatory cell does not follow the EDT token grammar
    #[error("Formato {field} non valido: '{value}'")]
    InvalidFormat { field: FieldKind, value: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TSV parsing error in file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which EDT token an [`EdtError::InvalidFormat`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Time,
    Duration,
    DayAndTime,
    DayName,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FieldKind::Time => "ora",
            FieldKind::Duration => "durata",
            FieldKind::DayAndTime => "'Giorno e ora'",
            FieldKind::DayName => "giorno",
        };
        f.write_str(label)
    }
}

impl EdtError {
    /// Create a malformed-value error for the given token
    pub fn invalid_format(field: FieldKind, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
        }
    }

    /// Create a missing-column error
    pub fn missing_column(
        column: impl Into<String>,
        table: impl Into<String>,
        found: Vec<String>,
    ) -> Self {
        Self::MissingColumn {
            column: column.into(),
            table: table.into(),
            found,
        }
    }

    /// Create a source-unavailable error
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with the path involved
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the exported data or settings rather than the parser.
    ///
    /// These are reported with a hint to re-check the EDT exports; everything
    /// else is treated as an unexpected failure.
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            EdtError::SourceUnavailable { .. }
                | EdtError::MissingColumn { .. }
                | EdtError::InvalidFormat { .. }
                | EdtError::Configuration { .. }
                | EdtError::ConfigParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EdtError>;
