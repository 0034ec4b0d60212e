//! Loading the four EDT tables of one export batch

use tracing::info;

use super::reader::load_tsv;
use crate::app::models::Row;
use crate::config::ParserConfig;
use crate::constants::{required_columns, tables};
use crate::error::Result;

/// Raw rows of the Attività, Aule, Docenti and Classi exports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTables {
    pub activities: Vec<Row>,
    pub rooms: Vec<Row>,
    pub teachers: Vec<Row>,
    pub classes: Vec<Row>,
}

impl ExportTables {
    /// Load all four tables from the configured input directory.
    ///
    /// Stops at the first file that is missing or lacks a required column.
    pub fn load(config: &ParserConfig) -> Result<Self> {
        let activities_path = config.activities_path();
        info!("Caricamento '{}'…", activities_path.display());
        let activities = load_tsv(
            &activities_path,
            tables::ACTIVITIES,
            required_columns::ACTIVITIES,
        )?;

        let rooms_path = config.rooms_path();
        info!("Caricamento '{}'…", rooms_path.display());
        let rooms = load_tsv(&rooms_path, tables::ROOMS, required_columns::ROOMS)?;

        let teachers_path = config.teachers_path();
        info!("Caricamento '{}'…", teachers_path.display());
        let teachers = load_tsv(&teachers_path, tables::TEACHERS, required_columns::TEACHERS)?;

        let classes_path = config.classes_path();
        info!("Caricamento '{}'…", classes_path.display());
        let classes = load_tsv(&classes_path, tables::CLASSES, required_columns::CLASSES)?;

        Ok(Self {
            activities,
            rooms,
            teachers,
            classes,
        })
    }

    /// Row counts in table order: activities, rooms, teachers, classes
    pub fn row_counts(&self) -> [(&'static str, usize); 4] {
        [
            (tables::ACTIVITIES, self.activities.len()),
            (tables::ROOMS, self.rooms.len()),
            (tables::TEACHERS, self.teachers.len()),
            (tables::CLASSES, self.classes.len()),
        ]
    }
}
