//! EDT Parser Library
//!
//! Converts the timetable tables exported from EDT Monoposto (tab-separated
//! copies of the Attività, Aule, Docenti and Classi grids) into one
//! normalized JSON document.
//!
//! This library provides tools for:
//! - Loading the TSV exports with header checks and BOM handling
//! - Normalizing EDT's day, time, duration and week notations
//! - Building lessons, rooms, teachers and classes from raw rows
//! - Writing the model as a pretty-printed UTF-8 JSON document
//!
//! ```
//! use edt_parser::app::services::field_normalizer::parse_duration;
//!
//! // One EDT lesson hour lasts 50 minutes
//! assert_eq!(parse_duration("2h00").unwrap(), 100);
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_normalizer;
        pub mod json_exporter;
        pub mod model_builder;
        pub mod tsv_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Class, Lesson, Model, Room, Row, Teacher, TimeOfDay};
pub use config::ParserConfig;
pub use error::{EdtError, EdtError as Error, FieldKind, Result};
