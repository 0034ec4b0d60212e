//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the CLI.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ACTIVITIES_FILE, DEFAULT_CLASSES_FILE,
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH, DEFAULT_ROOMS_FILE, DEFAULT_TEACHERS_FILE,
    LESSON_UNIT_MINUTES,
};
use crate::error::{EdtError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Directory holding the exported tables
    pub input_dir: PathBuf,

    /// Attività export file name, relative to `input_dir`
    pub activities_file: String,

    /// Aule export file name
    pub rooms_file: String,

    /// Docenti export file name
    pub teachers_file: String,

    /// Classi export file name
    pub classes_file: String,

    /// Where the JSON document is written
    pub output_path: PathBuf,

    /// Real minutes per EDT hour
    pub lesson_unit_minutes: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            activities_file: DEFAULT_ACTIVITIES_FILE.to_string(),
            rooms_file: DEFAULT_ROOMS_FILE.to_string(),
            teachers_file: DEFAULT_TEACHERS_FILE.to_string(),
            classes_file: DEFAULT_CLASSES_FILE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            lesson_unit_minutes: LESSON_UNIT_MINUTES,
        }
    }
}

impl ParserConfig {
    /// Default config file location, e.g. `~/.config/edt-parser/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| EdtError::configuration("Could not determine user config directory"))
    }

    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EdtError::source_unavailable(path, e))?;
        toml::from_str(&content).map_err(|source| EdtError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load defaults overlaid with an explicit file, or the default file when it exists
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            debug!("Loading config file {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => {
                debug!("Loading default config file {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Set the input directory
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    /// Set the output path
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Set the lesson unit length
    pub fn with_lesson_unit_minutes(mut self, minutes: u32) -> Self {
        self.lesson_unit_minutes = minutes;
        self
    }

    pub fn activities_path(&self) -> PathBuf {
        self.input_dir.join(&self.activities_file)
    }

    pub fn rooms_path(&self) -> PathBuf {
        self.input_dir.join(&self.rooms_file)
    }

    pub fn teachers_path(&self) -> PathBuf {
        self.input_dir.join(&self.teachers_file)
    }

    pub fn classes_path(&self) -> PathBuf {
        self.input_dir.join(&self.classes_file)
    }

    /// Validate settings before a run
    pub fn validate(&self) -> Result<()> {
        if self.lesson_unit_minutes == 0 {
            return Err(EdtError::configuration(
                "lesson_unit_minutes must be greater than zero",
            ));
        }

        for (key, name) in [
            ("activities_file", &self.activities_file),
            ("rooms_file", &self.rooms_file),
            ("teachers_file", &self.teachers_file),
            ("classes_file", &self.classes_file),
        ] {
            if name.trim().is_empty() {
                return Err(EdtError::configuration(format!("{} must not be empty", key)));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(EdtError::configuration("output_path must not be empty"));
        }

        Ok(())
    }
}
