//! JSON export of the normalized model
//!
//! The document is pretty-printed with two-space indentation and keeps
//! accented characters as UTF-8 so it stays readable and diffable.

use std::path::Path;

use tracing::debug;

use crate::app::models::Model;
use crate::error::{EdtError, Result};

/// Render the model as a pretty-printed JSON document with a trailing newline
pub fn to_json_string(model: &Model) -> Result<String> {
    let mut json = serde_json::to_string_pretty(model)?;
    json.push('\n');
    Ok(json)
}

/// Write the model to `path`, creating parent directories as needed.
///
/// Returns the number of bytes written.
pub fn export_json(model: &Model, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EdtError::io(parent, e))?;
    }

    let json = to_json_string(model)?;
    std::fs::write(path, &json).map_err(|e| EdtError::io(path, e))?;

    debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(json.len() as u64)
}
