//! Column lookups over loaded rows
//!
//! EDT is inconsistent about how it writes some headers (quoted when they
//! contain an apostrophe, trailing spaces), so optional fields are read from
//! an ordered list of candidate column names.

use crate::app::models::Row;
use crate::error::{EdtError, Result};

/// Return the first candidate column holding a non-blank value.
///
/// A cell counts as present when it is non-empty after trimming; the value
/// returned is the cell content as exported.
pub fn first_non_empty(row: &Row, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|column| row.get(*column))
        .find(|value| !value.trim().is_empty())
        .cloned()
}

/// Get a mandatory cell, failing if the row has no such column.
///
/// The loader checks headers up front; this guards rows handed to the
/// builder from elsewhere. Empty values are returned as-is.
pub fn required_field<'a>(row: &'a Row, column: &str, table: &str) -> Result<&'a str> {
    row.get(column).map(String::as_str).ok_or_else(|| {
        let mut found: Vec<String> = row.keys().cloned().collect();
        found.sort();
        EdtError::missing_column(column, table, found)
    })
}
