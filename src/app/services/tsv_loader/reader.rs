//! Tab-separated table reading
//!
//! EDT's consultation build copies tables to the clipboard with TAB as the
//! separator; the user pastes them into UTF-8 text files. Files keep the
//! `.csv` extension but are tab-delimited.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::app::models::Row;
use crate::error::{EdtError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Load a TSV file into rows, checking the required columns are present.
///
/// `table` labels the file in error messages.
pub fn load_tsv(path: &Path, table: &str, required_columns: &[&str]) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|e| EdtError::source_unavailable(path, e))?;
    read_tsv(file, path, table, required_columns)
}

/// Read TSV content from any reader; `path` is used for error context only.
///
/// Quote characters are ordinary text: cells and headers are kept exactly
/// as exported, and a stray `"` never spans tabs or lines. Rows shorter
/// than the header get empty strings for the missing cells; cells beyond
/// the last header are dropped.
pub fn read_tsv<R: Read>(
    reader: R,
    path: &Path,
    table: &str,
    required_columns: &[&str],
) -> Result<Vec<Row>> {
    let mut tsv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let headers = read_headers(&mut tsv_reader, path)?;
    check_required_columns(&headers, table, required_columns)?;

    let mut rows = Vec::new();
    for result in tsv_reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;

        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let value = record.get(index).unwrap_or_default();
                (header.clone(), value.to_string())
            })
            .collect();
        rows.push(row);
    }

    debug!(
        "Read {} rows with {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );

    Ok(rows)
}

/// Read the header record, dropping a leading UTF-8 byte order mark
fn read_headers<R: Read>(tsv_reader: &mut csv::Reader<R>, path: &Path) -> Result<Vec<String>> {
    let headers = tsv_reader.headers().map_err(|e| csv_error(path, e))?;

    Ok(headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            if index == 0 {
                header.trim_start_matches(UTF8_BOM).to_string()
            } else {
                header.to_string()
            }
        })
        .collect())
}

/// Fail on the first required column missing from the header
pub fn check_required_columns(headers: &[String], table: &str, required: &[&str]) -> Result<()> {
    match required
        .iter()
        .find(|column| !headers.iter().any(|header| header.as_str() == **column))
    {
        Some(column) => Err(EdtError::missing_column(*column, table, headers.to_vec())),
        None => Ok(()),
    }
}

fn csv_error(path: &Path, source: csv::Error) -> EdtError {
    EdtError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
