//! TSV loader for EDT table exports
//!
//! Reads the tab-delimited files pasted from EDT into [`Row`](crate::app::models::Row)
//! maps and checks that the columns the builder relies on are present.
//!
//! - [`reader`] - Single-file reading and header checks
//! - [`tables`] - Loading the four tables of an export batch

pub mod reader;
pub mod tables;

#[cfg(test)]
pub mod tests;

pub use reader::{check_required_columns, load_tsv, read_tsv};
pub use tables::ExportTables;
