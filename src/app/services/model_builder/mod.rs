//! Model builder for EDT table exports
//!
//! Turns the rows of the four EDT tables into the normalized [`Model`](crate::app::models::Model).
//!
//! ## Architecture
//!
//! - [`builder`] - Per-table record construction and model assembly
//! - [`column_lookup`] - Mandatory cell access and ordered candidate lookups
//! - [`stats`] - Counts reported at the end of a run
//!
//! ## Usage
//!
//! ```rust
//! use edt_parser::app::models::Row;
//! use edt_parser::app::services::model_builder::ModelBuilder;
//!
//! # fn example(activities: Vec<Row>, rooms: Vec<Row>, teachers: Vec<Row>, classes: Vec<Row>) -> edt_parser::Result<()> {
//! let builder = ModelBuilder::new(50);
//! let (model, stats) = builder.build_model_with_stats(&activities, &rooms, &teachers, &classes)?;
//!
//! println!("{} lessons, {} unplaced", model.lessons.len(), stats.unplaced_skipped);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod column_lookup;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use builder::{
    ModelBuilder, build_classes, build_lessons, build_model, build_rooms, build_teachers,
};
pub use column_lookup::{first_non_empty, required_field};
pub use stats::BuildStats;
