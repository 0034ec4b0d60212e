//! Build statistics for the run summary

use serde::{Deserialize, Serialize};

/// Row and record counts for one model build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Rows read from the Attività table
    pub activity_rows: usize,

    /// Lessons placed in the timetable and kept
    pub lessons_built: usize,

    /// Lessons dropped because they are marked "Non piazzata"
    pub unplaced_skipped: usize,

    pub rooms_built: usize,
    pub teachers_built: usize,
    pub classes_built: usize,
}

impl BuildStats {
    /// Total records across the four lists
    pub fn total_records(&self) -> usize {
        self.lessons_built + self.rooms_built + self.teachers_built + self.classes_built
    }

    /// Share of activity rows that were placed, as a percentage
    pub fn placement_rate(&self) -> f64 {
        if self.activity_rows == 0 {
            0.0
        } else {
            (self.lessons_built as f64 / self.activity_rows as f64) * 100.0
        }
    }
}
