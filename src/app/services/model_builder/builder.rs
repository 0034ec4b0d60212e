//! Model assembly from the four EDT tables
//!
//! Each table is built independently; no cross-table checks are made (a
//! lesson's room need not appear in the room list). The first malformed
//! mandatory cell aborts the whole build, so a partial model is never
//! returned.

use tracing::{debug, info};

use super::column_lookup::{first_non_empty, required_field};
use super::stats::BuildStats;
use crate::app::models::{Class, Lesson, Model, Room, Row, Teacher};
use crate::app::services::field_normalizer::{
    add_minutes, parse_day_and_time, parse_duration_with_unit, parse_week,
};
use crate::constants::columns::{activities, classes, rooms, teachers};
use crate::constants::{LESSON_UNIT_MINUTES, tables};
use crate::error::Result;

/// Builds the normalized [`Model`] from loaded rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelBuilder {
    lesson_unit_minutes: u32,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new(LESSON_UNIT_MINUTES)
    }
}

impl ModelBuilder {
    /// Create a builder with the institution's lesson unit length in minutes
    pub fn new(lesson_unit_minutes: u32) -> Self {
        Self {
            lesson_unit_minutes,
        }
    }

    /// Build lessons from Attività rows, dropping unplaced ones
    pub fn build_lessons(&self, rows: &[Row]) -> Result<Vec<Lesson>> {
        self.collect_lessons(rows).map(|(lessons, _)| lessons)
    }

    /// Build rooms from Aule rows
    pub fn build_rooms(&self, rows: &[Row]) -> Result<Vec<Room>> {
        rows.iter()
            .map(|row| {
                Ok(Room {
                    name: required_field(row, rooms::NAME, tables::ROOMS)?.to_string(),
                    capacity: first_non_empty(row, rooms::CAPACITY),
                    quantity: first_non_empty(row, rooms::QUANTITY),
                    occupancy: first_non_empty(row, rooms::OCCUPANCY),
                    potential_occupancy_rate: first_non_empty(
                        row,
                        rooms::POTENTIAL_OCCUPANCY_RATE,
                    ),
                    peak_occupancy: first_non_empty(row, rooms::PEAK_OCCUPANCY),
                })
            })
            .collect()
    }

    /// Build teachers from Docenti rows
    pub fn build_teachers(&self, rows: &[Row]) -> Result<Vec<Teacher>> {
        rows.iter()
            .map(|row| {
                Ok(Teacher {
                    title: first_non_empty(row, teachers::TITLE),
                    last_name: required_field(row, teachers::LAST_NAME, tables::TEACHERS)?
                        .to_string(),
                    first_name: required_field(row, teachers::FIRST_NAME, tables::TEACHERS)?
                        .to_string(),
                    email: first_non_empty(row, teachers::EMAIL),
                    subject_area: first_non_empty(row, teachers::SUBJECT_AREA),
                    weekly_hours: first_non_empty(row, teachers::WEEKLY_HOURS),
                    yearly_hours: first_non_empty(row, teachers::YEARLY_HOURS),
                })
            })
            .collect()
    }

    /// Build classes from Classi rows
    pub fn build_classes(&self, rows: &[Row]) -> Result<Vec<Class>> {
        rows.iter()
            .map(|row| {
                Ok(Class {
                    name: required_field(row, classes::NAME, tables::CLASSES)?.to_string(),
                    enrolled_count: first_non_empty(row, classes::ENROLLED_COUNT),
                    student_count: first_non_empty(row, classes::STUDENT_COUNT),
                    level: first_non_empty(row, classes::LEVEL),
                    study_plan: first_non_empty(row, classes::STUDY_PLAN),
                    preferred_room: first_non_empty(row, classes::PREFERRED_ROOM),
                })
            })
            .collect()
    }

    /// Build the combined model from the four tables
    pub fn build_model(
        &self,
        activity_rows: &[Row],
        room_rows: &[Row],
        teacher_rows: &[Row],
        class_rows: &[Row],
    ) -> Result<Model> {
        self.build_model_with_stats(activity_rows, room_rows, teacher_rows, class_rows)
            .map(|(model, _)| model)
    }

    /// Build the combined model and report what was kept and skipped
    pub fn build_model_with_stats(
        &self,
        activity_rows: &[Row],
        room_rows: &[Row],
        teacher_rows: &[Row],
        class_rows: &[Row],
    ) -> Result<(Model, BuildStats)> {
        let (lessons, unplaced_skipped) = self.collect_lessons(activity_rows)?;
        let model = Model {
            lessons,
            rooms: self.build_rooms(room_rows)?,
            teachers: self.build_teachers(teacher_rows)?,
            classes: self.build_classes(class_rows)?,
        };

        let stats = BuildStats {
            activity_rows: activity_rows.len(),
            lessons_built: model.lessons.len(),
            unplaced_skipped,
            rooms_built: model.rooms.len(),
            teachers_built: model.teachers.len(),
            classes_built: model.classes.len(),
        };

        info!(
            "Built model: {} lessons ({} unplaced skipped), {} rooms, {} teachers, {} classes",
            stats.lessons_built,
            stats.unplaced_skipped,
            stats.rooms_built,
            stats.teachers_built,
            stats.classes_built
        );

        Ok((model, stats))
    }

    /// Build lessons and count the unplaced rows that were dropped
    fn collect_lessons(&self, rows: &[Row]) -> Result<(Vec<Lesson>, usize)> {
        let mut lessons = Vec::with_capacity(rows.len());
        let mut unplaced = 0;

        for (index, row) in rows.iter().enumerate() {
            match self.build_lesson(row)? {
                Some(lesson) => lessons.push(lesson),
                None => {
                    unplaced += 1;
                    debug!("Skipping unplaced lesson at row {}", index + 1);
                }
            }
        }

        Ok((lessons, unplaced))
    }

    /// Normalize one Attività row, `None` when the lesson is not placed
    fn build_lesson(&self, row: &Row) -> Result<Option<Lesson>> {
        let field = |column: &str| required_field(row, column, tables::ACTIVITIES);

        let Some((day, start)) = parse_day_and_time(field(activities::DAY_AND_TIME)?)? else {
            return Ok(None);
        };

        let duration_minutes =
            parse_duration_with_unit(field(activities::DURATION)?, self.lesson_unit_minutes)?;

        Ok(Some(Lesson {
            day,
            start,
            end: add_minutes(start, duration_minutes),
            duration_minutes,
            teacher: field(activities::TEACHER)?.to_string(),
            subject: field(activities::SUBJECT)?.to_string(),
            class_name: field(activities::CLASS)?.to_string(),
            room: field(activities::ROOM)?.to_string(),
            week: parse_week(field(activities::WEEK)?),
            recurrence: field(activities::RECURRENCE)?.to_string(),
        }))
    }
}

// Free functions using the default lesson unit

/// Build lessons with the default lesson unit
pub fn build_lessons(rows: &[Row]) -> Result<Vec<Lesson>> {
    ModelBuilder::default().build_lessons(rows)
}

pub fn build_rooms(rows: &[Row]) -> Result<Vec<Room>> {
    ModelBuilder::default().build_rooms(rows)
}

pub fn build_teachers(rows: &[Row]) -> Result<Vec<Teacher>> {
    ModelBuilder::default().build_teachers(rows)
}

pub fn build_classes(rows: &[Row]) -> Result<Vec<Class>> {
    ModelBuilder::default().build_classes(rows)
}

/// Build the combined model with the default lesson unit
pub fn build_model(
    activity_rows: &[Row],
    room_rows: &[Row],
    teacher_rows: &[Row],
    class_rows: &[Row],
) -> Result<Model> {
    ModelBuilder::default().build_model(activity_rows, room_rows, teacher_rows, class_rows)
}
