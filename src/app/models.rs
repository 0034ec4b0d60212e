//! Data models for the normalized timetable
//!
//! Value records built from one EDT export batch. Field names are English in
//! Rust; the serialized keys keep the Italian names consumed by the room-map
//! viewer reading `orario.json`.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One exported table row: column header to raw cell value
pub type Row = HashMap<String, String>;

// =============================================================================
// Time of Day
// =============================================================================

/// Wall-clock time with minute precision, written as "HH:MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from hour and minute, `None` outside 00:00..=23:59
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Add minutes on a 24 hour clock, wrapping past midnight
    pub fn plus_minutes(self, minutes: u32) -> Self {
        let (time, _wrapped_secs) = self
            .0
            .overflowing_add_signed(Duration::minutes(i64::from(minutes)));
        Self(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M").map(Self)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Timetable Records
// =============================================================================

/// A placed lesson from the Attività table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Day of week, Monday = 1 through Sunday = 7
    #[serde(rename = "giorno")]
    pub day: u8,

    #[serde(rename = "inizio")]
    pub start: TimeOfDay,

    /// Always `start` plus `duration_minutes`
    #[serde(rename = "fine")]
    pub end: TimeOfDay,

    /// Lesson units times the institution's unit length
    #[serde(rename = "durata_min")]
    pub duration_minutes: u32,

    #[serde(rename = "docente")]
    pub teacher: String,

    #[serde(rename = "materia")]
    pub subject: String,

    #[serde(rename = "classe")]
    pub class_name: String,

    #[serde(rename = "aula")]
    pub room: String,

    /// Week the lesson is restricted to, if any
    #[serde(rename = "settimana")]
    pub week: Option<u32>,

    /// EDT periodicity text, e.g. "S (33/33)"
    #[serde(rename = "periodicita")]
    pub recurrence: String,
}

/// A room from the Aule table. Optional values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "capienza")]
    pub capacity: Option<String>,

    #[serde(rename = "quantita")]
    pub quantity: Option<String>,

    #[serde(rename = "occupazione")]
    pub occupancy: Option<String>,

    #[serde(rename = "tasso_occupazione_potenziale")]
    pub potential_occupancy_rate: Option<String>,

    #[serde(rename = "picco_occupazione")]
    pub peak_occupancy: Option<String>,
}

/// A teacher from the Docenti table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "titolo")]
    pub title: Option<String>,

    #[serde(rename = "cognome")]
    pub last_name: String,

    #[serde(rename = "nome")]
    pub first_name: String,

    pub email: Option<String>,

    #[serde(rename = "disciplina")]
    pub subject_area: Option<String>,

    #[serde(rename = "monte_ore_settimanale")]
    pub weekly_hours: Option<String>,

    #[serde(rename = "monte_ore_annuale")]
    pub yearly_hours: Option<String>,
}

/// A class (student group) from the Classi table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "alunni_inseriti")]
    pub enrolled_count: Option<String>,

    #[serde(rename = "numero_alunni")]
    pub student_count: Option<String>,

    #[serde(rename = "livello")]
    pub level: Option<String>,

    #[serde(rename = "piano_studi")]
    pub study_plan: Option<String>,

    #[serde(rename = "aula_preferenziale")]
    pub preferred_room: Option<String>,
}

/// Snapshot of one export batch, ready for serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "lezioni")]
    pub lessons: Vec<Lesson>,

    #[serde(rename = "aule")]
    pub rooms: Vec<Room>,

    #[serde(rename = "docenti")]
    pub teachers: Vec<Teacher>,

    #[serde(rename = "classi")]
    pub classes: Vec<Class>,
}
