//! Tests for EDT token normalization

use crate::app::models::TimeOfDay;


/// Helper to build a time of day in tests
pub fn hm(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}
