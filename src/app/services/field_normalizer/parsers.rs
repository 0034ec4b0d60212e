//! Token parsers for time, duration, day-and-time and week cells

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::TimeOfDay;
use crate::constants::{LESSON_UNIT_MINUTES, UNPLACED_SENTINEL, day_number};
use crate::error::{EdtError, FieldKind, Result};

/// "HHhMM", anchored
static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})h([0-9]{2})$").expect("Invalid time regex"));

/// "NhMM" with any number of unit digits, anchored
static DURATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)h([0-9]{2})$").expect("Invalid duration regex"));

/// First run of digits anywhere in the cell
// ASCII only, unlike `\d`; EDT writes week numbers with ASCII digits
static WEEK_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid week regex"));

/// Parse an EDT time token such as "07h55"
pub fn parse_time(token: &str) -> Result<TimeOfDay> {
    let captures = TIME_REGEX
        .captures(token)
        .ok_or_else(|| EdtError::invalid_format(FieldKind::Time, token))?;

    let hour: u32 = captures[1]
        .parse()
        .map_err(|_| EdtError::invalid_format(FieldKind::Time, token))?;
    let minute: u32 = captures[2]
        .parse()
        .map_err(|_| EdtError::invalid_format(FieldKind::Time, token))?;

    TimeOfDay::from_hm(hour, minute).ok_or_else(|| EdtError::invalid_format(FieldKind::Time, token))
}

/// Parse an EDT duration token into real minutes using the default lesson unit
pub fn parse_duration(token: &str) -> Result<u32> {
    parse_duration_with_unit(token, LESSON_UNIT_MINUTES)
}

/// Parse an EDT duration token such as "2h00" into real minutes.
///
/// The hour count is a number of lesson units of `unit_minutes` each. The
/// two minute digits are matched but not used: EDT's own minute value is
/// replaced by the institution's unit length.
pub fn parse_duration_with_unit(token: &str, unit_minutes: u32) -> Result<u32> {
    let captures = DURATION_REGEX
        .captures(token)
        .ok_or_else(|| EdtError::invalid_format(FieldKind::Duration, token))?;

    let units: u32 = captures[1]
        .parse()
        .map_err(|_| EdtError::invalid_format(FieldKind::Duration, token))?;

    units
        .checked_mul(unit_minutes)
        .ok_or_else(|| EdtError::invalid_format(FieldKind::Duration, token))
}

/// Parse the "Giorno e ora" cell.
///
/// Returns `Ok(None)` for the "Non piazzata" sentinel (lesson not yet
/// scheduled). Otherwise the cell must be a day name from the EDT table
/// followed by a time token, separated by whitespace.
pub fn parse_day_and_time(token: &str) -> Result<Option<(u8, TimeOfDay)>> {
    if token == UNPLACED_SENTINEL {
        return Ok(None);
    }

    let parts: Vec<&str> = token.split_whitespace().collect();
    let [day_name, time_token] = parts.as_slice() else {
        return Err(EdtError::invalid_format(FieldKind::DayAndTime, token));
    };

    let day = day_number(day_name)
        .ok_or_else(|| EdtError::invalid_format(FieldKind::DayName, *day_name))?;

    Ok(Some((day, parse_time(time_token)?)))
}

/// Extract the week number from "Settimana d'applicazione".
///
/// Takes the first digit run in the cell. Empty cells and cells without
/// digits mean the lesson has no week restriction, not a malformed value.
pub fn parse_week(token: &str) -> Option<u32> {
    if token.is_empty() {
        return None;
    }

    WEEK_NUMBER_REGEX
        .find(token)
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Add minutes to a time of day on a 24 hour clock
pub fn add_minutes(time: TimeOfDay, minutes: u32) -> TimeOfDay {
    time.plus_minutes(minutes)
}
