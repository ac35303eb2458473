//! Time utilities: parsing HH:MM, slot arithmetic without day-wrap, 12-hour display.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Minimum width of an interview slot, in minutes.
pub const MIN_SLOT_MINUTES: i64 = 10;

/// Step between the end times offered for a given start.
pub const END_CANDIDATE_STEP: i64 = 30;

const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn minutes_since_midnight(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    minutes_since_midnight(end) - minutes_since_midnight(start)
}

/// Shift a wall-clock time by `delta` minutes.
/// Returns `None` when the result leaves the current day (no wrap past 24:00).
pub fn add_minutes(t: NaiveTime, delta: i64) -> Option<NaiveTime> {
    let total = minutes_since_midnight(t) + delta;
    if !(0..MINUTES_PER_DAY).contains(&total) {
        return None;
    }
    NaiveTime::from_hms_opt((total / 60) as u32, (total % 60) as u32, 0)
}

/// "h:mm AM", display only. Never stored or compared.
pub fn to_12_hour(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// "h:mm AM - h:mm PM"
pub fn slot_label(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", to_12_hour(start), to_12_hour(end))
}

/// End time proposed when only a start is chosen: the minimum slot width.
pub fn default_end_time(start: NaiveTime) -> Option<NaiveTime> {
    add_minutes(start, MIN_SLOT_MINUTES)
}

/// End times offered for a start, in 30-minute increments up to the end of the day.
pub fn end_time_candidates(start: NaiveTime) -> Vec<NaiveTime> {
    (1..)
        .map(|n| add_minutes(start, n * END_CANDIDATE_STEP))
        .take_while(Option::is_some)
        .flatten()
        .collect()
}

pub fn format_minutes(mins: i64) -> String {
    if mins < 60 {
        format!("{} min", mins)
    } else if mins % 60 == 0 {
        format!("{}h", mins / 60)
    } else {
        format!("{}h {:02}m", mins / 60, mins % 60)
    }
}
