//! Input validation for interview drafts and slots.
//! Every check here runs before any mutation of the record store.

use crate::errors::{AppError, AppResult};
use crate::models::interview::{InterviewDraft, NewInterview};
use crate::utils::time::{self, MIN_SLOT_MINUTES};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn invalid<T>(msg: &str) -> AppResult<T> {
    Err(AppError::Validation(msg.to_string()))
}

/// Trimmed, non-empty, single-line display name.
pub fn validate_name(label: &str, value: Option<&str>) -> AppResult<String> {
    match value.map(str::trim) {
        Some(v) if v.chars().any(char::is_control) => Err(AppError::Validation(format!(
            "{} name must not contain control characters.",
            label
        ))),
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::Validation(format!("{} name is required.", label))),
    }
}

/// End strictly after start and at least the minimum slot width.
pub fn validate_slot(start: NaiveTime, end: NaiveTime) -> AppResult<()> {
    let width = time::minutes_between(start, end);
    if width <= 0 {
        return invalid("End time must be later than start time.");
    }
    if width < MIN_SLOT_MINUTES {
        return invalid("Time slot must be at least 10 minutes.");
    }
    Ok(())
}

/// Pick the end time for a start: the explicit one when given, otherwise
/// start + minimum slot.
pub fn resolve_end(start: NaiveTime, end: Option<NaiveTime>) -> AppResult<NaiveTime> {
    match end {
        Some(e) => Ok(e),
        None => time::default_end_time(start).ok_or_else(|| {
            AppError::Validation("Start time too late to allow a 10 minute slot.".to_string())
        }),
    }
}

/// Turn a draft into a complete record, or report the first missing/invalid field.
pub fn validate_draft(draft: &InterviewDraft) -> AppResult<NewInterview> {
    let candidate = validate_name("Candidate", draft.candidate.as_deref())?;
    let interviewer = validate_name("Interviewer", draft.interviewer.as_deref())?;

    let Some(date) = draft.date else {
        return invalid("Interview date is required.");
    };

    let (Some(start), Some(end)) = (draft.time_slot_start, draft.time_slot_end) else {
        return invalid("Both start and end times are required.");
    };
    validate_slot(start, end)?;

    let Some(interview_type) = draft.interview_type else {
        return invalid("Interview type is required.");
    };

    Ok(NewInterview {
        candidate,
        interviewer,
        date,
        time_slot_start: start,
        time_slot_end: end,
        interview_type,
    })
}

/// Re-check a record that is already structurally complete, returning it with
/// trimmed names.
pub fn validate_record(record: NewInterview) -> AppResult<NewInterview> {
    let candidate = validate_name("Candidate", Some(record.candidate.as_str()))?;
    let interviewer = validate_name("Interviewer", Some(record.interviewer.as_str()))?;
    validate_slot(record.time_slot_start, record.time_slot_end)?;

    Ok(NewInterview {
        candidate,
        interviewer,
        ..record
    })
}

/// New interviews cannot start in the past.
pub fn ensure_not_past(date: NaiveDate, start: NaiveTime, now: NaiveDateTime) -> AppResult<()> {
    if date < now.date() {
        return invalid("Cannot schedule an interview on a past date.");
    }
    if date == now.date() && start < now.time() {
        return invalid("Start time is already past for today.");
    }
    Ok(())
}
