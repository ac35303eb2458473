//! Move an interview to another date/start, keeping its duration.
//! The calendar "drag and drop" of the dashboard, as a single operation.

use crate::core::store::RecordStore;
use crate::db::storage::SnapshotStorage;
use crate::errors::{AppError, AppResult};
use crate::models::interview::Interview;
use crate::utils::time;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn reschedule<S: SnapshotStorage>(
    store: &mut RecordStore<S>,
    id: &str,
    new_date: NaiveDate,
    new_start: NaiveTime,
    now: NaiveDateTime,
) -> AppResult<Interview> {
    let existing = store
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    if new_date < now.date() {
        return Err(AppError::Validation(
            "Cannot move an interview to a past date.".into(),
        ));
    }
    if new_date == now.date() && new_start < now.time() {
        return Err(AppError::Validation(
            "Cannot move an interview to a time that has already passed today.".into(),
        ));
    }

    let new_end = time::add_minutes(new_start, existing.duration_minutes()).ok_or_else(|| {
        AppError::Validation("The moved interview would run past midnight.".into())
    })?;

    let moved = Interview {
        date: new_date,
        time_slot_start: new_start,
        time_slot_end: new_end,
        ..existing
    };

    store.update(moved.clone())?;
    Ok(moved)
}
