//! Upcoming-interview alerts.
//!
//! Recomputed from the record list on every call; there is no per-record
//! "seen" state, so closing the alert list does not hide anything.

use crate::models::interview::Interview;
use chrono::{Duration, NaiveDateTime};

pub const DEFAULT_WINDOW_MINUTES: i64 = 120;

/// `now < start <= now + window`. A window reaching past the calendar range
/// has no upper edge.
pub fn is_upcoming(iv: &Interview, now: NaiveDateTime, window: Duration) -> bool {
    let start = iv.effective_start();
    start > now && now.checked_add_signed(window).is_none_or(|edge| start <= edge)
}

/// Interviews starting within the window, soonest first.
pub fn upcoming(list: &[Interview], now: NaiveDateTime, window: Duration) -> Vec<&Interview> {
    let mut out: Vec<&Interview> = list
        .iter()
        .filter(|iv| is_upcoming(iv, now, window))
        .collect();
    out.sort_by_key(|iv| iv.effective_start());
    out
}

/// Whole minutes from `now` until the interview starts (negative once started).
pub fn minutes_until(iv: &Interview, now: NaiveDateTime) -> i64 {
    (iv.effective_start() - now).num_minutes()
}
