//! Conflict detection between a proposed slot and the existing records.
//!
//! The policy is exact-match: two records collide only when they share the
//! date, the same start AND end time, and either the candidate or the
//! interviewer. Overlapping but different slots (10:00–10:10 vs 10:05–10:15)
//! are accepted.

use crate::models::interview::{Interview, NewInterview};
use chrono::{NaiveDate, NaiveTime};

/// The fields of a record the checker compares.
#[derive(Debug, Clone, Copy)]
pub struct SlotClaim<'a> {
    /// Set on update so the record does not collide with its own stored copy.
    pub id: Option<&'a str>,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub candidate: &'a str,
    pub interviewer: &'a str,
}

impl<'a> From<&'a Interview> for SlotClaim<'a> {
    fn from(iv: &'a Interview) -> Self {
        Self {
            id: Some(&iv.id),
            date: iv.date,
            start: iv.time_slot_start,
            end: iv.time_slot_end,
            candidate: &iv.candidate,
            interviewer: &iv.interviewer,
        }
    }
}

impl<'a> From<&'a NewInterview> for SlotClaim<'a> {
    fn from(iv: &'a NewInterview) -> Self {
        Self {
            id: None,
            date: iv.date,
            start: iv.time_slot_start,
            end: iv.time_slot_end,
            candidate: &iv.candidate,
            interviewer: &iv.interviewer,
        }
    }
}

pub fn collides(claim: &SlotClaim<'_>, other: &Interview) -> bool {
    if claim.id == Some(other.id.as_str()) {
        return false;
    }

    other.date == claim.date
        && other.time_slot_start == claim.start
        && other.time_slot_end == claim.end
        && (other.candidate == claim.candidate || other.interviewer == claim.interviewer)
}

/// First existing record the claim collides with.
pub fn find_conflict<'r>(claim: &SlotClaim<'_>, existing: &'r [Interview]) -> Option<&'r Interview> {
    existing.iter().find(|r| collides(claim, r))
}

pub fn has_conflict(claim: &SlotClaim<'_>, existing: &[Interview]) -> bool {
    find_conflict(claim, existing).is_some()
}

/// Human readable reason, naming who is double-booked.
pub fn describe(claim: &SlotClaim<'_>, other: &Interview) -> String {
    let who = if other.candidate == claim.candidate {
        format!("candidate '{}'", other.candidate)
    } else {
        format!("interviewer '{}'", other.interviewer)
    };

    format!(
        "Candidate or Interviewer is already booked at this time ({} on {} {}, interview {}).",
        who,
        other.date_str(),
        other.slot_label(),
        other.id
    )
}
