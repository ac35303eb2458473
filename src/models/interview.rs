use super::interview_type::InterviewType;
use crate::utils::time;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled interview, as stored in the `interviews` snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub candidate: String,
    pub interviewer: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub time_slot_start: NaiveTime, // "HH:MM"
    #[serde(with = "hhmm")]
    pub time_slot_end: NaiveTime, // "HH:MM"
    pub interview_type: InterviewType,
}

/// An interview that has not been assigned an id yet (input of `add`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterview {
    pub candidate: String,
    pub interviewer: String,
    pub date: NaiveDate,
    pub time_slot_start: NaiveTime,
    pub time_slot_end: NaiveTime,
    pub interview_type: InterviewType,
}

/// Partially filled interview, as collected from command-line flags before
/// validation. Every field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewDraft {
    pub candidate: Option<String>,
    pub interviewer: Option<String>,
    pub date: Option<NaiveDate>,
    pub time_slot_start: Option<NaiveTime>,
    pub time_slot_end: Option<NaiveTime>,
    pub interview_type: Option<InterviewType>,
}

impl Interview {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Date and start time combined, in local wall-clock time.
    pub fn effective_start(&self) -> NaiveDateTime {
        self.date.and_time(self.time_slot_start)
    }

    pub fn duration_minutes(&self) -> i64 {
        time::minutes_between(self.time_slot_start, self.time_slot_end)
    }

    /// "h:mm AM - h:mm PM"
    pub fn slot_label(&self) -> String {
        time::slot_label(self.time_slot_start, self.time_slot_end)
    }

    /// Strip the id, e.g. to feed the record back through validation.
    pub fn to_new(&self) -> NewInterview {
        NewInterview {
            candidate: self.candidate.clone(),
            interviewer: self.interviewer.clone(),
            date: self.date,
            time_slot_start: self.time_slot_start,
            time_slot_end: self.time_slot_end,
            interview_type: self.interview_type,
        }
    }
}

impl NewInterview {
    pub fn with_id(self, id: String) -> Interview {
        Interview {
            id,
            candidate: self.candidate,
            interviewer: self.interviewer,
            date: self.date,
            time_slot_start: self.time_slot_start,
            time_slot_end: self.time_slot_end,
            interview_type: self.interview_type,
        }
    }
}

impl From<&Interview> for InterviewDraft {
    fn from(iv: &Interview) -> Self {
        Self {
            candidate: Some(iv.candidate.clone()),
            interviewer: Some(iv.interviewer.clone()),
            date: Some(iv.date),
            time_slot_start: Some(iv.time_slot_start),
            time_slot_end: Some(iv.time_slot_end),
            interview_type: Some(iv.interview_type),
        }
    }
}

/// Serde adapter storing `NaiveTime` as "HH:MM" (chrono's default keeps seconds).
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|_| D::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
    }
}
