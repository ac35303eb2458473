use super::interview::Interview;
use serde::Serialize;

/// Body of the `POST /sendemail` request sent when an interview is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPayload {
    pub recipient_name: String,
    pub interview_date: String, // YYYY-MM-DD
    pub interview_time: String, // "h:mm AM - h:mm AM"
    pub rec_email: String,
}

impl EmailPayload {
    pub fn for_interview(iv: &Interview, rec_email: &str) -> Self {
        Self {
            recipient_name: iv.candidate.clone(),
            interview_date: iv.date_str(),
            interview_time: iv.slot_label(),
            rec_email: rec_email.to_string(),
        }
    }
}
