pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod email;
pub mod init;
pub mod list;
pub mod log;
pub mod notify;
pub mod reschedule;
pub mod slots;

use crate::errors::{AppError, AppResult};
use crate::models::interview_type::InterviewType;
use crate::utils::date;

/// Parse an optional `--type` value.
pub(crate) fn parse_optional_type(input: Option<&String>) -> AppResult<Option<InterviewType>> {
    match input {
        Some(s) => InterviewType::from_code(s).map(Some).ok_or_else(|| {
            let known: Vec<&str> = InterviewType::ALL.iter().map(|k| k.as_str()).collect();
            AppError::InvalidInterviewType(format!("'{}'. Use one of: {}", s, known.join(", ")))
        }),
        None => Ok(None),
    }
}

pub(crate) fn parse_optional_date(input: Option<&String>) -> AppResult<Option<chrono::NaiveDate>> {
    date::parse_optional_date(input).map_err(AppError::InvalidDate)
}
