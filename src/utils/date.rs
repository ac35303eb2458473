use chrono::{Local, NaiveDate, NaiveDateTime};

/// Current local wall-clock time, without offset (records carry none).
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> Result<Option<NaiveDate>, String> {
    match input {
        Some(s) => parse_date(s).map(Some).ok_or_else(|| s.to_string()),
        None => Ok(None),
    }
}
