/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::interview_type::InterviewType;

/// Colour used for the interview type column.
pub fn color_for_type(kind: InterviewType) -> &'static str {
    match kind {
        InterviewType::Technical => BLUE,
        InterviewType::Hr => MAGENTA,
        InterviewType::Behavioral => CYAN,
    }
}

/// Minutes until start:
/// <= 30 → red
/// <= 60 → yellow
/// otherwise → green
pub fn color_for_countdown(minutes: i64) -> &'static str {
    if minutes <= 30 {
        RED
    } else if minutes <= 60 {
        YELLOW
    } else {
        GREEN
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

