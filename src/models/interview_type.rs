use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewType {
    Technical,
    #[serde(rename = "HR")]
    Hr,
    Behavioral,
}

impl InterviewType {
    pub const ALL: [InterviewType; 3] = [
        InterviewType::Technical,
        InterviewType::Hr,
        InterviewType::Behavioral,
    ];

    /// Canonical label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "Technical",
            InterviewType::Hr => "HR",
            InterviewType::Behavioral => "Behavioral",
        }
    }

    /// Helper: convert input from CLI (any case, short codes accepted)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "technical" | "tech" | "t" => Some(InterviewType::Technical),
            "hr" | "h" => Some(InterviewType::Hr),
            "behavioral" | "behavioural" | "b" => Some(InterviewType::Behavioral),
            _ => None,
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
