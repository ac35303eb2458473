use crate::models::interview::Interview;
use chrono::NaiveDate;

/// Dashboard filter: exact date, case-insensitive substring on names.
/// Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub date: Option<NaiveDate>,
    pub candidate: Option<String>,
    pub interviewer: Option<String>,
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    match needle.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.candidate.as_deref().is_none_or(|s| s.trim().is_empty())
            && self.interviewer.as_deref().is_none_or(|s| s.trim().is_empty())
    }

    pub fn matches(&self, iv: &Interview) -> bool {
        self.date.is_none_or(|d| iv.date == d)
            && contains_ci(&iv.candidate, &self.candidate)
            && contains_ci(&iv.interviewer, &self.interviewer)
    }

    pub fn apply<'a>(&self, list: &'a [Interview]) -> Vec<&'a Interview> {
        list.iter().filter(|iv| self.matches(iv)).collect()
    }
}

/// Chronological order for display (the store itself keeps insertion order).
pub fn sort_for_display(list: &mut [&Interview]) {
    list.sort_by(|a, b| {
        a.effective_start()
            .cmp(&b.effective_start())
            .then_with(|| a.time_slot_end.cmp(&b.time_slot_end))
    });
}
