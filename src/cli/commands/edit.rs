use super::{parse_optional_date, parse_optional_type};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::RecordStore;
use crate::core::validate;
use crate::db::log::try_ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::interview::InterviewDraft;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_time;

/// Update the given fields of an interview, keeping its id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        candidate,
        interviewer,
        date,
        start,
        end,
        kind,
    } = cmd
    {
        let date = parse_optional_date(date.as_ref())?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;
        let kind = parse_optional_type(kind.as_ref())?;

        let mut store = RecordStore::load(DbPool::open(&cfg.database)?)?;

        let existing = store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.clone()))?;

        let mut draft = InterviewDraft::from(&existing);
        if let Some(c) = candidate {
            draft.candidate = Some(c.clone());
        }
        if let Some(i) = interviewer {
            draft.interviewer = Some(i.clone());
        }
        if date.is_some() {
            draft.date = date;
        }
        if kind.is_some() {
            draft.interview_type = kind;
        }

        // A new start pushes a stale end forward to the minimum slot.
        match (start, end) {
            (Some(s), None) => {
                draft.time_slot_start = Some(s);
                if existing.time_slot_end <= s {
                    draft.time_slot_end = Some(validate::resolve_end(s, None)?);
                }
            }
            (s, e) => {
                if s.is_some() {
                    draft.time_slot_start = s;
                }
                if e.is_some() {
                    draft.time_slot_end = e;
                }
            }
        }

        let updated = validate::validate_draft(&draft)?.with_id(existing.id.clone());
        store.update(updated.clone())?;

        success(format!(
            "Slot updated: {} with {} on {} {}",
            updated.candidate,
            updated.interviewer,
            updated.date_str(),
            updated.slot_label()
        ));

        try_ttlog(
            &store.storage().conn,
            "edit",
            &updated.id,
            &format!(
                "{} / {} on {} {}",
                updated.candidate,
                updated.interviewer,
                updated.date_str(),
                updated.slot_label()
            ),
        );
    }

    Ok(())
}
