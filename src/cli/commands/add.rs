use super::{parse_optional_date, parse_optional_type};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::email::{self, HttpNotifier};
use crate::core::store::RecordStore;
use crate::core::validate;
use crate::db::log::try_ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::interview::InterviewDraft;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::{format_time, parse_optional_time};

/// Schedule a new interview and send the creation email.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        candidate,
        interviewer,
        date: date_arg,
        start,
        end,
        kind,
        no_email,
    } = cmd
    {
        //
        // 1. Parse what was given
        //
        let date = parse_optional_date(date_arg.as_ref())?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;
        let kind = parse_optional_type(kind.as_ref())?;

        //
        // 2. End defaults to the minimum slot after start
        //
        let end = match start {
            Some(s) => Some(validate::resolve_end(s, end)?),
            None => end,
        };

        let draft = InterviewDraft {
            candidate: candidate.clone(),
            interviewer: interviewer.clone(),
            date,
            time_slot_start: start,
            time_slot_end: end,
            interview_type: kind,
        };

        //
        // 3. Validate (nothing is written before this passes)
        //
        let new = validate::validate_draft(&draft)?;
        validate::ensure_not_past(new.date, new.time_slot_start, date::now())?;

        //
        // 4. Open store
        //
        let mut store = RecordStore::load(DbPool::open(&cfg.database)?)?;

        let rec_email = if *no_email {
            None
        } else {
            Some(email::require_recipient(store.storage())?)
        };

        //
        // 5. Add (conflict check + snapshot write)
        //
        let created = store.add(new)?;

        success(format!(
            "Scheduled {} with {} on {} {}-{} ({}) [id {}]",
            created.candidate,
            created.interviewer,
            created.date_str(),
            format_time(created.time_slot_start),
            format_time(created.time_slot_end),
            created.interview_type,
            created.id
        ));

        try_ttlog(
            &store.storage().conn,
            "add",
            &created.id,
            &format!(
                "{} / {} on {} {}",
                created.candidate,
                created.interviewer,
                created.date_str(),
                created.slot_label()
            ),
        );

        //
        // 6. Email: failure is only a warning, the interview stays scheduled
        //
        if let Some(rec) = rec_email {
            let sent = HttpNotifier::new(&cfg.api_url, cfg.request_timeout_secs)
                .and_then(|n| email::notify_created(&n, &created, &rec));

            match sent {
                Ok(_) => success("Email sent successfully!"),
                Err(e) => warning(e),
            }
        }
    }

    Ok(())
}
