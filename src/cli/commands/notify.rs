use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify;
use crate::core::store::RecordStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_countdown, paint};
use crate::utils::date;
use crate::utils::time::format_minutes;
use chrono::Duration;

/// List interviews starting within the notification window.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify { window } = cmd {
        let minutes = window.unwrap_or(cfg.notification_window_minutes);
        let span = Duration::try_minutes(minutes)
            .filter(|_| minutes > 0)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Notification window must be a positive number of minutes, got {}.",
                    minutes
                ))
            })?;

        let store = RecordStore::load(DbPool::open(&cfg.database)?)?;
        let now = date::now();
        let upcoming = notify::upcoming(store.list(), now, span);

        if upcoming.is_empty() {
            info(format!(
                "No upcoming interviews within the next {}.",
                format_minutes(minutes)
            ));
            return Ok(());
        }

        header(format!("🔔 Upcoming interviews ({})", upcoming.len()));
        for iv in upcoming {
            let left = notify::minutes_until(iv, now);
            println!(
                "• {} with {}: {}, {} {}",
                iv.candidate,
                iv.interviewer,
                iv.date_str(),
                iv.slot_label(),
                paint(color_for_countdown(left), &format!("(in {})", format_minutes(left)))
            );
        }
    }

    Ok(())
}
