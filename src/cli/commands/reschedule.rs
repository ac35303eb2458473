use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reschedule::reschedule;
use crate::core::store::RecordStore;
use crate::db::log::try_ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move {
        id,
        date: date_arg,
        start,
    } = cmd
    {
        let new_date =
            date::parse_date(date_arg).ok_or_else(|| AppError::InvalidDate(date_arg.clone()))?;
        let new_start = time::parse_time(start).ok_or_else(|| AppError::InvalidTime(start.clone()))?;

        let mut store = RecordStore::load(DbPool::open(&cfg.database)?)?;
        let moved = reschedule(&mut store, id, new_date, new_start, date::now())?;

        success(format!(
            "Moved interview {} to {} {}",
            moved.id,
            moved.date_str(),
            moved.slot_label()
        ));

        try_ttlog(
            &store.storage().conn,
            "move",
            &moved.id,
            &format!("to {} {}", moved.date_str(), moved.slot_label()),
        );
    }

    Ok(())
}
