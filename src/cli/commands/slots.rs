use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::time::{self, END_CANDIDATE_STEP, MIN_SLOT_MINUTES};

/// Print the default end time and the offered end times for a start.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Slots { start } = cmd {
        let s = time::parse_time(start).ok_or_else(|| AppError::InvalidTime(start.clone()))?;

        match time::default_end_time(s) {
            Some(end) => println!(
                "Default end ({} min): {} ({})",
                MIN_SLOT_MINUTES,
                time::format_time(end),
                time::to_12_hour(end)
            ),
            None => warning("Start time too late to allow a 10 minute slot."),
        }

        let candidates = time::end_time_candidates(s);
        if candidates.is_empty() {
            return Ok(());
        }

        println!("End times every {} min:", END_CANDIDATE_STEP);
        for c in candidates {
            println!("  {}  ({})", time::format_time(c), time::to_12_hour(c));
        }
    }

    Ok(())
}
