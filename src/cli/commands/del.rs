use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::RecordStore;
use crate::db::log::try_ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = RecordStore::load(DbPool::open(&cfg.database)?)?;

        let label = store
            .get(id)
            .map(|iv| format!("{} with {} on {}", iv.candidate, iv.interviewer, iv.date_str()));

        if let Some(l) = &label
            && !*yes
            && !ask_confirmation(&format!("Delete interview {} ({})?", id, l))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        if store.remove(id)? {
            success(format!("Slot deleted: {}", id));
            try_ttlog(
                &store.storage().conn,
                "del",
                id,
                label.as_deref().unwrap_or_default(),
            );
        } else {
            info(format!("No interview with id {}; nothing to delete.", id));
        }
    }

    Ok(())
}
