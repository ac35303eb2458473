use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::email;
use crate::db::log::try_ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Show or set the notification recipient.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Email { set } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        match set {
            Some(addr) => {
                let saved = email::set_recipient_email(&mut pool, addr)?;
                success(format!("Notifications will be sent to {}", saved));
                try_ttlog(&pool.conn, "email", &saved, "Recipient email set");
            }
            None => match email::recipient_email(&pool)? {
                Some(addr) => info(format!("Recipient email: {}", addr)),
                None => warning(
                    "No recipient email set. Use `rinterviews email --set <address>`.",
                ),
            },
        }
    }

    Ok(())
}
