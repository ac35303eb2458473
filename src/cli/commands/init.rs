use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::email;
use crate::db::log::try_ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with --test)
///  - the SQLite database and all pending migrations
///  - optionally the recipient email
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing rInterviews…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let mut pool = DbPool::new(&cfg.database)?;
    for (version, description) in run_pending_migrations(&pool.conn)? {
        success(format!("Migration applied: {} → {}", version, description));
    }
    success(format!("Database initialized at {}", &cfg.database));

    try_ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    if let Commands::Init { email: Some(addr) } = &cli.command {
        let saved = email::set_recipient_email(&mut pool, addr)?;
        success(format!("Notifications will be sent to {}", saved));
        try_ttlog(&pool.conn, "email", &saved, "Recipient email set");
    }

    success("rInterviews initialization completed!");
    Ok(())
}
