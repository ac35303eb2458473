use rusqlite::{Connection, OptionalExtension, Result};

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered schema migrations. Each one runs once; applied versions are
/// recorded in the `log` table as `migration_applied` rows.
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20250301_0001_create_kv_store",
        "Created kv_store table",
        create_kv_store,
    ),
    (
        "20250318_0002_kv_store_updated_at",
        "Added updated_at to kv_store",
        add_updated_at_to_kv_store,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the given table has a column with this name.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_kv_store(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )
}

fn add_updated_at_to_kv_store(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "kv_store", "updated_at")? {
        return Ok(());
    }
    conn.execute(
        "ALTER TABLE kv_store ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run all pending migrations. Called every time a database is opened, so it
/// prints nothing; returns the `(version, description)` pairs it applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<(&'static str, &'static str)>> {
    ensure_log_table(conn)?;
    let mut applied = Vec::new();

    for (version, description, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        apply(&tx)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, description],
        )?;
        tx.commit()?;

        applied.push((*version, *description));
    }

    Ok(applied)
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
