pub mod migrations;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the Tend database at the given path, with pragmas set and
/// schema initialized.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    // Enable WAL mode for better concurrent read performance
    conn.pragma_update(None, "journal_mode", "WAL")?;
    // Enable foreign keys (cascade deletes depend on this)
    conn.pragma_update(None, "foreign_keys", "ON")?;
    // Wait for competing writers instead of failing immediately
    conn.pragma_update(None, "busy_timeout", 5000)?;

    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;

    tracing::info!(path = %path.display(), "database initialized");
    Ok(conn)
}

/// Result of a database health check, printed by `tend doctor`.
#[derive(Debug)]
pub struct HealthReport {
    pub schema_version: u32,
    pub user_count: u64,
    pub definition_count: u64,
    pub completion_count: u64,
    pub journal_count: u64,
    pub integrity_ok: bool,
    pub integrity_details: String,
}

/// Run integrity and row-count diagnostics against an open database.
pub fn check_database_health(conn: &Connection) -> Result<HealthReport> {
    let schema_version = migrations::get_schema_version(conn)?;

    let user_count = count_rows(conn, "users")?;
    let definition_count = count_rows(conn, "habit_definitions")?;
    let completion_count = count_rows(conn, "habit_completions")?;
    let journal_count = count_rows(conn, "journal_entries")?;

    let integrity_details: String =
        conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    let integrity_ok = integrity_details == "ok";

    Ok(HealthReport {
        schema_version,
        user_count,
        definition_count,
        completion_count,
        journal_count,
        integrity_ok,
        integrity_details,
    })
}

fn count_rows(conn: &Connection, table: &str) -> Result<u64> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count as u64)
}
