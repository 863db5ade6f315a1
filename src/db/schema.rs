//! SQL DDL for all Tend tables.
//!
//! Defines the `users`, `habit_definitions`, `habit_completions`,
//! `journal_entries`, and `schema_meta` tables. All DDL uses `IF NOT EXISTS`
//! for idempotent initialization.
//!
//! Completion state is encoded as row presence: a `habit_completions` row for
//! (habit_id, date) means done, no row means not done. There is no status
//! flag column, so the `UNIQUE(habit_id, date)` index is the single arbiter
//! of the at-most-one-completion-per-day invariant.

use rusqlite::Connection;

/// All schema DDL statements for Tend's core tables.
const SCHEMA_SQL: &str = r#"
-- Accounts. Login is find-or-create keyed on email.
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    main_goal TEXT,
    created_at TEXT NOT NULL
);

-- A recurring habit a user tracks, independent of any specific day.
CREATE TABLE IF NOT EXISTS habit_definitions (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    icon TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_definitions_user ON habit_definitions(user_id);

-- The completion ledger: one row per (habit, calendar date) that was done.
-- Dates are stored as zero-padded YYYY-MM-DD text, so lexicographic order is
-- chronological order.
CREATE TABLE IF NOT EXISTS habit_completions (
    id TEXT PRIMARY KEY,
    habit_id TEXT NOT NULL REFERENCES habit_definitions(id) ON DELETE CASCADE,
    date TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(habit_id, date)
);

-- Daily mood journal. Multiple entries per day are allowed.
CREATE TABLE IF NOT EXISTS journal_entries (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    date TEXT NOT NULL,
    mood TEXT NOT NULL CHECK(mood IN ('happy','good','neutral','bad','sad')),
    content TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_journal_user ON journal_entries(user_id);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
