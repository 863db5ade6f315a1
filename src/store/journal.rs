//! Journal entries: a dated mood plus optional free text.
//!
//! Deliberately plain insert/list. Unlike completions there is no uniqueness
//! per day, a user can journal as often as they like.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use super::types::{JournalEntry, Mood};
use super::users::ensure_user;
use super::{StoreError, DATE_FORMAT};

/// Record a journal entry for a user.
pub fn add_entry(
    conn: &Connection,
    user_id: &str,
    date: NaiveDate,
    mood: Mood,
    content: Option<&str>,
) -> Result<JournalEntry, StoreError> {
    ensure_user(conn, user_id)?;

    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let key = date.format(DATE_FORMAT).to_string();

    conn.execute(
        "INSERT INTO journal_entries (id, user_id, date, mood, content, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![id, user_id, key, mood.as_str(), content, now],
    )?;

    tracing::debug!(user_id = %user_id, date = %key, mood = %mood, "recorded journal entry");

    Ok(JournalEntry {
        id,
        user_id: user_id.to_string(),
        date,
        mood,
        content: content.map(str::to_string),
        created_at: now,
    })
}

/// All of a user's journal entries, newest first.
///
/// Entries sharing a date are ordered by insertion time, latest first.
pub fn list_entries(conn: &Connection, user_id: &str) -> Result<Vec<JournalEntry>, StoreError> {
    ensure_user(conn, user_id)?;

    let mut stmt = conn.prepare(
        "SELECT id, user_id, date, mood, content, created_at
         FROM journal_entries
         WHERE user_id = ?1
         ORDER BY date DESC, created_at DESC",
    )?;

    let entries = stmt
        .query_map(params![user_id], entry_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

fn entry_from_row(row: &Row) -> rusqlite::Result<JournalEntry> {
    let raw_date: String = row.get(2)?;
    let raw_mood: String = row.get(3)?;
    Ok(JournalEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: NaiveDate::parse_from_str(&raw_date, DATE_FORMAT)
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        mood: raw_mood
            .parse()
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        content: row.get(4)?,
        created_at: row.get(5)?,
    })
}
