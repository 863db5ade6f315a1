//! Habit definitions — the named, recurring habits a user tracks.
//!
//! Definitions carry identity (name, icon, owner) only. Per-day state lives
//! entirely in the completion ledger ([`crate::store::ledger`]).

use rusqlite::{params, Connection, OptionalExtension};

use super::types::HabitDefinition;
use super::users::ensure_user;
use super::StoreError;

/// Create a habit definition for a user. NotFound if the user does not exist.
pub fn create_definition(
    conn: &Connection,
    user_id: &str,
    name: &str,
    icon: &str,
) -> Result<HabitDefinition, StoreError> {
    ensure_user(conn, user_id)?;

    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO habit_definitions (id, user_id, name, icon, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, user_id, name, icon, now],
    )?;

    tracing::info!(id = %id, user = %user_id, "habit definition created");

    Ok(HabitDefinition {
        id,
        user_id: user_id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        created_at: now,
    })
}

/// List a user's habit definitions in creation order.
pub fn list_definitions(
    conn: &Connection,
    user_id: &str,
) -> Result<Vec<HabitDefinition>, StoreError> {
    ensure_user(conn, user_id)?;

    // id (UUID v7, time-sortable) breaks created_at ties
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, icon, created_at FROM habit_definitions \
         WHERE user_id = ?1 ORDER BY created_at, id",
    )?;

    let definitions = stmt
        .query_map(params![user_id], definition_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(definitions)
}

/// Validate that a habit definition exists without fetching the full row.
pub(crate) fn ensure_definition(conn: &Connection, definition_id: &str) -> Result<(), StoreError> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM habit_definitions WHERE id = ?1",
            params![definition_id],
            |row| row.get(0),
        )
        .optional()?;
    match exists {
        Some(_) => Ok(()),
        None => Err(StoreError::not_found("habit definition", definition_id)),
    }
}

fn definition_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HabitDefinition> {
    Ok(HabitDefinition {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        icon: row.get(3)?,
        created_at: row.get(4)?,
    })
}
