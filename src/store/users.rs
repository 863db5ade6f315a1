//! User accounts — find-or-create login, lookup, and goal updates.

use rusqlite::{params, Connection, OptionalExtension};

use super::types::User;
use super::{is_unique_violation, StoreError};

/// Find a user by email, creating one if none exists.
///
/// Two concurrent logins with the same email race on the UNIQUE(email)
/// constraint; the loser re-reads the winner's row, so both callers get the
/// same user.
pub fn find_or_create_user(conn: &Connection, name: &str, email: &str) -> Result<User, StoreError> {
    if let Some(user) = user_by_email(conn, email)? {
        return Ok(user);
    }

    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    match conn.execute(
        "INSERT INTO users (id, name, email, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![id, name, email, now],
    ) {
        Ok(_) => {
            tracing::info!(id = %id, "user created");
            Ok(User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                main_goal: None,
                created_at: now,
            })
        }
        Err(e) if is_unique_violation(&e) => user_by_email(conn, email)?
            .ok_or_else(|| StoreError::not_found("user", email)),
        Err(e) => Err(e.into()),
    }
}

/// Fetch a user by ID. NotFound if absent.
pub fn get_user(conn: &Connection, user_id: &str) -> Result<User, StoreError> {
    conn.query_row(
        "SELECT id, name, email, main_goal, created_at FROM users WHERE id = ?1",
        params![user_id],
        user_from_row,
    )
    .optional()?
    .ok_or_else(|| StoreError::not_found("user", user_id))
}

/// Set the user's main goal and return the updated record.
pub fn update_main_goal(conn: &Connection, user_id: &str, goal: &str) -> Result<User, StoreError> {
    let rows = conn.execute(
        "UPDATE users SET main_goal = ?1 WHERE id = ?2",
        params![goal, user_id],
    )?;
    if rows == 0 {
        return Err(StoreError::not_found("user", user_id));
    }
    get_user(conn, user_id)
}

/// Validate that a user exists without fetching the full row.
pub(crate) fn ensure_user(conn: &Connection, user_id: &str) -> Result<(), StoreError> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM users WHERE id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .optional()?;
    match exists {
        Some(_) => Ok(()),
        None => Err(StoreError::not_found("user", user_id)),
    }
}

fn user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, StoreError> {
    Ok(conn
        .query_row(
            "SELECT id, name, email, main_goal, created_at FROM users WHERE email = ?1",
            params![email],
            user_from_row,
        )
        .optional()?)
}

fn user_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        main_goal: row.get(3)?,
        created_at: row.get(4)?,
    })
}
