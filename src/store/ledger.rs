//! The habit completion ledger.
//!
//! Records "this habit was completed on this date" as one row per
//! (habit, date). There is no status flag: [`toggle`] inserts the row when it
//! is absent and deletes it when it is present, so an even number of toggles
//! always restores the starting state.
//!
//! The existence check and the insert/delete are separate statements, not a
//! transaction. When two toggles race on the same (habit, date), the
//! `UNIQUE(habit_id, date)` index is the final arbiter: the losing insert
//! sees a constraint violation and the losing delete removes zero rows, and
//! both cases mean the other toggle already performed this exact flip.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::habits::ensure_definition;
use super::{is_unique_violation, StoreError, DATE_FORMAT};

/// Flip the completion state of a habit for one calendar date.
///
/// Returns the state after the flip: `true` when a completion was recorded,
/// `false` when one was retracted. NotFound if the definition does not exist.
pub fn toggle(conn: &Connection, definition_id: &str, date: NaiveDate) -> Result<bool, StoreError> {
    ensure_definition(conn, definition_id)?;

    let key = date.format(DATE_FORMAT).to_string();
    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM habit_completions WHERE habit_id = ?1 AND date = ?2",
            params![definition_id, key],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(_) => retract_completion(conn, definition_id, &key),
        None => record_completion(conn, definition_id, &key),
    }
}

/// Every completed date for a habit, most recent first.
///
/// Unknown definitions and habits with no completions both yield an empty
/// sequence; callers that need existence checking must check the definition
/// separately.
pub fn history(conn: &Connection, definition_id: &str) -> Result<Vec<NaiveDate>, StoreError> {
    // Stored dates are zero-padded, so DESC text order is reverse-chronological.
    let mut stmt = conn.prepare(
        "SELECT date FROM habit_completions WHERE habit_id = ?1 ORDER BY date DESC",
    )?;

    let dates = stmt
        .query_map(params![definition_id], |row| {
            let raw: String = row.get(0)?;
            NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                .map_err(|_| rusqlite::Error::InvalidQuery)
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(dates)
}

/// Insert the completion row for (habit, date).
///
/// A unique violation here means a concurrent toggle inserted the row first;
/// the flip to completed has already happened, so it is reported as success.
fn record_completion(conn: &Connection, habit_id: &str, date: &str) -> Result<bool, StoreError> {
    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    match conn.execute(
        "INSERT INTO habit_completions (id, habit_id, date, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![id, habit_id, date, now],
    ) {
        Ok(_) => Ok(true),
        Err(e) if is_unique_violation(&e) => Ok(true),
        Err(e) => Err(e.into()),
    }
}

/// Delete the completion row for (habit, date).
///
/// Zero rows deleted means a concurrent toggle removed it first; either way
/// the completion is gone.
fn retract_completion(conn: &Connection, habit_id: &str, date: &str) -> Result<bool, StoreError> {
    conn.execute(
        "DELETE FROM habit_completions WHERE habit_id = ?1 AND date = ?2",
        params![habit_id, date],
    )?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::habits::create_definition;
    use crate::store::users::find_or_create_user;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "foreign_keys", "ON").unwrap();
        crate::db::schema::init_schema(&conn).unwrap();
        conn
    }

    fn test_definition(conn: &Connection) -> String {
        let user = find_or_create_user(conn, "Ana", "ana@example.com").unwrap();
        create_definition(conn, &user.id, "Drink water", "💧").unwrap().id
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn row_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM habit_completions", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn toggle_flips_state_each_call() {
        let conn = test_db();
        let def = test_definition(&conn);
        let date = d(2024, 1, 10);

        assert!(toggle(&conn, &def, date).unwrap());
        assert_eq!(row_count(&conn), 1);

        assert!(!toggle(&conn, &def, date).unwrap());
        assert_eq!(row_count(&conn), 0);

        assert!(toggle(&conn, &def, date).unwrap());
        assert_eq!(row_count(&conn), 1);
    }

    #[test]
    fn toggle_unknown_definition_is_not_found() {
        let conn = test_db();
        let result = toggle(&conn, "no-such-definition", d(2024, 1, 10));
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert_eq!(row_count(&conn), 0);
    }

    #[test]
    fn toggles_on_different_dates_are_independent() {
        let conn = test_db();
        let def = test_definition(&conn);

        assert!(toggle(&conn, &def, d(2024, 1, 10)).unwrap());
        assert!(toggle(&conn, &def, d(2024, 1, 11)).unwrap());
        assert_eq!(row_count(&conn), 2);

        assert!(!toggle(&conn, &def, d(2024, 1, 10)).unwrap());
        assert_eq!(row_count(&conn), 1);

        let remaining = history(&conn, &def).unwrap();
        assert_eq!(remaining, vec![d(2024, 1, 11)]);
    }

    #[test]
    fn raced_insert_is_reported_as_a_completed_flip() {
        let conn = test_db();
        let def = test_definition(&conn);

        // Another toggle already inserted this (habit, date)
        conn.execute(
            "INSERT INTO habit_completions (id, habit_id, date, created_at) \
             VALUES ('winner', ?1, '2024-01-10', '2024-01-10T09:00:00Z')",
            params![def],
        )
        .unwrap();

        // The losing insert must not surface the constraint violation
        assert!(record_completion(&conn, &def, "2024-01-10").unwrap());
        assert_eq!(row_count(&conn), 1, "the invariant row survives the race");
    }

    #[test]
    fn raced_delete_is_reported_as_a_completed_flip() {
        let conn = test_db();
        let def = test_definition(&conn);

        // Nothing to delete: the other toggle got here first
        assert!(!retract_completion(&conn, &def, "2024-01-10").unwrap());
        assert_eq!(row_count(&conn), 0);
    }

    #[test]
    fn history_is_descending_regardless_of_insertion_order() {
        let conn = test_db();
        let def = test_definition(&conn);

        toggle(&conn, &def, d(2024, 1, 9)).unwrap();
        toggle(&conn, &def, d(2024, 1, 11)).unwrap();
        toggle(&conn, &def, d(2024, 1, 10)).unwrap();

        let dates = history(&conn, &def).unwrap();
        assert_eq!(dates, vec![d(2024, 1, 11), d(2024, 1, 10), d(2024, 1, 9)]);
    }

    #[test]
    fn history_of_unknown_definition_is_empty_not_an_error() {
        let conn = test_db();
        assert!(history(&conn, "no-such-definition").unwrap().is_empty());
    }

    #[test]
    fn history_crosses_month_boundaries_in_order() {
        let conn = test_db();
        let def = test_definition(&conn);

        toggle(&conn, &def, d(2024, 2, 1)).unwrap();
        toggle(&conn, &def, d(2024, 1, 31)).unwrap();
        toggle(&conn, &def, d(2023, 12, 31)).unwrap();

        let dates = history(&conn, &def).unwrap();
        assert_eq!(dates, vec![d(2024, 2, 1), d(2024, 1, 31), d(2023, 12, 31)]);
    }
}
