//! Read-side aggregation over the completion ledger.
//!
//! Nothing here writes: the dashboard view and the streak are both projections
//! of `habit_definitions` joined against `habit_completions` rows.

use std::collections::HashSet;

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use serde::Serialize;

use super::habits::ensure_definition;
use super::users::ensure_user;
use super::{ledger, StoreError, DATE_FORMAT};

/// One habit as it appears on the dashboard for a given date.
#[derive(Debug, Clone, Serialize)]
pub struct HabitStatus {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub is_completed: bool,
}

/// The full completion record of one habit.
#[derive(Debug, Clone, Serialize)]
pub struct HabitHistory {
    pub current_streak: u32,
    pub completed_dates: Vec<NaiveDate>,
}

/// Every habit a user has defined, in creation order, each marked with
/// whether a completion row exists for `date`.
pub fn dashboard_status(
    conn: &Connection,
    user_id: &str,
    date: NaiveDate,
) -> Result<Vec<HabitStatus>, StoreError> {
    ensure_user(conn, user_id)?;

    let key = date.format(DATE_FORMAT).to_string();
    let mut stmt = conn.prepare(
        "SELECT d.id, d.name, d.icon, c.id IS NOT NULL
         FROM habit_definitions d
         LEFT JOIN habit_completions c ON c.habit_id = d.id AND c.date = ?2
         WHERE d.user_id = ?1
         ORDER BY d.created_at, d.id",
    )?;

    let statuses = stmt
        .query_map(params![user_id, key], |row| {
            Ok(HabitStatus {
                id: row.get(0)?,
                name: row.get(1)?,
                icon: row.get(2)?,
                is_completed: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(statuses)
}

/// The habit's current streak as of `today`, plus its full completion
/// history (most recent first).
///
/// The streak is the run of consecutive completed days ending at `today`,
/// with one day of grace: if `today` itself is not completed yet the walk
/// starts from yesterday, so an unbroken run is not reported as zero before
/// the user has had a chance to check in. Completions dated after `today`
/// never extend the streak, but they do appear in the history.
pub fn streak(
    conn: &Connection,
    definition_id: &str,
    today: NaiveDate,
) -> Result<HabitHistory, StoreError> {
    ensure_definition(conn, definition_id)?;

    let completed_dates = ledger::history(conn, definition_id)?;
    let completed: HashSet<NaiveDate> = completed_dates.iter().copied().collect();

    let mut current_streak = 0;
    let mut day = if completed.contains(&today) {
        today
    } else {
        today - chrono::Duration::days(1)
    };
    while completed.contains(&day) {
        current_streak += 1;
        day = day - chrono::Duration::days(1);
    }

    Ok(HabitHistory {
        current_streak,
        completed_dates,
    })
}
