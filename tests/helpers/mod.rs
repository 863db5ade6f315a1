#![allow(dead_code)]

use chrono::NaiveDate;
use rusqlite::Connection;
use tend::db;
use tend::store::{habits, users};

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// Create a user and return its ID.
pub fn insert_user(conn: &Connection, name: &str, email: &str) -> String {
    users::find_or_create_user(conn, name, email).unwrap().id
}

/// Create a habit definition and return its ID.
pub fn insert_definition(conn: &Connection, user_id: &str, name: &str, icon: &str) -> String {
    habits::create_definition(conn, user_id, name, icon)
        .unwrap()
        .id
}

/// Shorthand for calendar dates in test fixtures.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}
