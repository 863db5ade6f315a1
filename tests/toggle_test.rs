mod helpers;

use helpers::{d, insert_definition, insert_user, test_db};
use tend::store::{ledger, StoreError};

#[test]
fn toggle_records_then_retracts() {
    let conn = test_db();
    let user = insert_user(&conn, "Ana Souza", "ana@example.com");
    let water = insert_definition(&conn, &user, "Drink water", "💧");

    assert!(ledger::toggle(&conn, &water, d(2024, 1, 10)).unwrap());
    assert_eq!(ledger::history(&conn, &water).unwrap(), vec![d(2024, 1, 10)]);

    assert!(!ledger::toggle(&conn, &water, d(2024, 1, 10)).unwrap());
    assert!(ledger::history(&conn, &water).unwrap().is_empty());
}

#[test]
fn even_number_of_toggles_restores_the_starting_state() {
    let conn = test_db();
    let user = insert_user(&conn, "Ana Souza", "ana@example.com");
    let water = insert_definition(&conn, &user, "Drink water", "💧");
    let date = d(2024, 1, 10);

    for _ in 0..3 {
        assert!(ledger::toggle(&conn, &water, date).unwrap());
        assert!(!ledger::toggle(&conn, &water, date).unwrap());
    }
    assert!(ledger::history(&conn, &water).unwrap().is_empty());
}

#[test]
fn toggles_do_not_leak_across_definitions() {
    let conn = test_db();
    let user = insert_user(&conn, "Ana Souza", "ana@example.com");
    let water = insert_definition(&conn, &user, "Drink water", "💧");
    let run = insert_definition(&conn, &user, "Go for a run", "🏃");

    ledger::toggle(&conn, &water, d(2024, 1, 10)).unwrap();

    assert_eq!(ledger::history(&conn, &water).unwrap().len(), 1);
    assert!(ledger::history(&conn, &run).unwrap().is_empty());

    // Retracting on one definition leaves the other untouched
    ledger::toggle(&conn, &run, d(2024, 1, 10)).unwrap();
    ledger::toggle(&conn, &water, d(2024, 1, 10)).unwrap();
    assert!(ledger::history(&conn, &water).unwrap().is_empty());
    assert_eq!(ledger::history(&conn, &run).unwrap().len(), 1);
}

#[test]
fn toggle_on_unknown_definition_is_rejected() {
    let conn = test_db();
    let result = ledger::toggle(&conn, "no-such-definition", d(2024, 1, 10));
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[test]
fn deleting_a_definition_removes_its_completions() {
    let conn = test_db();
    let user = insert_user(&conn, "Ana Souza", "ana@example.com");
    let water = insert_definition(&conn, &user, "Drink water", "💧");

    ledger::toggle(&conn, &water, d(2024, 1, 9)).unwrap();
    ledger::toggle(&conn, &water, d(2024, 1, 10)).unwrap();

    conn.execute("DELETE FROM habit_definitions WHERE id = ?1", [&water])
        .unwrap();

    let orphans: i64 = conn
        .query_row("SELECT COUNT(*) FROM habit_completions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn duplicate_completion_rows_are_impossible() {
    let conn = test_db();
    let user = insert_user(&conn, "Ana Souza", "ana@example.com");
    let water = insert_definition(&conn, &user, "Drink water", "💧");

    ledger::toggle(&conn, &water, d(2024, 1, 10)).unwrap();

    // Bypassing the ledger still can't create a second row for the pair
    let direct = conn.execute(
        "INSERT INTO habit_completions (id, habit_id, date, created_at) \
         VALUES ('dup', ?1, '2024-01-10', '2024-01-10T12:00:00Z')",
        [&water],
    );
    assert!(direct.is_err());
}
