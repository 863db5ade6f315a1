//! One user's first week, end to end: sign up, define habits, check them
//! off over several days, then read the dashboard and streaks back.

mod helpers;

use helpers::{d, test_db};
use tend::store::types::Mood;
use tend::store::{habits, journal, ledger, status, users};

#[test]
fn a_week_of_habit_tracking() {
    let conn = test_db();

    // Sign-up: login creates the account on first sight of the email
    let ana = users::find_or_create_user(&conn, "Ana Souza", "ana@example.com").unwrap();
    users::update_main_goal(&conn, &ana.id, "Sleep better").unwrap();

    let water = habits::create_definition(&conn, &ana.id, "Drink water", "💧").unwrap();
    let run = habits::create_definition(&conn, &ana.id, "Go for a run", "🏃").unwrap();

    // Three days of water, logged out of order
    ledger::toggle(&conn, &water.id, d(2024, 1, 10)).unwrap();
    ledger::toggle(&conn, &water.id, d(2024, 1, 8)).unwrap();
    ledger::toggle(&conn, &water.id, d(2024, 1, 9)).unwrap();

    // The run was checked off by mistake and undone
    assert!(ledger::toggle(&conn, &run.id, d(2024, 1, 10)).unwrap());
    assert!(!ledger::toggle(&conn, &run.id, d(2024, 1, 10)).unwrap());

    // Dashboard for the 10th: water done, run not
    let board = status::dashboard_status(&conn, &ana.id, d(2024, 1, 10)).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].id, water.id);
    assert!(board[0].is_completed);
    assert_eq!(board[1].id, run.id);
    assert!(!board[1].is_completed);

    // Water streak: three consecutive days ending today
    let water_history = status::streak(&conn, &water.id, d(2024, 1, 10)).unwrap();
    assert_eq!(water_history.current_streak, 3);
    assert_eq!(
        water_history.completed_dates,
        vec![d(2024, 1, 10), d(2024, 1, 9), d(2024, 1, 8)]
    );

    // The undone run never happened as far as history is concerned
    let run_history = status::streak(&conn, &run.id, d(2024, 1, 10)).unwrap();
    assert_eq!(run_history.current_streak, 0);
    assert!(run_history.completed_dates.is_empty());

    // A journal entry rounds off the day
    journal::add_entry(&conn, &ana.id, d(2024, 1, 10), Mood::Good, Some("Felt rested."))
        .unwrap();
    let entries = journal::list_entries(&conn, &ana.id).unwrap();
    assert_eq!(entries.len(), 1);

    // Undoing the middle day cuts the streak down to just today
    ledger::toggle(&conn, &water.id, d(2024, 1, 9)).unwrap();
    let water_history = status::streak(&conn, &water.id, d(2024, 1, 10)).unwrap();
    assert_eq!(water_history.current_streak, 1);
    assert_eq!(
        water_history.completed_dates,
        vec![d(2024, 1, 10), d(2024, 1, 8)]
    );
}
