#![allow(dead_code)]

use football_data_core::{Database, Schedule, Statistic};

pub fn open_db() -> Database {
    Database::open_in_memory().unwrap()
}

pub fn schedule(team_id: i64, opponent_id: i64, year_value: i64, week_number: i64) -> Schedule {
    Schedule::new(
        team_id,
        opponent_id,
        year_value,
        week_number,
        665_566 + week_number,
        "www.google.com",
        1,
        true,
    )
}

pub fn team_stat(team_id: i64) -> Statistic {
    Statistic::for_team(team_id, 1, 1, 1, 20.0)
}

pub fn player_stat(player_id: i64) -> Statistic {
    Statistic::for_player(player_id, 1, 1, 1, 20.0)
}

/// Order-independent comparison of listing results.
pub fn assert_same_items<T: PartialEq + std::fmt::Debug>(actual: &[T], expected: &[T]) {
    assert_eq!(actual.len(), expected.len(), "actual: {actual:?}");
    for item in expected {
        assert!(actual.contains(item), "missing {item:?} in {actual:?}");
    }
}
