mod common;

use common::{assert_same_items, open_db, schedule};
use football_data_core::{
    BaseRepository, ScheduleListQuery, ScheduleRepository, SqliteScheduleRepository,
};

#[test]
fn schedule_exists_matches_natural_key() {
    let db = open_db();
    let repo = SqliteScheduleRepository::new(&db);
    let game = schedule(1, 2, 2020, 3);
    repo.save(&game).unwrap();

    assert!(repo.schedule_exists(&game).unwrap());

    let mirrored = schedule(2, 1, 2020, 3);
    assert!(!repo.schedule_exists(&mirrored).unwrap());

    let mut other_type = game.clone();
    other_type.type_id = 2;
    assert!(!repo.schedule_exists(&other_type).unwrap());
}

#[test]
fn schedule_exists_ignores_non_key_fields() {
    let db = open_db();
    let repo = SqliteScheduleRepository::new(&db);
    let game = schedule(1, 2, 2020, 3);
    repo.save(&game).unwrap();

    let mut candidate = game.clone();
    candidate.url = "www.other.com".to_string();
    candidate.game_id = 1;
    candidate.is_home = false;
    assert!(repo.schedule_exists(&candidate).unwrap());
}

#[test]
fn get_schedule_by_id() {
    let db = open_db();
    let repo = SqliteScheduleRepository::new(&db);
    let game = schedule(1, 2, 2020, 3).with_id(1);
    let mut away = schedule(2, 1, 2020, 3).with_id(2);
    away.is_home = false;
    repo.save_all(&[&game, &away]).unwrap();

    assert_eq!(repo.get_schedule(1).unwrap(), Some(game));
    assert_eq!(repo.get_schedule(2).unwrap(), Some(away));
    assert!(repo.get_schedule(3).unwrap().is_none());
}

#[test]
fn get_schedules_without_filters_returns_all() {
    let db = open_db();
    let repo = SqliteScheduleRepository::new(&db);
    let first = schedule(1, 2, 2020, 3).with_id(1);
    let second = schedule(2, 1, 2020, 4).with_id(2);
    repo.save_all(&[&first, &second]).unwrap();

    let all = repo.get_schedules(&ScheduleListQuery::default()).unwrap();
    assert_same_items(&all, &[first, second]);
}

#[test]
fn get_schedules_combines_filters_with_and() {
    let db = open_db();
    let repo = SqliteScheduleRepository::new(&db);
    let first = schedule(1, 2, 2020, 3).with_id(1);
    let second = schedule(2, 1, 2020, 4).with_id(2);
    let third = schedule(2, 1, 2021, 4).with_id(3);
    repo.save_all(&[&first, &second, &third]).unwrap();

    let by_year_and_week = ScheduleListQuery {
        year: Some(2020),
        week: Some(3),
        ..ScheduleListQuery::default()
    };
    assert_eq!(
        repo.get_schedules(&by_year_and_week).unwrap(),
        vec![first.clone()]
    );

    let by_team_and_year = ScheduleListQuery {
        team_id: Some(2),
        year: Some(2020),
        ..ScheduleListQuery::default()
    };
    assert_eq!(
        repo.get_schedules(&by_team_and_year).unwrap(),
        vec![second.clone()]
    );

    let by_all = ScheduleListQuery {
        team_id: Some(1),
        year: Some(2020),
        week: Some(3),
    };
    assert_eq!(repo.get_schedules(&by_all).unwrap(), vec![first.clone()]);

    let by_year = ScheduleListQuery {
        year: Some(2020),
        ..ScheduleListQuery::default()
    };
    assert_same_items(
        &repo.get_schedules(&by_year).unwrap(),
        &[first, second.clone()],
    );

    let by_week = ScheduleListQuery {
        week: Some(4),
        ..ScheduleListQuery::default()
    };
    assert_same_items(&repo.get_schedules(&by_week).unwrap(), &[second, third]);
}

#[test]
fn get_schedules_with_no_match_is_empty() {
    let db = open_db();
    let repo = SqliteScheduleRepository::new(&db);
    repo.save(&schedule(1, 2, 2020, 3)).unwrap();

    let query = ScheduleListQuery {
        team_id: Some(9),
        ..ScheduleListQuery::default()
    };
    assert!(repo.get_schedules(&query).unwrap().is_empty());
}

#[test]
fn invalid_is_home_value_is_reported() {
    let db = open_db();
    let repo = SqliteScheduleRepository::new(&db);
    let id = repo.save(&schedule(1, 2, 2020, 3)).unwrap();
    db.session()
        .unwrap()
        .execute("UPDATE schedule SET is_home = 7 WHERE id = ?1;", [id])
        .unwrap();

    let err = repo.get_schedule(id).unwrap_err();
    assert!(matches!(err, football_data_core::RepoError::InvalidData(_)));
}
