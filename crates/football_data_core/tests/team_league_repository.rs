mod common;

use common::{assert_same_items, open_db};
use football_data_core::{
    BaseRepository, SqliteTeamLeagueRepository, TeamLeague, TeamLeagueListQuery,
    TeamLeagueRepository,
};

#[test]
fn team_league_exists_matches_team_league_and_year() {
    let db = open_db();
    let repo = SqliteTeamLeagueRepository::new(&db);
    let membership = TeamLeague::new(1, 1, 2020);
    repo.save(&membership).unwrap();

    assert!(repo.team_league_exists(&membership).unwrap());
    assert!(!repo.team_league_exists(&TeamLeague::new(1, 1, 2021)).unwrap());
    assert!(!repo.team_league_exists(&TeamLeague::new(1, 2, 2020)).unwrap());
}

#[test]
fn get_team_league_by_id() {
    let db = open_db();
    let repo = SqliteTeamLeagueRepository::new(&db);
    let membership = TeamLeague::new(1, 1, 2020).with_id(1);
    repo.save(&membership).unwrap();

    assert_eq!(repo.get_team_league(1).unwrap(), Some(membership));
    assert!(repo.get_team_league(2).unwrap().is_none());
}

#[test]
fn get_team_leagues_filters_by_team_and_league() {
    let db = open_db();
    let repo = SqliteTeamLeagueRepository::new(&db);
    let first = TeamLeague::new(1, 1, 2020).with_id(1);
    let second = TeamLeague::new(2, 1, 2020).with_id(2);
    let moved = TeamLeague::new(1, 2, 2021).with_id(3);
    repo.save_all(&[&first, &second, &moved]).unwrap();

    assert_same_items(
        &repo
            .get_team_leagues(&TeamLeagueListQuery::default())
            .unwrap(),
        &[first.clone(), second.clone(), moved.clone()],
    );

    let by_league = TeamLeagueListQuery {
        league_id: Some(1),
        ..TeamLeagueListQuery::default()
    };
    assert_same_items(
        &repo.get_team_leagues(&by_league).unwrap(),
        &[first.clone(), second],
    );

    let by_both = TeamLeagueListQuery {
        team_id: Some(1),
        league_id: Some(2),
    };
    assert_eq!(repo.get_team_leagues(&by_both).unwrap(), vec![moved]);

    let by_team = TeamLeagueListQuery {
        team_id: Some(3),
        ..TeamLeagueListQuery::default()
    };
    assert!(repo.get_team_leagues(&by_team).unwrap().is_empty());
}
