mod common;

use common::{assert_same_items, open_db};
use football_data_core::{
    BaseRepository, Player, PlayerListQuery, PlayerLookup, PlayerRepository, Position,
    SqlitePlayerRepository,
};

#[test]
fn player_exists_after_save() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let player = Player::new("www.google.com", "Jim Smith").with_id(1);
    repo.save(&player).unwrap();

    assert!(repo.player_exists(&player).unwrap());
}

#[test]
fn player_with_other_url_does_not_exist() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    repo.save(&Player::new("www.google.com", "Jim Smith")).unwrap();

    let other = Player::new("www.player.com", "Bill Smith");
    assert!(!repo.player_exists(&other).unwrap());
}

#[test]
fn get_player_by_id_and_url() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let player = Player::new("www.google.com", "Jim Smith").with_id(1);
    repo.save(&player).unwrap();

    assert_eq!(
        repo.get_player(&PlayerLookup::by_id(1)).unwrap(),
        Some(player.clone())
    );
    assert_eq!(
        repo.get_player(&PlayerLookup::by_url("www.google.com")).unwrap(),
        Some(player)
    );
}

#[test]
fn get_player_missing_returns_none() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    repo.save(&Player::new("www.google.com", "Jim Smith")).unwrap();

    assert!(repo
        .get_player(&PlayerLookup::by_url("www.player.com"))
        .unwrap()
        .is_none());
    assert!(repo.get_player(&PlayerLookup::by_id(99)).unwrap().is_none());
}

#[test]
fn get_player_prefers_url_over_id() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let jim = Player::new("www.google.com", "Jim Smith").with_id(1);
    let bill = Player::new("www.player.com", "Bill Smith").with_id(2);
    repo.save_all(&[&jim, &bill]).unwrap();

    let lookup = PlayerLookup {
        url: Some("www.player.com".to_string()),
        id: Some(1),
    };
    assert_eq!(repo.get_player(&lookup).unwrap(), Some(bill));
}

#[test]
fn get_player_without_filters_returns_first_player() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let jim = Player::new("www.google.com", "Jim Smith").with_id(1);
    let bill = Player::new("www.player.com", "Bill Smith").with_id(2);
    repo.save_all(&[&bill, &jim]).unwrap();

    assert_eq!(repo.get_player(&PlayerLookup::default()).unwrap(), Some(jim));
}

#[test]
fn get_player_without_filters_on_empty_table_returns_none() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);

    assert!(repo.get_player(&PlayerLookup::default()).unwrap().is_none());
}

#[test]
fn get_players_without_filters_returns_everyone() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let jim = Player::new("www.google.com", "Jim Smith").with_id(1);
    let bill = Player::new("www.player.com", "Bill Smith")
        .with_id(2)
        .with_position(1);
    repo.save_all(&[&jim, &bill]).unwrap();

    let players = repo.get_players(&PlayerListQuery::default()).unwrap();
    assert_same_items(&players, &[jim, bill]);
}

#[test]
fn get_players_by_position_id() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let position = Position::new("QB", "Quarterback").with_id(1);
    let qb = Player::new("www.google.com", "Jim Smith")
        .with_id(1)
        .with_position(1);
    let rb = Player::new("www.player.com", "Bill Smith")
        .with_id(2)
        .with_position(2);
    repo.save_all(&[&qb, &rb, &position]).unwrap();

    let query = PlayerListQuery {
        position_id: Some(1),
        ..PlayerListQuery::default()
    };
    assert_eq!(repo.get_players(&query).unwrap(), vec![qb]);
}

#[test]
fn get_players_by_position_code() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let qb_position = Position::new("QB", "Quarterback").with_id(1);
    let rb_position = Position::new("RB", "Running Back").with_id(2);
    let qb = Player::new("www.google.com", "Jim Smith")
        .with_id(1)
        .with_position(1);
    let rb = Player::new("www.player.com", "Bill Smith")
        .with_id(2)
        .with_position(2);
    repo.save_all(&[&qb_position, &rb_position, &qb, &rb]).unwrap();

    let query = PlayerListQuery {
        position_code: Some("RB".to_string()),
        ..PlayerListQuery::default()
    };
    assert_eq!(repo.get_players(&query).unwrap(), vec![rb]);
}

#[test]
fn resolved_position_code_overrides_position_id() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let qb_position = Position::new("QB", "Quarterback").with_id(1);
    let qb = Player::new("www.google.com", "Jim Smith")
        .with_id(1)
        .with_position(1);
    let rb = Player::new("www.player.com", "Bill Smith")
        .with_id(2)
        .with_position(2);
    repo.save_all(&[&qb_position, &qb, &rb]).unwrap();

    let query = PlayerListQuery {
        position_id: Some(2),
        position_code: Some("QB".to_string()),
    };
    assert_eq!(repo.get_players(&query).unwrap(), vec![qb]);
}

#[test]
fn unknown_position_code_falls_back_to_every_player() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let position = Position::new("QB", "Quarterback").with_id(1);
    let qb = Player::new("www.google.com", "Jim Smith")
        .with_id(1)
        .with_position(1);
    let free_agent = Player::new("www.player.com", "Bill Smith").with_id(2);
    repo.save_all(&[&position, &qb, &free_agent]).unwrap();

    let query = PlayerListQuery {
        position_code: Some("ZZ".to_string()),
        ..PlayerListQuery::default()
    };
    let players = repo.get_players(&query).unwrap();
    assert_same_items(&players, &[qb, free_agent]);
}

#[test]
fn unknown_position_code_keeps_explicit_position_id() {
    let db = open_db();
    let repo = SqlitePlayerRepository::new(&db);
    let qb = Player::new("www.google.com", "Jim Smith")
        .with_id(1)
        .with_position(1);
    let rb = Player::new("www.player.com", "Bill Smith")
        .with_id(2)
        .with_position(2);
    repo.save_all(&[&qb, &rb]).unwrap();

    let query = PlayerListQuery {
        position_id: Some(2),
        position_code: Some("ZZ".to_string()),
    };
    assert_eq!(repo.get_players(&query).unwrap(), vec![rb]);
}
