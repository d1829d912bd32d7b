mod common;

use common::open_db;
use football_data_core::{
    BaseRepository, SqliteStatisticCodeRepository, StatisticCode, StatisticCodeLookup,
    StatisticCodeRepository,
};

#[test]
fn statistic_code_exists_by_code() {
    let db = open_db();
    let repo = SqliteStatisticCodeRepository::new(&db);
    let yards = StatisticCode::new("YDS", "Yards");
    repo.save(&yards).unwrap();

    assert!(repo.statistic_code_exists(&yards).unwrap());
    assert!(!repo
        .statistic_code_exists(&StatisticCode::new("ATT", "Attempts"))
        .unwrap());
}

#[test]
fn get_statistic_code_prefers_id_over_code() {
    let db = open_db();
    let repo = SqliteStatisticCodeRepository::new(&db);
    let yards = StatisticCode::new("YDS", "Yards").with_id(1);
    let attempts = StatisticCode::new("ATT", "Attempts").with_id(2);
    repo.save_all(&[&yards, &attempts]).unwrap();

    let both = StatisticCodeLookup {
        id: Some(2),
        code: Some("YDS".to_string()),
    };
    assert_eq!(repo.get_statistic_code(&both).unwrap(), Some(attempts));
    assert_eq!(
        repo.get_statistic_code(&StatisticCodeLookup::by_code("YDS"))
            .unwrap(),
        Some(yards)
    );
}

#[test]
fn get_statistic_code_missing_or_unfiltered_returns_none() {
    let db = open_db();
    let repo = SqliteStatisticCodeRepository::new(&db);
    repo.save(&StatisticCode::new("YDS", "Yards")).unwrap();

    assert!(repo
        .get_statistic_code(&StatisticCodeLookup::default())
        .unwrap()
        .is_none());
    assert!(repo
        .get_statistic_code(&StatisticCodeLookup::by_code("TD"))
        .unwrap()
        .is_none());
}

#[test]
fn get_statistic_codes_lists_all() {
    let db = open_db();
    let repo = SqliteStatisticCodeRepository::new(&db);
    let yards = StatisticCode::new("YDS", "Yards").with_id(1);
    let attempts = StatisticCode::new("ATT", "Attempts").with_id(2);
    repo.save_all(&[&attempts, &yards]).unwrap();

    assert_eq!(repo.get_statistic_codes().unwrap(), vec![yards, attempts]);
}
