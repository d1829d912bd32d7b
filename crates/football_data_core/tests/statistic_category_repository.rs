mod common;

use common::open_db;
use football_data_core::{
    BaseRepository, SqliteStatisticCategoryRepository, StatisticCategory,
    StatisticCategoryLookup, StatisticCategoryRepository,
};

#[test]
fn statistic_category_exists_by_code() {
    let db = open_db();
    let repo = SqliteStatisticCategoryRepository::new(&db);
    let passing = StatisticCategory::new("PASS", "Passing");
    repo.save(&passing).unwrap();

    assert!(repo.statistic_category_exists(&passing).unwrap());
    assert!(!repo
        .statistic_category_exists(&StatisticCategory::new("RUSH", "Rushing"))
        .unwrap());
}

#[test]
fn get_statistic_category_by_code_or_id() {
    let db = open_db();
    let repo = SqliteStatisticCategoryRepository::new(&db);
    let passing = StatisticCategory::new("PASS", "Passing").with_id(1);
    let rushing = StatisticCategory::new("RUSH", "Rushing").with_id(2);
    repo.save_all(&[&passing, &rushing]).unwrap();

    assert_eq!(
        repo.get_statistic_category(&StatisticCategoryLookup::by_code("RUSH"))
            .unwrap(),
        Some(rushing.clone())
    );
    assert_eq!(
        repo.get_statistic_category(&StatisticCategoryLookup::by_id(1))
            .unwrap(),
        Some(passing.clone())
    );

    let both = StatisticCategoryLookup {
        code: Some("PASS".to_string()),
        id: Some(2),
    };
    assert_eq!(repo.get_statistic_category(&both).unwrap(), Some(passing));
}

#[test]
fn get_statistic_category_missing_or_unfiltered_returns_none() {
    let db = open_db();
    let repo = SqliteStatisticCategoryRepository::new(&db);
    repo.save(&StatisticCategory::new("PASS", "Passing"))
        .unwrap();

    assert!(repo
        .get_statistic_category(&StatisticCategoryLookup::default())
        .unwrap()
        .is_none());
    assert!(repo
        .get_statistic_category(&StatisticCategoryLookup::by_id(9))
        .unwrap()
        .is_none());
}

#[test]
fn get_statistic_categories_lists_all() {
    let db = open_db();
    let repo = SqliteStatisticCategoryRepository::new(&db);
    let passing = StatisticCategory::new("PASS", "Passing").with_id(1);
    let rushing = StatisticCategory::new("RUSH", "Rushing").with_id(2);
    repo.save_all(&[&passing, &rushing]).unwrap();

    assert_eq!(
        repo.get_statistic_categories().unwrap(),
        vec![passing, rushing]
    );
}
